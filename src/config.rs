// src/config.rs

use std::{env, str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{
    db::{FamilyRepository, MedicationRepository, UserRepository},
    services::auth::AuthService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub jwt_secret: String,
    pub auth_service: AuthService,
    pub family_repo: FamilyRepository,
    pub medication_repo: MedicationRepository,
    pub user_repo: UserRepository,
}

impl AppState {
    // A assinatura retorna um Result!
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // O arquivo local é o padrão; o .env só precisa mesmo do segredo.
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:farmacia.db".to_string());
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, jwt_secret))
    }

    // Monta o gráfico de dependências sobre um pool já aberto.
    // Os testes de integração chamam isso com um banco em memória.
    pub fn with_pool(db_pool: SqlitePool, jwt_secret: impl Into<String>) -> Self {
        let jwt_secret = jwt_secret.into();
        let user_repo = UserRepository::new(db_pool.clone());
        let family_repo = FamilyRepository::new(db_pool.clone());
        let medication_repo = MedicationRepository::new(db_pool.clone());
        let auth_service = AuthService::new(user_repo.clone(), jwt_secret.clone());

        Self {
            db_pool,
            jwt_secret,
            auth_service,
            family_repo,
            medication_repo,
            user_repo,
        }
    }
}
