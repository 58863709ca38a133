// src/main.rs

use tokio::net::TcpListener;

use farmacia_backend::{app::build_router, config::AppState, db};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Garante as tabelas (CREATE TABLE IF NOT EXISTS) na inicialização
    db::schema::init(&app_state.db_pool)
        .await
        .expect("Falha ao preparar o esquema do banco de dados.");

    // Primeira execução: cria os admins e o catálogo de exemplo das duas sedes
    db::seed::run(&app_state)
        .await
        .expect("Falha ao popular os dados iniciais.");

    let app = build_router(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
