// src/db/schema.rs

use sqlx::SqlitePool;

use crate::common::error::AppError;

// DDL idempotente, executado a cada boot. Sem sistema de migrações:
// o esquema é pequeno e `IF NOT EXISTS` cobre o ciclo de vida atual.

const CREATE_FAMILIES: &str = r#"
CREATE TABLE IF NOT EXISTS families (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    inventory_location TEXT NOT NULL DEFAULT 'maracay'
)
"#;

const CREATE_MEDICATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS medications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    family_id INTEGER,
    name TEXT NOT NULL,
    description TEXT,
    presentation TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 0,
    expiration_date TEXT NOT NULL,
    image_url TEXT,
    mechanism_of_action TEXT,
    indications TEXT,
    posology TEXT,
    administration_route TEXT,
    inventory_location TEXT NOT NULL DEFAULT 'maracay',
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT 'viewer',
    inventory_location TEXT NOT NULL DEFAULT 'maracay'
)
"#;

pub async fn init(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_FAMILIES).execute(pool).await?;
    sqlx::query(CREATE_MEDICATIONS).execute(pool).await?;
    sqlx::query(CREATE_USERS).execute(pool).await?;

    tracing::info!("✅ Esquema do banco de dados pronto!");
    Ok(())
}
