// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::tenancy::InventoryLocation;

// Papel de acesso: administradores mudam o inventário, "viewers" só leem.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Viewer,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    #[schema(example = "maria_lopez")]
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    pub role: Role,
    pub inventory_location: InventoryLocation,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(length(min = 1, message = "El usuario es requerido"))]
    #[schema(example = "admin")]
    pub username: String,

    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,
}

// Dados para criação de usuário (apenas admins)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(
        required(message = "El usuario es requerido"),
        length(min = 1, message = "El usuario es requerido")
    )]
    #[schema(example = "juan_perez")]
    pub username: Option<String>,

    #[validate(
        required(message = "La contraseña es requerida"),
        length(min = 1, message = "La contraseña es requerida")
    )]
    pub password: Option<String>,

    // Se omitido, o usuário entra como "viewer".
    #[serde(default)]
    pub role: Option<Role>,
}

// Resposta de autenticação com o token e o perfil logado
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}
