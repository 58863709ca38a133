// src/handlers/users.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{rbac::RequireAdmin, tenancy::TenantContext},
    models::auth::{CreateUserPayload, User},
};

// ---
// Handler: list_users
// ---
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Usuários da sede (sem o hash de senha)", body = [User]),
        (status = 401, description = "Token inválido ou ausente"),
    ),
    security(("api_jwt" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list(Some(tenant.0)).await?;
    Ok((StatusCode::OK, Json(users)))
}

// ---
// Handler: create_user
// ---
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado na sede do admin", body = User),
        (status = 400, description = "Payload inválido"),
        (status = 403, description = "Requer administrador"),
        (status = 409, description = "Nome de usuário já em uso"),
    ),
    security(("api_jwt" = [])),
    tag = "Users"
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _guard: RequireAdmin,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    // Os `unwrap` são seguros: `required` já passou.
    let username = payload.username.as_deref().unwrap();
    let password = payload.password.as_deref().unwrap();

    // Checagem antecipada para uma resposta melhor; a UNIQUE do banco
    // continua cobrindo a corrida entre duas criações simultâneas.
    if app_state
        .user_repo
        .find_by_username(username)
        .await?
        .is_some()
    {
        return Err(AppError::UsernameAlreadyExists);
    }

    let password_hash = app_state.auth_service.hash_password(password).await?;
    let user = app_state
        .user_repo
        .create(
            username,
            &password_hash,
            payload.role.unwrap_or_default(),
            tenant.0,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// ---
// Handler: delete_user
// ---
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário removido (ou já não existia)"),
        (status = 403, description = "Requer administrador"),
    ),
    security(("api_jwt" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    _guard: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    app_state.user_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
