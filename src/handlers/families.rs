// src/handlers/families.rs

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
    models::family::{CreateFamilyPayload, Family},
};

// ---
// Handler: list_families
// ---
#[utoipa::path(
    get,
    path = "/api/families",
    responses(
        (status = 200, description = "Famílias da sede do usuário", body = [Family]),
        (status = 401, description = "Token inválido ou ausente"),
    ),
    security(("api_jwt" = [])),
    tag = "Families"
)]
pub async fn list_families(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let families = app_state.family_repo.list(Some(tenant.0)).await?;
    Ok((StatusCode::OK, Json(families)))
}

// ---
// Handler: create_family
// ---
#[utoipa::path(
    post,
    path = "/api/families",
    request_body = CreateFamilyPayload,
    responses(
        (status = 201, description = "Família criada", body = Family),
        (status = 400, description = "Payload inválido"),
        (status = 403, description = "Requer administrador"),
    ),
    security(("api_jwt" = [])),
    tag = "Families"
)]
pub async fn create_family(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _guard: RequireAdmin,
    Json(payload): Json<CreateFamilyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    // O `unwrap` é seguro: `required` já passou.
    let family = app_state
        .family_repo
        .create(
            payload.name.as_deref().unwrap(),
            payload.description.as_deref(),
            tenant.0,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(family)))
}

// ---
// Handler: get_family
// ---
#[utoipa::path(
    get,
    path = "/api/families/{id}",
    params(("id" = i64, Path, description = "ID da família")),
    responses(
        (status = 200, description = "Família encontrada", body = Family),
        (status = 404, description = "Família não existe"),
    ),
    security(("api_jwt" = [])),
    tag = "Families"
)]
pub async fn get_family(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Family>, AppError> {
    let family = app_state
        .family_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Family not found"))?;

    Ok(Json(family))
}
