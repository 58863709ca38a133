// src/handlers/medications.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    db::MedicationFilter,
    middleware::{rbac::RequireAdmin, tenancy::TenantContext},
    models::medication::{
        CreateMedicationPayload, Medication, MedicationWithFamily, UpdateMedicationPayload,
    },
};

// Filtros da listagem; quando os dois vêm juntos, valem os dois.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMedicationsQuery {
    pub search: Option<String>,
    pub family_id: Option<i64>,
}

// ---
// Handler: list_medications
// ---
#[utoipa::path(
    get,
    path = "/api/medications",
    params(ListMedicationsQuery),
    responses(
        (status = 200, description = "Medicamentos da sede, com a família anexada", body = [MedicationWithFamily]),
        (status = 401, description = "Token inválido ou ausente"),
    ),
    security(("api_jwt" = [])),
    tag = "Medications"
)]
pub async fn list_medications(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    Query(query): Query<ListMedicationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = MedicationFilter {
        search: query.search,
        family_id: query.family_id,
        location: Some(tenant.0),
    };

    let medications = app_state.medication_repo.list(&filter).await?;
    Ok((StatusCode::OK, Json(medications)))
}

// ---
// Handler: get_medication
// ---
#[utoipa::path(
    get,
    path = "/api/medications/{id}",
    params(("id" = i64, Path, description = "ID do medicamento")),
    responses(
        (status = 200, description = "Medicamento encontrado", body = MedicationWithFamily),
        (status = 404, description = "Medicamento não existe"),
    ),
    security(("api_jwt" = [])),
    tag = "Medications"
)]
pub async fn get_medication(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MedicationWithFamily>, AppError> {
    let medication = app_state
        .medication_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Medication not found"))?;

    Ok(Json(medication))
}

// ---
// Handler: create_medication
// ---
#[utoipa::path(
    post,
    path = "/api/medications",
    request_body = CreateMedicationPayload,
    responses(
        (status = 201, description = "Medicamento criado", body = Medication),
        (status = 400, description = "Payload inválido"),
        (status = 403, description = "Requer administrador"),
    ),
    security(("api_jwt" = [])),
    tag = "Medications"
)]
pub async fn create_medication(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _guard: RequireAdmin,
    Json(payload): Json<CreateMedicationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let medication = app_state
        .medication_repo
        .create(payload.into_new(), tenant.0)
        .await?;

    Ok((StatusCode::CREATED, Json(medication)))
}

// ---
// Handler: update_medication
// ---
#[utoipa::path(
    put,
    path = "/api/medications/{id}",
    params(("id" = i64, Path, description = "ID do medicamento")),
    request_body = UpdateMedicationPayload,
    responses(
        (status = 200, description = "Medicamento atualizado", body = Medication),
        (status = 400, description = "Payload inválido"),
        (status = 403, description = "Requer administrador"),
        (status = 404, description = "Medicamento não existe na sede do usuário"),
    ),
    security(("api_jwt" = [])),
    tag = "Medications"
)]
pub async fn update_medication(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _guard: RequireAdmin,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMedicationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let medication = app_state
        .medication_repo
        .update(id, &payload, tenant.0)
        .await?
        .ok_or(AppError::NotFound("Medication not found"))?;

    Ok((StatusCode::OK, Json(medication)))
}

// ---
// Handler: delete_medication
// ---
#[utoipa::path(
    delete,
    path = "/api/medications/{id}",
    params(("id" = i64, Path, description = "ID do medicamento")),
    responses(
        (status = 204, description = "Medicamento removido (ou já não existia)"),
        (status = 403, description = "Requer administrador"),
    ),
    security(("api_jwt" = [])),
    tag = "Medications"
)]
pub async fn delete_medication(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _guard: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    app_state.medication_repo.delete(id, tenant.0).await?;
    Ok(StatusCode::NO_CONTENT)
}
