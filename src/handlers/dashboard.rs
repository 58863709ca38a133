// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    common::error::AppError,
    config::AppState,
    db::MedicationFilter,
    middleware::tenancy::TenantContext,
    models::{
        dashboard::InventorySummary,
        medication::{ExpiryStatus, LOW_STOCK_THRESHOLD},
    },
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contadores do inventário da sede", body = InventorySummary),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let medications = app_state
        .medication_repo
        .list(&MedicationFilter::scoped(tenant.0))
        .await?;

    let now = Utc::now();
    let mut expired = 0;
    let mut expiring_soon = 0;
    let mut low_stock = 0;
    let mut out_of_stock = 0;

    for entry in &medications {
        let medication = &entry.medication;
        match ExpiryStatus::classify(medication.expiration_date, now) {
            ExpiryStatus::Expired => expired += 1,
            ExpiryStatus::ExpiringSoon => expiring_soon += 1,
            ExpiryStatus::Good => {}
        }
        // Estoque zerado também conta como estoque baixo, igual aos cards.
        if medication.quantity < LOW_STOCK_THRESHOLD {
            low_stock += 1;
        }
        if medication.quantity == 0 {
            out_of_stock += 1;
        }
    }

    let summary = InventorySummary {
        total_medications: medications.len() as i64,
        expired,
        expiring_soon,
        low_stock,
        out_of_stock,
    };

    Ok((StatusCode::OK, Json(summary)))
}
