/// Boot-time behavior: first-run seeding and the health/docs endpoints.

mod common;

use axum::http::StatusCode;
use common::TestContext;
use farmacia_backend::app::build_router;
use farmacia_backend::db::{seed, MedicationFilter};
use farmacia_backend::models::tenancy::InventoryLocation;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn seed_runs_once_and_covers_both_locations() {
    let state = common::empty_state().await.unwrap();

    seed::run(&state).await.unwrap();

    // 3 families and 3 medications per location, 2 admin accounts.
    assert_eq!(state.family_repo.list(None).await.unwrap().len(), 6);
    assert_eq!(state.user_repo.count().await.unwrap(), 2);

    let maracay = state
        .medication_repo
        .list(&MedicationFilter::scoped(InventoryLocation::Maracay))
        .await
        .unwrap();
    let magdaleno = state
        .medication_repo
        .list(&MedicationFilter::scoped(InventoryLocation::Magdaleno))
        .await
        .unwrap();
    assert_eq!(maracay.len(), 3);
    assert_eq!(magdaleno.len(), 3);

    // A second boot must not duplicate anything.
    seed::run(&state).await.unwrap();
    assert_eq!(state.family_repo.list(None).await.unwrap().len(), 6);
    assert_eq!(state.user_repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn seeded_admin_can_log_in() {
    let state = common::empty_state().await.unwrap();
    seed::run(&state).await.unwrap();
    let app = build_router(state);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({"username": "magdaleno", "password": "magdaleno123"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["inventoryLocation"], "magdaleno");
}

#[tokio::test]
async fn health_check_is_public() {
    let ctx = TestContext::new().await.unwrap();

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .request("GET", "/api-docs/openapi.json", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/medications"].is_object());
    assert!(body["components"]["schemas"]["Medication"].is_object());
}
