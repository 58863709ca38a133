/// Common test utilities for integration tests
///
/// Spins up the real router over an in-memory SQLite database, with one
/// admin and one viewer account (both at the Maracay location) ready to
/// authenticate.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use farmacia_backend::app::build_router;
use farmacia_backend::config::AppState;
use farmacia_backend::db::schema;
use farmacia_backend::models::auth::Role;
use farmacia_backend::models::tenancy::InventoryLocation;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Test context containing the app and ready-to-use credentials
pub struct TestContext {
    pub app: axum::Router,
    pub state: AppState,
    pub admin_token: String,
    pub viewer_token: String,
}

impl TestContext {
    /// Fresh database with the schema applied and two users created:
    /// "admin" (admin role) and "viewer" (viewer role), both in Maracay.
    pub async fn new() -> anyhow::Result<Self> {
        let state = empty_state().await?;

        let admin_token = create_user(
            &state,
            "admin",
            "admin123",
            Role::Admin,
            InventoryLocation::Maracay,
        )
        .await?;
        let viewer_token = create_user(
            &state,
            "viewer",
            "viewer123",
            Role::Viewer,
            InventoryLocation::Maracay,
        )
        .await?;

        let app = build_router(state.clone());

        Ok(TestContext {
            app,
            state,
            admin_token,
            viewer_token,
        })
    }

    /// Returns the admin authorization header value
    pub fn admin_auth(&self) -> String {
        format!("Bearer {}", self.admin_token)
    }

    /// Returns the viewer authorization header value
    pub fn viewer_auth(&self) -> String {
        format!("Bearer {}", self.viewer_token)
    }

    /// Sends one request through the router and returns (status, JSON body).
    /// Non-JSON or empty bodies come back as Value::Null.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

/// Application state over a fresh in-memory database, schema applied, no
/// rows yet. A single pooled connection that never recycles keeps the
/// ":memory:" database alive for the whole test.
pub async fn empty_state() -> anyhow::Result<AppState> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    schema::init(&pool).await?;
    Ok(AppState::with_pool(pool, "test-secret"))
}

/// Creates a user straight through the repositories and returns a token
/// for it.
pub async fn create_user(
    state: &AppState,
    username: &str,
    password: &str,
    role: Role,
    location: InventoryLocation,
) -> anyhow::Result<String> {
    let hash = state.auth_service.hash_password(password).await?;
    let user = state.user_repo.create(username, &hash, role, location).await?;
    let token = state.auth_service.create_token(user.id)?;
    Ok(token)
}
