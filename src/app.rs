// src/app.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

// Monta o router completo. Fica fora do main para os testes de integração
// montarem a mesma aplicação sobre um banco em memória.
pub fn build_router(app_state: AppState) -> Router {
    // Rotas de autenticação: o login é público, o /me exige token.
    // O merge junta as duas metades no mesmo prefixo.
    let auth_public = Router::new().route("/login", post(handlers::auth::login));

    let auth_protected = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let family_routes = Router::new()
        .route(
            "/",
            get(handlers::families::list_families).post(handlers::families::create_family),
        )
        .route("/{id}", get(handlers::families::get_family))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let medication_routes = Router::new()
        .route(
            "/",
            get(handlers::medications::list_medications)
                .post(handlers::medications::create_medication),
        )
        .route(
            "/{id}",
            get(handlers::medications::get_medication)
                .put(handlers::medications::update_medication)
                .delete(handlers::medications::delete_medication),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let user_routes = Router::new()
        .route(
            "/",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/{id}", delete(handlers::users::delete_user))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/auth", auth_public.merge(auth_protected))
        .nest("/api/families", family_routes)
        .nest("/api/medications", medication_routes)
        .nest("/api/users", user_routes)
        .nest("/api/dashboard", dashboard_routes)
        .with_state(app_state)
}

// GET /api-docs/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
