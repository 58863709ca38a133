// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Families ---
        handlers::families::list_families,
        handlers::families::create_family,
        handlers::families::get_family,

        // --- Medications ---
        handlers::medications::list_medications,
        handlers::medications::get_medication,
        handlers::medications::create_medication,
        handlers::medications::update_medication,
        handlers::medications::delete_medication,

        // --- Users ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::delete_user,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::LoginUserPayload,
            models::auth::CreateUserPayload,
            models::auth::AuthResponse,

            // --- Tenancy ---
            models::tenancy::InventoryLocation,

            // --- Families ---
            models::family::Family,
            models::family::CreateFamilyPayload,

            // --- Medications ---
            models::medication::Medication,
            models::medication::MedicationWithFamily,
            models::medication::CreateMedicationPayload,
            models::medication::UpdateMedicationPayload,

            // --- Dashboard ---
            models::dashboard::InventorySummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Sessão"),
        (name = "Families", description = "Famílias Terapêuticas"),
        (name = "Medications", description = "Gestão de Medicamentos e Fichas Técnicas"),
        (name = "Users", description = "Gestão de Usuários (somente admins)"),
        (name = "Dashboard", description = "Indicadores do Inventário")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
