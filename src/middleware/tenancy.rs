// src/middleware/tenancy.rs

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    common::error::AppError,
    models::{auth::User, tenancy::InventoryLocation},
};

// A sede do usuário autenticado. Os handlers nunca escolhem a sede: ela
// vem sempre do usuário resolvido pelo auth_guard.
#[derive(Debug, Clone, Copy)]
pub struct TenantContext(pub InventoryLocation);

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .map(|user| TenantContext(user.inventory_location))
            .ok_or(AppError::InvalidToken)
    }
}
