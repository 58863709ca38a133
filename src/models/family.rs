// src/models/family.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::tenancy::InventoryLocation;

// Família terapêutica (Analgésicos, Antibióticos, ...)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: i64,

    #[schema(example = "Analgésicos")]
    pub name: String,

    #[schema(example = "Para el dolor")]
    pub description: Option<String>,

    pub inventory_location: InventoryLocation,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyPayload {
    #[validate(
        required(message = "El nombre es requerido"),
        length(min = 1, message = "El nombre es requerido")
    )]
    #[schema(example = "Antibióticos")]
    pub name: Option<String>,

    #[schema(example = "Para infecciones")]
    pub description: Option<String>,
}
