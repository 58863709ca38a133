// src/models/tenancy.rs

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// ---
// Sede do Inventário (A "Loja")
// ---
// As duas sedes atendidas pelo serviço. Gravado como TEXT no banco,
// e é a chave de particionamento de famílias, medicamentos e usuários.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InventoryLocation {
    #[default]
    Maracay,
    Magdaleno,
}

impl InventoryLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryLocation::Maracay => "maracay",
            InventoryLocation::Magdaleno => "magdaleno",
        }
    }
}

impl std::fmt::Display for InventoryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
