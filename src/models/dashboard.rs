// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Resumo do Painel (Os Cards do Topo)
// Contadores calculados sobre o inventário da sede do usuário logado.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    #[schema(example = 42)]
    pub total_medications: i64,

    // Data de vencimento já passou
    pub expired: i64,

    // Vence nos próximos 30 dias
    pub expiring_soon: i64,

    // Saldo abaixo do limite de reposição
    pub low_stock: i64,

    // Saldo zerado
    pub out_of_stock: i64,
}
