// src/db/filter.rs

use sqlx::{QueryBuilder, Sqlite};

use crate::models::tenancy::InventoryLocation;

// Filtro conjuntivo da listagem de medicamentos. Cada campo presente vira
// uma cláusula AND; sem nenhum deles a leitura devolve tudo.
#[derive(Debug, Clone, Default)]
pub struct MedicationFilter {
    pub search: Option<String>,
    pub family_id: Option<i64>,
    pub location: Option<InventoryLocation>,
}

impl MedicationFilter {
    // Filtro que só restringe pela sede (o caso de toda listagem da API).
    pub fn scoped(location: InventoryLocation) -> Self {
        Self {
            location: Some(location),
            ..Default::default()
        }
    }

    // Anexa as cláusulas WHERE na consulta em construção.
    pub fn apply(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(" WHERE 1 = 1");

        if let Some(search) = &self.search {
            // Busca por substring sem diferenciar maiúsculas (como o ILIKE).
            qb.push(" AND LOWER(m.name) LIKE '%' || LOWER(")
                .push_bind(search.clone())
                .push(") || '%'");
        }

        if let Some(family_id) = self.family_id {
            qb.push(" AND m.family_id = ").push_bind(family_id);
        }

        if let Some(location) = self.location {
            qb.push(" AND m.inventory_location = ").push_bind(location);
        }
    }
}
