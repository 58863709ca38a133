// src/db/medication_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    db::filter::MedicationFilter,
    models::{
        family::Family,
        medication::{Medication, MedicationWithFamily, NewMedication, UpdateMedicationPayload},
        tenancy::InventoryLocation,
    },
};

// Colunas do LEFT JOIN: as da família ganham o prefixo "f_" para não
// colidirem com as do medicamento.
const SELECT_WITH_FAMILY: &str = r#"
SELECT
    m.id, m.family_id, m.name, m.description, m.presentation, m.quantity,
    m.expiration_date, m.image_url, m.mechanism_of_action, m.indications,
    m.posology, m.administration_route, m.inventory_location, m.created_at,
    f.id AS f_id, f.name AS f_name, f.description AS f_description,
    f.inventory_location AS f_inventory_location
FROM medications m
LEFT JOIN families f ON f.id = m.family_id"#;

// Linha achatada do JOIN; vira MedicationWithFamily logo na saída.
#[derive(sqlx::FromRow)]
struct MedicationFamilyRow {
    id: i64,
    family_id: Option<i64>,
    name: String,
    description: Option<String>,
    presentation: String,
    quantity: i64,
    expiration_date: DateTime<Utc>,
    image_url: Option<String>,
    mechanism_of_action: Option<String>,
    indications: Option<String>,
    posology: Option<String>,
    administration_route: Option<String>,
    inventory_location: InventoryLocation,
    created_at: DateTime<Utc>,
    f_id: Option<i64>,
    f_name: Option<String>,
    f_description: Option<String>,
    f_inventory_location: Option<InventoryLocation>,
}

impl From<MedicationFamilyRow> for MedicationWithFamily {
    fn from(row: MedicationFamilyRow) -> Self {
        // family_id apontando para uma família apagada/inexistente
        // simplesmente não anexa nada.
        let family = match (row.f_id, row.f_name, row.f_inventory_location) {
            (Some(id), Some(name), Some(inventory_location)) => Some(Family {
                id,
                name,
                description: row.f_description,
                inventory_location,
            }),
            _ => None,
        };

        MedicationWithFamily {
            medication: Medication {
                id: row.id,
                family_id: row.family_id,
                name: row.name,
                description: row.description,
                presentation: row.presentation,
                quantity: row.quantity,
                expiration_date: row.expiration_date,
                image_url: row.image_url,
                mechanism_of_action: row.mechanism_of_action,
                indications: row.indications,
                posology: row.posology,
                administration_route: row.administration_route,
                inventory_location: row.inventory_location,
                created_at: row.created_at,
            },
            family,
        }
    }
}

#[derive(Clone)]
pub struct MedicationRepository {
    pool: SqlitePool,
}

impl MedicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Listagem com a família anexada, mais recentes primeiro. O desempate
    // por id cobre inserções no mesmo segundo.
    pub async fn list(
        &self,
        filter: &MedicationFilter,
    ) -> Result<Vec<MedicationWithFamily>, AppError> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_WITH_FAMILY);
        filter.apply(&mut qb);
        qb.push(" ORDER BY m.created_at DESC, m.id DESC");

        let rows = qb
            .build_query_as::<MedicationFamilyRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<MedicationWithFamily>, AppError> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_WITH_FAMILY);
        qb.push(" WHERE m.id = ").push_bind(id);

        let row = qb
            .build_query_as::<MedicationFamilyRow>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    pub async fn create(
        &self,
        new: NewMedication,
        location: InventoryLocation,
    ) -> Result<Medication, AppError> {
        let medication = sqlx::query_as::<_, Medication>(
            r#"
            INSERT INTO medications (
                family_id, name, description, presentation, quantity,
                expiration_date, image_url, mechanism_of_action, indications,
                posology, administration_route, inventory_location, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(new.family_id)
        .bind(new.name)
        .bind(new.description)
        .bind(new.presentation)
        .bind(new.quantity)
        .bind(new.expiration_date)
        .bind(new.image_url)
        .bind(new.mechanism_of_action)
        .bind(new.indications)
        .bind(new.posology)
        .bind(new.administration_route)
        .bind(location)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(medication)
    }

    // Atualização parcial, restrita à sede do usuário: um id de outra sede
    // se comporta como inexistente.
    pub async fn update(
        &self,
        id: i64,
        patch: &UpdateMedicationPayload,
        location: InventoryLocation,
    ) -> Result<Option<Medication>, AppError> {
        if patch.is_empty() {
            // Nada para mudar: devolve a linha atual, se existir na sede.
            let current = sqlx::query_as::<_, Medication>(
                "SELECT * FROM medications WHERE id = ? AND inventory_location = ?",
            )
            .bind(id)
            .bind(location)
            .fetch_optional(&self.pool)
            .await?;
            return Ok(current);
        }

        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE medications SET ");
        let mut fields = qb.separated(", ");

        if let Some(family_id) = &patch.family_id {
            fields.push("family_id = ").push_bind_unseparated(*family_id);
        }
        if let Some(name) = &patch.name {
            fields.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(description) = &patch.description {
            fields
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(presentation) = &patch.presentation {
            fields
                .push("presentation = ")
                .push_bind_unseparated(presentation.clone());
        }
        if let Some(quantity) = patch.quantity {
            fields.push("quantity = ").push_bind_unseparated(quantity);
        }
        if let Some(expiration_date) = patch.expiration_date {
            fields
                .push("expiration_date = ")
                .push_bind_unseparated(expiration_date);
        }
        if let Some(image_url) = &patch.image_url {
            fields
                .push("image_url = ")
                .push_bind_unseparated(image_url.clone());
        }
        if let Some(mechanism_of_action) = &patch.mechanism_of_action {
            fields
                .push("mechanism_of_action = ")
                .push_bind_unseparated(mechanism_of_action.clone());
        }
        if let Some(indications) = &patch.indications {
            fields
                .push("indications = ")
                .push_bind_unseparated(indications.clone());
        }
        if let Some(posology) = &patch.posology {
            fields
                .push("posology = ")
                .push_bind_unseparated(posology.clone());
        }
        if let Some(administration_route) = &patch.administration_route {
            fields
                .push("administration_route = ")
                .push_bind_unseparated(administration_route.clone());
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" AND inventory_location = ").push_bind(location);
        qb.push(" RETURNING *");

        let updated = qb
            .build_query_as::<Medication>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    // Idempotente: apagar o que não existe (ou é de outra sede) não é erro.
    pub async fn delete(&self, id: i64, location: InventoryLocation) -> Result<(), AppError> {
        sqlx::query("DELETE FROM medications WHERE id = ? AND inventory_location = ?")
            .bind(id)
            .bind(location)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
