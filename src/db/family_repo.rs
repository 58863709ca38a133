// src/db/family_repo.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    models::{family::Family, tenancy::InventoryLocation},
};

// Repositório das famílias terapêuticas. Famílias não são editadas nem
// removidas; o catálogo só cresce.
#[derive(Clone)]
pub struct FamilyRepository {
    pool: SqlitePool,
}

impl FamilyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        location: Option<InventoryLocation>,
    ) -> Result<Vec<Family>, AppError> {
        let families = match location {
            Some(location) => {
                sqlx::query_as::<_, Family>(
                    "SELECT * FROM families WHERE inventory_location = ? ORDER BY id ASC",
                )
                .bind(location)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Family>("SELECT * FROM families ORDER BY id ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(families)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Family>, AppError> {
        let maybe_family = sqlx::query_as::<_, Family>("SELECT * FROM families WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_family)
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        location: InventoryLocation,
    ) -> Result<Family, AppError> {
        let family = sqlx::query_as::<_, Family>(
            r#"
            INSERT INTO families (name, description, inventory_location)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;
        Ok(family)
    }
}
