// src/db/seed.rs

use chrono::{Duration, Utc};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{auth::Role, medication::NewMedication, tenancy::InventoryLocation},
};

// Popula o banco na primeira subida: um admin e um catálogo de exemplo por
// sede. O guarda é a tabela de usuários; em bancos já usados nada acontece.
pub async fn run(state: &AppState) -> Result<(), AppError> {
    if state.user_repo.count().await? > 0 {
        return Ok(());
    }

    tracing::info!("Banco vazio, populando dados iniciais...");

    let hash = state.auth_service.hash_password("admin123").await?;
    state
        .user_repo
        .create("admin", &hash, Role::Admin, InventoryLocation::Maracay)
        .await?;

    let hash = state.auth_service.hash_password("magdaleno123").await?;
    state
        .user_repo
        .create("magdaleno", &hash, Role::Admin, InventoryLocation::Magdaleno)
        .await?;

    for location in [InventoryLocation::Maracay, InventoryLocation::Magdaleno] {
        seed_catalog(state, location).await?;
    }

    tracing::info!("✅ Dados iniciais prontos!");
    Ok(())
}

// Três famílias e três medicamentos por sede: um com estoque cheio, um com
// estoque baixo vencendo em um mês e um já vencido.
async fn seed_catalog(state: &AppState, location: InventoryLocation) -> Result<(), AppError> {
    let analgesics = state
        .family_repo
        .create("Analgésicos", Some("Para el dolor"), location)
        .await?;
    let antibiotics = state
        .family_repo
        .create("Antibióticos", Some("Para infecciones"), location)
        .await?;
    let antiinflammatories = state
        .family_repo
        .create("Antiinflamatorios", Some("Reduce inflamación"), location)
        .await?;

    let today = Utc::now();
    let next_year = today + Duration::days(365);
    let next_month = today + Duration::days(30);
    let last_month = today - Duration::days(30);

    state
        .medication_repo
        .create(
            NewMedication {
                family_id: Some(analgesics.id),
                name: "Paracetamol".into(),
                description: Some(
                    "Analgésico y antipirético eficaz para el control del dolor leve a moderado y la fiebre."
                        .into(),
                ),
                presentation: "Tabletas 500mg".into(),
                quantity: 100,
                expiration_date: next_year,
                image_url: None,
                mechanism_of_action: Some(
                    "Inhibe la síntesis de prostaglandinas en el sistema nervioso central y bloquea la generación del impulso doloroso a nivel periférico."
                        .into(),
                ),
                indications: Some("Dolor leve a moderado, fiebre.".into()),
                posology: Some("Adultos: 500 mg - 1 g cada 4-6 horas.".into()),
                administration_route: Some("Oral".into()),
            },
            location,
        )
        .await?;

    state
        .medication_repo
        .create(
            NewMedication {
                family_id: Some(antibiotics.id),
                name: "Amoxicilina".into(),
                description: Some(
                    "Antibiótico de amplio espectro del grupo de las penicilinas.".into(),
                ),
                presentation: "Cápsulas 500mg".into(),
                quantity: 5,
                expiration_date: next_month,
                image_url: None,
                mechanism_of_action: Some(
                    "Bactericida. Inhibe la acción de peptidasas y carboxipeptidasas impidiendo la síntesis de la pared celular bacteriana."
                        .into(),
                ),
                indications: Some("Infecciones respiratorias, de piel, urinarias.".into()),
                posology: Some("500 mg cada 8 horas.".into()),
                administration_route: Some("Oral".into()),
            },
            location,
        )
        .await?;

    state
        .medication_repo
        .create(
            NewMedication {
                family_id: Some(antiinflammatories.id),
                name: "Ibuprofeno".into(),
                description: Some("Antiinflamatorio no esteroideo (AINE).".into()),
                presentation: "Tabletas 400mg".into(),
                quantity: 50,
                expiration_date: last_month,
                image_url: None,
                mechanism_of_action: Some(
                    "Inhibición de la síntesis de prostaglandinas a nivel periférico.".into(),
                ),
                indications: Some("Dolor, fiebre, inflamación.".into()),
                posology: Some("400 mg cada 6-8 horas.".into()),
                administration_route: Some("Oral".into()),
            },
            location,
        )
        .await?;

    Ok(())
}
