// src/models/medication.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::family::Family;
use crate::models::tenancy::InventoryLocation;

// Abaixo deste saldo o medicamento entra na lista de reposição.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

// Medicamento como gravado no banco. A "ficha técnica" (mecanismo de ação,
// indicações, posologia, via de administração) é toda opcional.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: i64,
    pub family_id: Option<i64>,

    #[schema(example = "Paracetamol")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "Tabletas 500mg")]
    pub presentation: String,

    #[schema(example = 100)]
    pub quantity: i64,

    pub expiration_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub mechanism_of_action: Option<String>,
    pub indications: Option<String>,

    #[schema(example = "Adultos: 500 mg - 1 g cada 4-6 horas.")]
    pub posology: Option<String>,

    #[schema(example = "Oral")]
    pub administration_route: Option<String>,

    pub inventory_location: InventoryLocation,
    pub created_at: DateTime<Utc>,
}

// Medicamento com a família relacionada anexada (usado nas leituras).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationWithFamily {
    #[serde(flatten)]
    pub medication: Medication,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
}

// Valores já validados, prontos para inserir.
#[derive(Debug, Clone)]
pub struct NewMedication {
    pub family_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub presentation: String,
    pub quantity: i64,
    pub expiration_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub mechanism_of_action: Option<String>,
    pub indications: Option<String>,
    pub posology: Option<String>,
    pub administration_route: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicationPayload {
    pub family_id: Option<i64>,

    #[validate(
        required(message = "El nombre es requerido"),
        length(min = 1, message = "El nombre es requerido")
    )]
    #[schema(example = "Paracetamol")]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(
        required(message = "La presentación es requerida"),
        length(min = 1, message = "La presentación es requerida")
    )]
    #[schema(example = "Tabletas 500mg")]
    pub presentation: Option<String>,

    // O formulário envia a quantidade como número ou string ("100").
    #[validate(range(min = 0, message = "La cantidad no puede ser negativa"))]
    #[serde(default, deserialize_with = "coerce_quantity")]
    #[schema(example = 100)]
    pub quantity: Option<i64>,

    #[validate(required(message = "La fecha de vencimiento es requerida"))]
    #[serde(default, deserialize_with = "coerce_expiration_date")]
    #[schema(value_type = Option<String>, example = "2027-06-30")]
    pub expiration_date: Option<DateTime<Utc>>,

    pub image_url: Option<String>,
    pub mechanism_of_action: Option<String>,
    pub indications: Option<String>,
    pub posology: Option<String>,
    pub administration_route: Option<String>,
}

impl CreateMedicationPayload {
    // Conversão pós-validação; os `unwrap` são seguros depois de `validate()`.
    pub fn into_new(self) -> NewMedication {
        NewMedication {
            family_id: self.family_id,
            name: self.name.unwrap(),
            description: self.description,
            presentation: self.presentation.unwrap(),
            quantity: self.quantity.unwrap_or(0),
            expiration_date: self.expiration_date.unwrap(),
            image_url: self.image_url,
            mechanism_of_action: self.mechanism_of_action,
            indications: self.indications,
            posology: self.posology,
            administration_route: self.administration_route,
        }
    }
}

// PUT parcial: campo ausente não muda nada; `null` limpa os campos anuláveis.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicationPayload {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub family_id: Option<Option<i64>>,

    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[validate(length(min = 1, message = "La presentación es requerida"))]
    pub presentation: Option<String>,

    #[validate(range(min = 0, message = "La cantidad no puede ser negativa"))]
    #[serde(default, deserialize_with = "coerce_quantity")]
    pub quantity: Option<i64>,

    // `null` aqui conta como ausente: a data de vencimento nunca é limpa.
    #[serde(default, deserialize_with = "coerce_expiration_date")]
    #[schema(value_type = Option<String>)]
    pub expiration_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub mechanism_of_action: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub indications: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub posology: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub administration_route: Option<Option<String>>,
}

impl UpdateMedicationPayload {
    // Um `{}` vira no-op no repositório.
    pub fn is_empty(&self) -> bool {
        self.family_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.presentation.is_none()
            && self.quantity.is_none()
            && self.expiration_date.is_none()
            && self.image_url.is_none()
            && self.mechanism_of_action.is_none()
            && self.indications.is_none()
            && self.posology.is_none()
            && self.administration_route.is_none()
    }
}

// Classificação de vencimento usada pelo resumo do dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Good,
}

impl ExpiryStatus {
    // Vencido quando a data já passou; alerta quando faltam menos de 30 dias.
    pub fn classify(expiration_date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let days = (expiration_date.date_naive() - now.date_naive()).num_days();
        if days < 0 {
            ExpiryStatus::Expired
        } else if days < 30 {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Good
        }
    }
}

// Distingue "campo ausente" (None) de "campo: null" (Some(None)).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn coerce_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct QuantityVisitor;

    impl<'de> Visitor<'de> for QuantityVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("um número inteiro ou uma string numérica")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::custom("La cantidad es demasiado grande"))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
                Ok(Some(v as i64))
            } else {
                Err(E::custom("La cantidad debe ser un número entero"))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::custom("La cantidad debe ser un número entero"))
        }
    }

    deserializer.deserialize_any(QuantityVisitor)
}

fn coerce_expiration_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_flexible_date(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom("La fecha de vencimiento no es válida")),
    }
}

// Aceita RFC 3339, "YYYY-MM-DDTHH:MM:SS" e "YYYY-MM-DD" (meia-noite UTC).
pub fn parse_flexible_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    #[test]
    fn classifies_expired_and_expiring_soon() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();

        let yesterday = now - Duration::days(1);
        assert_eq!(ExpiryStatus::classify(yesterday, now), ExpiryStatus::Expired);

        // O próprio dia do vencimento ainda não conta como vencido.
        assert_eq!(ExpiryStatus::classify(now, now), ExpiryStatus::ExpiringSoon);

        let in_29_days = now + Duration::days(29);
        assert_eq!(
            ExpiryStatus::classify(in_29_days, now),
            ExpiryStatus::ExpiringSoon
        );

        let in_30_days = now + Duration::days(30);
        assert_eq!(ExpiryStatus::classify(in_30_days, now), ExpiryStatus::Good);
    }

    #[test]
    fn quantity_accepts_numeric_strings() {
        let payload: CreateMedicationPayload = serde_json::from_value(json!({
            "name": "Paracetamol",
            "presentation": "Tabletas 500mg",
            "quantity": "-5",
            "expirationDate": "2030-01-01"
        }))
        .unwrap();

        // A string vira número; a negatividade fica por conta do validador.
        assert_eq!(payload.quantity, Some(-5));
        assert!(payload.validate().is_err());
    }

    #[test]
    fn quantity_rejects_garbage() {
        let result = serde_json::from_value::<CreateMedicationPayload>(json!({
            "name": "X",
            "presentation": "Y",
            "quantity": "muchas",
            "expirationDate": "2030-01-01"
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<CreateMedicationPayload>(json!({
            "name": "X",
            "presentation": "Y",
            "quantity": 2.5,
            "expirationDate": "2030-01-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn expiration_date_accepts_common_formats() {
        assert!(parse_flexible_date("2027-06-30").is_some());
        assert!(parse_flexible_date("2027-06-30T15:04:05").is_some());
        assert!(parse_flexible_date("2027-06-30T15:04:05.123Z").is_some());
        assert!(parse_flexible_date("30/06/2027").is_none());
    }

    #[test]
    fn missing_expiration_date_fails_validation() {
        let payload: CreateMedicationPayload = serde_json::from_value(json!({
            "name": "Paracetamol",
            "presentation": "Tabletas 500mg",
            "quantity": 10
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("expiration_date"));
    }

    #[test]
    fn update_payload_distinguishes_null_from_absent() {
        let patch: UpdateMedicationPayload = serde_json::from_value(json!({
            "familyId": null,
            "quantity": 7
        }))
        .unwrap();

        assert_eq!(patch.family_id, Some(None));
        assert_eq!(patch.quantity, Some(7));
        assert!(patch.description.is_none());
        assert!(!patch.is_empty());

        let empty: UpdateMedicationPayload = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
    }
}
