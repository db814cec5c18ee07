//! Language centre entity model and DTOs.

use censur_core::coerce;
use censur_core::types::{DbId, Timestamp};
use censur_core::validation::Schema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A language centre row from the `sprogcenter` table.
///
/// The five `udbyder_*` flags record which exam types the centre offers.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Sprogcenter {
    pub id: DbId,
    pub navn: String,
    pub adresse: Option<String>,
    pub postnummer: Option<String>,
    pub forstad: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
    pub institutionsnummer: Option<String>,
    pub organisations_id: Option<DbId>,
    pub driftsaftaleperiode: Option<String>,
    pub tilsynskommune: Option<String>,
    pub udbyder_pd1: bool,
    pub udbyder_pd2: bool,
    pub udbyder_pd3: bool,
    pub udbyder_sp: bool,
    pub udbyder_vp: bool,
    pub created_at: Timestamp,
}

/// Wire payload for `POST /sprogcentre`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSprogcenter {
    #[serde(default, deserialize_with = "coerce::required_text")]
    #[validate(required(message = "is required"))]
    pub navn: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub adresse: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub postnummer: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub forstad: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub telefon: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub institutionsnummer: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_id")]
    pub organisations_id: Option<DbId>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub driftsaftaleperiode: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub tilsynskommune: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub udbyder_pd1: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub udbyder_pd2: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub udbyder_pd3: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub udbyder_sp: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub udbyder_vp: bool,
}

/// A validated language centre ready for insertion.
#[derive(Debug, Clone, Default)]
pub struct NewSprogcenter {
    pub navn: String,
    pub adresse: Option<String>,
    pub postnummer: Option<String>,
    pub forstad: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
    pub institutionsnummer: Option<String>,
    pub organisations_id: Option<DbId>,
    pub driftsaftaleperiode: Option<String>,
    pub tilsynskommune: Option<String>,
    pub udbyder_pd1: bool,
    pub udbyder_pd2: bool,
    pub udbyder_pd3: bool,
    pub udbyder_sp: bool,
    pub udbyder_vp: bool,
}

impl Schema for CreateSprogcenter {
    type Record = NewSprogcenter;

    fn into_record(self) -> NewSprogcenter {
        NewSprogcenter {
            navn: self.navn.unwrap_or_default(),
            adresse: self.adresse,
            postnummer: self.postnummer,
            forstad: self.forstad,
            telefon: self.telefon,
            email: self.email,
            institutionsnummer: self.institutionsnummer,
            organisations_id: self.organisations_id,
            driftsaftaleperiode: self.driftsaftaleperiode,
            tilsynskommune: self.tilsynskommune,
            udbyder_pd1: self.udbyder_pd1,
            udbyder_pd2: self.udbyder_pd2,
            udbyder_pd3: self.udbyder_pd3,
            udbyder_sp: self.udbyder_sp,
            udbyder_vp: self.udbyder_vp,
        }
    }
}

#[cfg(test)]
mod tests {
    use censur_core::validation::validate_into;
    use serde_json::json;

    use super::*;

    #[test]
    fn offer_flags_and_organisation_are_coerced() {
        let payload: CreateSprogcenter = serde_json::from_value(json!({
            "navn": "Clavis",
            "udbyder_pd1": "ja",
            "udbyder_pd2": 1,
            "udbyder_pd3": true,
            "udbyder_sp": null,
            "organisations_id": "4",
            "postnummer": 8000,
        }))
        .unwrap();

        let record = validate_into(payload).unwrap();
        assert!(!record.udbyder_pd1);
        assert!(!record.udbyder_pd2);
        assert!(record.udbyder_pd3);
        assert!(!record.udbyder_sp);
        assert!(!record.udbyder_vp);
        assert_eq!(record.organisations_id, None);
        assert_eq!(record.postnummer.as_deref(), Some("8000"));
    }

    #[test]
    fn missing_or_numeric_name_is_rejected() {
        for body in [json!({"adresse": "Vesterbrogade 1"}), json!({"navn": 17})] {
            let payload: CreateSprogcenter = serde_json::from_value(body).unwrap();
            let err = validate_into(payload).unwrap_err();
            assert_eq!(err.to_string(), "Validation failed: navn: is required");
        }
    }
}
