//! Censor entity model and DTOs.

use censur_core::coerce;
use censur_core::types::{DbId, Timestamp};
use censur_core::validation::Schema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A censor row from the `censorer` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Censor {
    pub id: DbId,
    pub fornavn: String,
    pub efternavn: String,
    pub adresse: Option<String>,
    pub postnummer: Option<String>,
    pub forstad: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
    pub cpr_nummer: Option<String>,
    pub beskikket_til: Option<String>,
    pub beskikket_indfodsret: bool,
    pub beskikket_medborgerskab: bool,
    pub arbejds_status: Option<String>,
    pub prioritet: Option<i32>,
    pub sprogcenter_id: Option<DbId>,
    pub kommentar: Option<String>,
    pub created_at: Timestamp,
}

/// Wire payload for `POST /censorer`.
///
/// Every optional field is coerced leniently; only `fornavn` and
/// `efternavn` can make the request fail.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCensor {
    #[serde(default, deserialize_with = "coerce::required_text")]
    #[validate(required(message = "is required"))]
    pub fornavn: Option<String>,
    #[serde(default, deserialize_with = "coerce::required_text")]
    #[validate(required(message = "is required"))]
    pub efternavn: Option<String>,
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
    pub cpr_nummer: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub beskikket_til: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub beskikket_indfodsret: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub beskikket_medborgerskab: bool,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub arbejds_status: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_int")]
    pub prioritet: Option<i32>,
    #[serde(default, deserialize_with = "coerce::optional_id")]
    pub sprogcenter_id: Option<DbId>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub kommentar: Option<String>,
}

/// A validated censor ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCensor {
    pub fornavn: String,
    pub efternavn: String,
    pub adresse: Option<String>,
    pub postnummer: Option<String>,
    pub forstad: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
    pub cpr_nummer: Option<String>,
    pub beskikket_til: Option<String>,
    pub beskikket_indfodsret: bool,
    pub beskikket_medborgerskab: bool,
    pub arbejds_status: Option<String>,
    pub prioritet: Option<i32>,
    pub sprogcenter_id: Option<DbId>,
    pub kommentar: Option<String>,
}

impl NewCensor {
    /// A censor with only the required names set.
    pub fn named(fornavn: &str, efternavn: &str) -> Self {
        Self {
            fornavn: fornavn.to_string(),
            efternavn: efternavn.to_string(),
            adresse: None,
            postnummer: None,
            forstad: None,
            telefon: None,
            email: None,
            cpr_nummer: None,
            beskikket_til: None,
            beskikket_indfodsret: false,
            beskikket_medborgerskab: false,
            arbejds_status: None,
            prioritet: None,
            sprogcenter_id: None,
            kommentar: None,
        }
    }
}

impl Schema for CreateCensor {
    type Record = NewCensor;

    fn into_record(self) -> NewCensor {
        NewCensor {
            fornavn: self.fornavn.unwrap_or_default(),
            efternavn: self.efternavn.unwrap_or_default(),
            adresse: self.adresse,
            postnummer: self.postnummer,
            forstad: self.forstad,
            telefon: self.telefon,
            email: self.email,
            cpr_nummer: self.cpr_nummer,
            beskikket_til: self.beskikket_til,
            beskikket_indfodsret: self.beskikket_indfodsret,
            beskikket_medborgerskab: self.beskikket_medborgerskab,
            arbejds_status: self.arbejds_status,
            prioritet: self.prioritet,
            sprogcenter_id: self.sprogcenter_id,
            kommentar: self.kommentar,
        }
    }
}
