//! Class group ("hold") model, its join-enriched read shape and DTOs.
//!
//! Every read of a hold goes through [`HoldWithNames`]: the row itself plus
//! the referenced language centre's name and the assigned censor's names,
//! each `null` when the reference is absent or does not resolve.

use censur_core::coerce;
use censur_core::types::DbId;
use censur_core::validation::Schema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Flat result of `hold LEFT JOIN sprogcenter LEFT JOIN censorer`.
///
/// Column aliases are ASCII; see `HoldRepo` for the select list.
#[derive(Debug, Clone, FromRow)]
pub struct HoldJoinedRow {
    pub id: DbId,
    pub deltagere: i32,
    pub termin: String,
    pub prove: String,
    pub provetype: String,
    pub laast: bool,
    pub sprogcenter_id: Option<DbId>,
    pub sprogcenter_navn: Option<String>,
    pub censor_id: Option<DbId>,
    pub censor_fornavn: Option<String>,
    pub censor_efternavn: Option<String>,
}

/// Language centre reference embedded in a hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprogcenterRef {
    pub id: DbId,
    pub navn: String,
}

/// Censor reference embedded in a hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorRef {
    pub id: DbId,
    pub fornavn: String,
    pub efternavn: String,
}

/// A hold with its references resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldWithNames {
    pub id: DbId,
    pub deltagere: i32,
    pub termin: String,
    #[serde(rename = "prøve")]
    pub prove: String,
    #[serde(rename = "prøvetype")]
    pub provetype: String,
    #[serde(rename = "låst")]
    pub laast: bool,
    pub sprogcenter: Option<SprogcenterRef>,
    pub censor: Option<CensorRef>,
}

impl From<HoldJoinedRow> for HoldWithNames {
    fn from(row: HoldJoinedRow) -> Self {
        let sprogcenter = row.sprogcenter_id.map(|id| SprogcenterRef {
            id,
            navn: row.sprogcenter_navn.unwrap_or_default(),
        });
        let censor = row.censor_id.map(|id| CensorRef {
            id,
            fornavn: row.censor_fornavn.unwrap_or_default(),
            efternavn: row.censor_efternavn.unwrap_or_default(),
        });
        Self {
            id: row.id,
            deltagere: row.deltagere,
            termin: row.termin,
            prove: row.prove,
            provetype: row.provetype,
            laast: row.laast,
            sprogcenter,
            censor,
        }
    }
}

/// Wire payload for `POST /hold`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateHold {
    #[serde(default, deserialize_with = "coerce::optional_int")]
    #[validate(
        required(message = "is required and must be a whole number"),
        range(min = 0, message = "must be zero or greater")
    )]
    pub deltagere: Option<i32>,
    #[serde(default, deserialize_with = "coerce::required_text")]
    #[validate(required(message = "is required"))]
    pub termin: Option<String>,
    #[serde(default, rename = "prøve", deserialize_with = "coerce::required_text")]
    #[validate(required(message = "is required"))]
    pub prove: Option<String>,
    #[serde(default, rename = "prøvetype", deserialize_with = "coerce::required_text")]
    #[validate(required(message = "is required"))]
    pub provetype: Option<String>,
    #[serde(default, rename = "låst", deserialize_with = "coerce::flag")]
    pub laast: bool,
    #[serde(default, deserialize_with = "coerce::optional_id")]
    pub sprogcenter_id: Option<DbId>,
    #[serde(default, deserialize_with = "coerce::optional_id")]
    pub censorer_id: Option<DbId>,
}

/// A validated hold ready for insertion.
#[derive(Debug, Clone)]
pub struct NewHold {
    pub deltagere: i32,
    pub termin: String,
    pub prove: String,
    pub provetype: String,
    pub laast: bool,
    pub sprogcenter_id: Option<DbId>,
    pub censorer_id: Option<DbId>,
}

impl NewHold {
    /// An unlocked, unassigned hold.
    pub fn new(deltagere: i32, termin: &str, prove: &str, provetype: &str) -> Self {
        Self {
            deltagere,
            termin: termin.to_string(),
            prove: prove.to_string(),
            provetype: provetype.to_string(),
            laast: false,
            sprogcenter_id: None,
            censorer_id: None,
        }
    }
}

impl Schema for CreateHold {
    type Record = NewHold;

    const WIRE_NAMES: &'static [(&'static str, &'static str)] =
        &[("prove", "prøve"), ("provetype", "prøvetype")];

    fn into_record(self) -> NewHold {
        NewHold {
            deltagere: self.deltagere.unwrap_or_default(),
            termin: self.termin.unwrap_or_default(),
            prove: self.prove.unwrap_or_default(),
            provetype: self.provetype.unwrap_or_default(),
            laast: self.laast,
            sprogcenter_id: self.sprogcenter_id,
            censorer_id: self.censorer_id,
        }
    }
}
