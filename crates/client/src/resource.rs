//! The three flat list resources and their form drafts.
//!
//! A [`Resource`] ties an endpoint path to the row shape its listing
//! returns and the form the view keeps while the user types.

use censur_core::types::DbId;
use censur_db::models::censor::Censor;
use censur_db::models::organisation::OrganisationSummary;
use censur_db::models::sprogcenter::Sprogcenter;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Form state that can be posted to create a row.
pub trait Draft: Default + Clone + Serialize {
    /// Checked before posting. `Some(message)` blocks the request.
    fn missing_required(&self) -> Option<&'static str>;
}

/// A list endpoint with create and delete.
pub trait Resource {
    /// Path below `/api`.
    const PATH: &'static str;
    type Row: DeserializeOwned + Clone;
    type Draft: Draft;

    fn id(row: &Self::Row) -> DbId;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Censorer
// ---------------------------------------------------------------------------

pub enum Censorer {}

/// A censor as the list view shows it.
///
/// `arkiveret` marks a row as archived. The API never sends it, so it
/// stays `None` until archival exists server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CensorRow {
    #[serde(flatten)]
    pub censor: Censor,
    #[serde(default)]
    pub arkiveret: Option<bool>,
}

impl CensorRow {
    pub fn is_archived(&self) -> bool {
        self.arkiveret.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CensorDraft {
    pub fornavn: String,
    pub efternavn: String,
    pub adresse: String,
    pub postnummer: String,
    pub forstad: String,
    pub telefon: String,
    pub email: String,
    pub cpr_nummer: String,
    pub beskikket_til: String,
    pub beskikket_indfodsret: bool,
    pub beskikket_medborgerskab: bool,
    pub arbejds_status: String,
    pub prioritet: Option<i32>,
    pub sprogcenter_id: Option<DbId>,
    pub kommentar: String,
}

impl Draft for CensorDraft {
    fn missing_required(&self) -> Option<&'static str> {
        (blank(&self.fornavn) || blank(&self.efternavn))
            .then_some("fornavn and efternavn are required")
    }
}

impl Resource for Censorer {
    const PATH: &'static str = "censorer";
    type Row = CensorRow;
    type Draft = CensorDraft;

    fn id(row: &CensorRow) -> DbId {
        row.censor.id
    }
}

// ---------------------------------------------------------------------------
// Organisationer
// ---------------------------------------------------------------------------

pub enum Organisationer {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganisationDraft {
    pub navn: String,
}

impl Draft for OrganisationDraft {
    fn missing_required(&self) -> Option<&'static str> {
        blank(&self.navn).then_some("navn must not be empty")
    }
}

impl Resource for Organisationer {
    const PATH: &'static str = "organisationer";
    type Row = OrganisationSummary;
    type Draft = OrganisationDraft;

    fn id(row: &OrganisationSummary) -> DbId {
        row.id
    }
}

// ---------------------------------------------------------------------------
// Sprogcentre
// ---------------------------------------------------------------------------

pub enum Sprogcentre {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SprogcenterDraft {
    pub navn: String,
    pub adresse: String,
    pub postnummer: String,
    pub forstad: String,
    pub telefon: String,
    pub email: String,
    pub institutionsnummer: String,
    pub organisations_id: Option<DbId>,
    pub driftsaftaleperiode: String,
    pub tilsynskommune: String,
    pub udbyder_pd1: bool,
    pub udbyder_pd2: bool,
    pub udbyder_pd3: bool,
    pub udbyder_sp: bool,
    pub udbyder_vp: bool,
}

impl Draft for SprogcenterDraft {
    fn missing_required(&self) -> Option<&'static str> {
        blank(&self.navn).then_some("navn is required")
    }
}

impl Resource for Sprogcentre {
    const PATH: &'static str = "sprogcentre";
    type Row = Sprogcenter;
    type Draft = SprogcenterDraft;

    fn id(row: &Sprogcenter) -> DbId {
        row.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn censor_row_without_archive_flag_is_active() {
        let row: CensorRow = serde_json::from_value(json!({
            "id": 3,
            "fornavn": "Ib",
            "efternavn": "Spang",
            "adresse": null,
            "postnummer": null,
            "forstad": null,
            "telefon": null,
            "email": null,
            "cpr_nummer": null,
            "beskikket_til": null,
            "beskikket_indfodsret": false,
            "beskikket_medborgerskab": false,
            "arbejds_status": null,
            "prioritet": 2,
            "sprogcenter_id": null,
            "kommentar": null,
            "created_at": "2025-01-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(Censorer::id(&row), 3);
        assert!(!row.is_archived());
        assert_eq!(row.censor.prioritet, Some(2));
    }

    #[test]
    fn blank_required_fields_block_posting() {
        let draft = CensorDraft {
            fornavn: "Karen".into(),
            efternavn: "  ".into(),
            ..Default::default()
        };
        assert!(draft.missing_required().is_some());
        assert!(OrganisationDraft::default().missing_required().is_some());
        assert!(SprogcenterDraft {
            navn: "Clavis".into(),
            ..Default::default()
        }
        .missing_required()
        .is_none());
    }

    #[test]
    fn empty_draft_strings_are_sent_as_is() {
        let body = serde_json::to_value(CensorDraft {
            fornavn: "A".into(),
            efternavn: "B".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body["adresse"], "");
        assert_eq!(body["prioritet"], serde_json::Value::Null);
    }
}
