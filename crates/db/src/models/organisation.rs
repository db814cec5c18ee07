//! Organisation entity model and DTOs.

use censur_core::coerce;
use censur_core::types::{DbId, Timestamp};
use censur_core::validation::Schema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An organisation row from the `organisationer` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Organisation {
    pub id: DbId,
    pub navn: String,
    pub created_at: Timestamp,
}

/// The narrow `{id, navn}` projection returned by the organisation listing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OrganisationSummary {
    pub id: DbId,
    pub navn: String,
}

/// Wire payload for `POST /organisationer`. `navn` is trimmed before
/// the presence check.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateOrganisation {
    #[serde(default, deserialize_with = "coerce::trimmed_text")]
    #[validate(required(message = "is required"))]
    pub navn: Option<String>,
}

/// A validated organisation ready for insertion.
#[derive(Debug, Clone)]
pub struct NewOrganisation {
    pub navn: String,
}

impl Schema for CreateOrganisation {
    type Record = NewOrganisation;

    fn into_record(self) -> NewOrganisation {
        NewOrganisation {
            navn: self.navn.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use censur_core::validation::validate_into;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> CreateOrganisation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn name_is_trimmed() {
        let record = validate_into(parse(json!({"navn": " Acme "}))).unwrap();
        assert_eq!(record.navn, "Acme");
    }

    #[test]
    fn blank_or_missing_name_is_rejected() {
        assert!(validate_into(parse(json!({"navn": ""}))).is_err());
        assert!(validate_into(parse(json!({"navn": "   "}))).is_err());
        assert!(validate_into(parse(json!({}))).is_err());
    }
}
