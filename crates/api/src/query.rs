//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Term filter for hold listings (`?termin=`).
///
/// An empty value is treated the same as an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct TerminParams {
    pub termin: Option<String>,
}

impl TerminParams {
    /// The term to filter on, if one was given.
    pub fn filter(&self) -> Option<&str> {
        self.termin.as_deref().filter(|t| !t.is_empty())
    }
}
