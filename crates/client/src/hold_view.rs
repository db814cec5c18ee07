//! Class group view: term-scoped listing, add dialog and lock toggle.

use censur_core::types::DbId;
use censur_db::models::hold::HoldWithNames;
use censur_db::models::sprogcenter::Sprogcenter;

use crate::api::{ApiClient, HoldPayload};
use crate::error::ClientError;
use crate::resource::{CensorRow, Censorer, Sprogcentre};

/// The add dialog's fields. `termin` is not part of the form; the
/// selected term is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldForm {
    /// Raw text as typed; parsed on confirm.
    pub deltagere: String,
    pub prove: String,
    pub provetype: String,
    pub laast: bool,
    pub sprogcenter_id: Option<DbId>,
    pub censorer_id: Option<DbId>,
}

impl HoldForm {
    fn to_payload(&self, termin: &str) -> Result<HoldPayload, &'static str> {
        let deltagere = match self.deltagere.trim().parse::<i32>() {
            Ok(n) if n >= 0 => n,
            _ => return Err("deltagere must be a whole number, zero or greater"),
        };
        let (prove, provetype) = (self.prove.trim(), self.provetype.trim());
        if prove.is_empty() || provetype.is_empty() {
            return Err("prøve and prøvetype are required");
        }
        Ok(HoldPayload {
            deltagere,
            termin: termin.to_string(),
            prove: prove.to_string(),
            provetype: provetype.to_string(),
            laast: self.laast,
            sprogcenter_id: self.sprogcenter_id,
            censorer_id: self.censorer_id,
        })
    }
}

#[derive(Default)]
pub struct HoldView {
    pub hold: Vec<HoldWithNames>,
    pub loading: bool,
    pub error: Option<String>,
    pub term_options: Vec<String>,
    pub sprogcenter_options: Vec<Sprogcenter>,
    pub censor_options: Vec<CensorRow>,
    pub selected_termin: Option<String>,
    pub form: HoldForm,
    pub dialog_open: bool,
}

impl HoldView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dropdown options. Nothing is listed until a term is chosen.
    pub async fn mount(&mut self, api: &ApiClient) {
        self.error = None;
        let loaded = async {
            let sprogcentre = api.list::<Sprogcentre>().await?;
            let censorer = api.list::<Censorer>().await?;
            let terms = api.list_terms().await?;
            Ok::<_, ClientError>((sprogcentre, censorer, terms))
        }
        .await;

        match loaded {
            Ok((sprogcentre, censorer, terms)) => {
                self.sprogcenter_options = sprogcentre;
                self.censor_options = censorer;
                self.term_options = terms;
            }
            Err(err) => self.fail("Could not load options".to_string(), &err),
        }
    }

    /// Choose the term to list. An empty term clears the listing.
    pub async fn select_termin(&mut self, api: &ApiClient, termin: &str) {
        if termin.is_empty() {
            self.selected_termin = None;
            self.hold.clear();
            return;
        }
        self.selected_termin = Some(termin.to_string());
        self.refresh(api).await;
    }

    async fn refresh(&mut self, api: &ApiClient) {
        let Some(termin) = self.selected_termin.clone() else {
            return;
        };
        self.loading = true;
        self.error = None;
        match api.list_hold(Some(&termin)).await {
            Ok(hold) => self.hold = hold,
            Err(err) => self.fail(format!("Could not load hold for {termin}"), &err),
        }
        self.loading = false;
    }

    /// Open the add dialog with a blank form. Refused until a term is
    /// selected.
    pub fn open_add_dialog(&mut self) -> bool {
        if self.selected_termin.is_none() {
            self.error = Some("Select a termin before adding a hold".to_string());
            return false;
        }
        self.form = HoldForm::default();
        self.error = None;
        self.dialog_open = true;
        true
    }

    pub fn close_add_dialog(&mut self) {
        self.dialog_open = false;
        self.error = None;
    }

    /// Post the dialog's form under the selected term. The dialog stays
    /// open with an error when the form or the request is rejected.
    pub async fn confirm_add(&mut self, api: &ApiClient) -> bool {
        let Some(termin) = self.selected_termin.clone() else {
            self.error = Some("Select a termin before adding a hold".to_string());
            return false;
        };
        let payload = match self.form.to_payload(&termin) {
            Ok(payload) => payload,
            Err(message) => {
                self.error = Some(message.to_string());
                return false;
            }
        };

        self.error = None;
        match api.create_hold(&payload).await {
            Ok(_) => {
                self.close_add_dialog();
                self.refresh(api).await;
                true
            }
            Err(err) => {
                self.fail("Could not save hold".to_string(), &err);
                false
            }
        }
    }

    pub async fn remove(&mut self, api: &ApiClient, id: DbId) -> bool {
        self.error = None;
        match api.delete_hold(id).await {
            Ok(()) => {
                self.refresh(api).await;
                true
            }
            Err(err) => {
                self.fail("Could not delete hold".to_string(), &err);
                false
            }
        }
    }

    /// Flip the lock and put the server's row in place of the local one.
    pub async fn toggle_lock(&mut self, api: &ApiClient, id: DbId) -> bool {
        self.error = None;
        match api.toggle_lock(id).await {
            Ok(updated) => {
                if let Some(row) = self.hold.iter_mut().find(|h| h.id == id) {
                    *row = updated;
                }
                true
            }
            Err(err) => {
                self.fail("Could not toggle lock".to_string(), &err);
                false
            }
        }
    }

    fn fail(&mut self, context: String, err: &ClientError) {
        tracing::warn!(error = %err, "{context}");
        self.error = Some(format!("{context}: {err}"));
    }
}
