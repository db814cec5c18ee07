//! List view state for the flat resources.
//!
//! Views never patch their listing locally: every mutation is followed by
//! a full re-fetch, and a failed call only sets `error`.

use std::marker::PhantomData;

use censur_core::types::DbId;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::resource::{Draft, Resource};

/// State behind one entity tab: the listing plus the add form.
pub struct ListView<R: Resource> {
    pub items: Vec<R::Row>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: R::Draft,
    pub form_visible: bool,
    resource: PhantomData<R>,
}

impl<R: Resource> Default for ListView<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            form: R::Draft::default(),
            form_visible: false,
            resource: PhantomData,
        }
    }
}

impl<R: Resource> ListView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial fetch when the tab is shown.
    pub async fn mount(&mut self, api: &ApiClient) {
        self.refresh(api).await;
    }

    /// Replace `items` with the server's listing. On failure the previous
    /// items are kept.
    pub async fn refresh(&mut self, api: &ApiClient) {
        self.loading = true;
        self.error = None;
        match api.list::<R>().await {
            Ok(items) => self.items = items,
            Err(err) => self.fail("Could not load", R::PATH, &err),
        }
        self.loading = false;
    }

    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// Post the form. On success the form is cleared and hidden and the
    /// listing re-fetched; on failure the form is left for correction.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        if let Some(message) = self.form.missing_required() {
            self.error = Some(message.to_string());
            return false;
        }

        self.error = None;
        match api.create::<R>(&self.form).await {
            Ok(_) => {
                self.form = R::Draft::default();
                self.form_visible = false;
                self.refresh(api).await;
                true
            }
            Err(err) => {
                self.fail("Could not save", R::PATH, &err);
                false
            }
        }
    }

    /// Delete a row and re-fetch the listing.
    pub async fn remove(&mut self, api: &ApiClient, id: DbId) -> bool {
        self.error = None;
        match api.delete::<R>(id).await {
            Ok(()) => {
                self.refresh(api).await;
                true
            }
            Err(err) => {
                self.fail("Could not delete", R::PATH, &err);
                false
            }
        }
    }

    fn fail(&mut self, action: &str, what: &str, err: &ClientError) {
        tracing::warn!(resource = what, error = %err, "{action}");
        self.error = Some(format!("{action} {what}: {err}"));
    }
}
