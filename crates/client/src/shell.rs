//! Navigation shell: one tab per entity, one mounted view at a time.

use crate::api::ApiClient;
use crate::hold_view::HoldView;
use crate::resource::{Censorer, Organisationer, Sprogcentre};
use crate::views::ListView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Censorer,
    Organisationer,
    Sprogcentre,
    Hold,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Censorer => "censorer",
            Tab::Organisationer => "organisationer",
            Tab::Sprogcentre => "sprogcentre",
            Tab::Hold => "hold",
        }
    }
}

/// The currently mounted view. Switching tabs drops the old view's state.
pub enum ActiveView {
    Censorer(ListView<Censorer>),
    Organisationer(ListView<Organisationer>),
    Sprogcentre(ListView<Sprogcentre>),
    Hold(HoldView),
}

pub struct Shell {
    api: ApiClient,
    active_tab: Tab,
    pub view: ActiveView,
}

impl Shell {
    /// Starts on the censor tab, not yet mounted.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            active_tab: Tab::default(),
            view: ActiveView::Censorer(ListView::new()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Make `tab` active and mount a fresh view for it.
    pub async fn switch_to(&mut self, tab: Tab) {
        tracing::debug!(tab = tab.label(), "switching tab");
        self.active_tab = tab;
        self.view = match tab {
            Tab::Censorer => ActiveView::Censorer(ListView::new()),
            Tab::Organisationer => ActiveView::Organisationer(ListView::new()),
            Tab::Sprogcentre => ActiveView::Sprogcentre(ListView::new()),
            Tab::Hold => ActiveView::Hold(HoldView::new()),
        };
        self.mount().await;
    }

    /// Mount the current view (initial fetch).
    pub async fn mount(&mut self) {
        let api = &self.api;
        match &mut self.view {
            ActiveView::Censorer(view) => view.mount(api).await,
            ActiveView::Organisationer(view) => view.mount(api).await,
            ActiveView::Sprogcentre(view) => view.mount(api).await,
            ActiveView::Hold(view) => view.mount(api).await,
        }
    }
}
