//! Client-side state for the examination administration front end.
//!
//! [`ApiClient`] speaks to the HTTP server; [`ListView`] and [`HoldView`]
//! hold each tab's transient copy of the data, and [`Shell`] decides which
//! one is mounted. Nothing is rendered here.

pub mod api;
pub mod error;
pub mod hold_view;
pub mod resource;
pub mod shell;
pub mod views;

pub use api::ApiClient;
pub use error::ClientError;
pub use hold_view::HoldView;
pub use shell::{Shell, Tab};
pub use views::ListView;
