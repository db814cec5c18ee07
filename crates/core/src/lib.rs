//! Shared building blocks for the examination administration service:
//! identifier types, the domain error taxonomy, lenient payload coercion
//! and declarative validation.

pub mod coerce;
pub mod error;
pub mod types;
pub mod validation;
