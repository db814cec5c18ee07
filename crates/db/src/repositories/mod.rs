//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod censor_repo;
pub mod hold_repo;
pub mod organisation_repo;
pub mod sprogcenter_repo;

pub use censor_repo::CensorRepo;
pub use hold_repo::HoldRepo;
pub use organisation_repo::OrganisationRepo;
pub use sprogcenter_repo::SprogcenterRepo;
