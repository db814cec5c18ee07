pub mod censor;
pub mod hold;
pub mod organisation;
pub mod sprogcenter;
