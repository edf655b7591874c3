//! Domain models shared across the wizard.

pub mod payload;
pub mod profile;
