//! Wizard core: screens, session state and the operations screens run.

pub mod ops;
pub mod screen;
pub mod session;
