//! vitae — interactive client for an AI résumé-generation backend.
//!
//! A linear four-screen wizard: landing, question intake, answer
//! collection, résumé generation. All accumulated input lives in one
//! [`wizard::session::Session`]; all backend traffic goes through
//! [`api::ResumeApi`]; the generated Markdown is sanitized on render and
//! exported as a print-ready document.

pub mod api;
pub mod cli;
pub mod config;
pub mod export;
pub mod models;
pub mod render;
pub mod testing;
pub mod ui;
pub mod wizard;
