//! Résumé rendering: Markdown conversion and the exportable document.

pub mod document;
pub mod markdown;
