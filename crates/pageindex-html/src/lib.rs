//! Visible text and hyperlink extraction from raw HTML

mod extract;
mod links;
mod text;

pub use extract::{extract, Extraction};
