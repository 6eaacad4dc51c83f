//! Resume storage and text extraction.

pub mod extract;
pub mod handlers;
