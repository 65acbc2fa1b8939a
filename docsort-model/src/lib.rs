//! Data models shared across docsort crates.
#![allow(missing_docs)]

pub mod document;
pub mod error;
pub mod sort;

pub use document::{Author, Document, DocumentStatus, FieldValue};
pub use error::{ModelError, Result as ModelResult};
pub use sort::{DocumentField, SortConfig, SortDirection};
