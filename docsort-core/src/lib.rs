//! Core library for docsort.
//!
//! Orders document listings by a [`SortConfig`](docsort_model::SortConfig):
//! dates, publication status, and generic text or numeric fields, with
//! permissive fallbacks for values that cannot be compared.

#![allow(missing_docs)]

pub mod sorting;

pub use docsort_model as model;
pub use sorting::*;
