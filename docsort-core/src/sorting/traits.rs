//! Core trait for sortable document entities
//!
//! The comparator never touches a concrete document type. It reads the three
//! fields with dedicated rules through named accessors and everything else
//! through [`SortableEntity::sort_value`].

use super::keys::SortValue;
use docsort_model::{DocumentField, DocumentStatus};

/// Anything that can be placed in a sorted document listing
pub trait SortableEntity {
    /// Title used for alphabetical ordering and status tie-breaks
    fn title(&self) -> &str;

    fn status(&self) -> DocumentStatus;

    /// Raw publication date, if any
    fn published_at(&self) -> Option<&str>;

    /// Borrow the value stored under `field` for generic comparison
    ///
    /// Implementations return [`SortValue::Missing`] for absent fields and
    /// [`SortValue::Unsupported`] for values that have no ordering.
    fn sort_value(&self, field: &DocumentField) -> SortValue<'_>;
}
