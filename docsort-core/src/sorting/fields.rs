//! Field classification for comparator dispatch
//!
//! Every sort key maps to exactly one comparison rule. The mapping is an
//! exhaustive match so adding a field to the model forces a decision here.

use docsort_model::DocumentField;

/// Comparison rule selected by a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Timestamp comparison, missing dates sort as the epoch
    Date,
    /// Draft before published, ties broken by title
    Status,
    /// Compared by the shape of the stored value (text or number)
    Generic,
}

impl FieldKind {
    pub fn of(field: &DocumentField) -> Self {
        match field {
            DocumentField::PublishedAt => FieldKind::Date,
            DocumentField::Status => FieldKind::Status,
            DocumentField::Title
            | DocumentField::Slug
            | DocumentField::Description
            | DocumentField::Collection
            | DocumentField::Author
            | DocumentField::Custom(_) => FieldKind::Generic,
        }
    }
}
