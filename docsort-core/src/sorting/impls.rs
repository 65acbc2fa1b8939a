//! SortableEntity implementations

use super::keys::SortValue;
use super::traits::SortableEntity;
use docsort_model::{Document, DocumentField, DocumentStatus};

impl SortableEntity for Document {
    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> DocumentStatus {
        self.status
    }

    fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    fn sort_value(&self, field: &DocumentField) -> SortValue<'_> {
        match field {
            DocumentField::Title => SortValue::Text(&self.title),
            DocumentField::Status => SortValue::Text(self.status.as_str()),
            DocumentField::PublishedAt => SortValue::from_text(self.published_at.as_deref()),
            DocumentField::Slug => SortValue::Text(&self.slug),
            DocumentField::Description => SortValue::from_text(self.description.as_deref()),
            DocumentField::Collection => SortValue::from_text(self.collection.as_deref()),
            // Author is a nested record, which has no ordering of its own.
            DocumentField::Author => match self.author {
                Some(_) => SortValue::Unsupported,
                None => SortValue::Missing,
            },
            DocumentField::Custom(name) => SortValue::from_field(self.field(name)),
        }
    }
}

// Lets sorted views be sorted again without cloning documents.
impl<T: SortableEntity + ?Sized> SortableEntity for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn status(&self) -> DocumentStatus {
        (**self).status()
    }

    fn published_at(&self) -> Option<&str> {
        (**self).published_at()
    }

    fn sort_value(&self, field: &DocumentField) -> SortValue<'_> {
        (**self).sort_value(field)
    }
}
