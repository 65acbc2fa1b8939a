//! Document comparator
//!
//! Rules by field kind, ascending shown, descending reverses the result:
//!
//! - date: millisecond timestamps, missing or empty dates count as the epoch
//! - status: draft before published, same status falls back to the title
//! - generic: text against text or number against number, anything else ties
//!
//! Ties are resolved by the caller's stable sort, so equal documents keep
//! their input order.

use super::fields::FieldKind;
use super::keys::{DateKey, locale_compare};
use super::traits::SortableEntity;
use super::utils::is_sorted_by;
use docsort_model::{DocumentField, SortConfig, SortDirection};
use std::cmp::Ordering;
use tracing::trace;

/// Compare two documents under `config`.
///
/// `Less` places `a` first. Pure: the result depends on the arguments only.
pub fn compare_documents<T>(a: &T, b: &T, config: &SortConfig) -> Ordering
where
    T: SortableEntity + ?Sized,
{
    Comparator::new(config).compare(a, b)
}

/// A sort config bound to its field classification
///
/// Classifying once up front keeps the per-pair work to the rule itself.
#[derive(Debug, Clone, Copy)]
pub struct Comparator<'c> {
    config: &'c SortConfig,
    kind: FieldKind,
}

impl<'c> Comparator<'c> {
    pub fn new(config: &'c SortConfig) -> Self {
        Self {
            config,
            kind: FieldKind::of(&config.key),
        }
    }

    pub fn config(&self) -> &'c SortConfig {
        self.config
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: SortableEntity + ?Sized,
    {
        let ordering = match self.kind {
            FieldKind::Date => compare_dates(a, b),
            FieldKind::Status => compare_status(a, b),
            FieldKind::Generic => compare_generic(a, b, &self.config.key),
        };

        apply_direction(ordering, self.config.direction)
    }

    /// Whether `items` already satisfy this comparator
    pub fn is_sorted<T: SortableEntity>(&self, items: &[T]) -> bool {
        is_sorted_by(items, |a, b| self.compare(a, b))
    }
}

fn compare_dates<T>(a: &T, b: &T) -> Ordering
where
    T: SortableEntity + ?Sized,
{
    let left = DateKey::parse(a.published_at());
    let right = DateKey::parse(b.published_at());
    left.compare(right)
}

fn compare_status<T>(a: &T, b: &T) -> Ordering
where
    T: SortableEntity + ?Sized,
{
    if a.status() == b.status() {
        return locale_compare(a.title(), b.title());
    }

    if a.status().is_published() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

fn compare_generic<T>(a: &T, b: &T, field: &DocumentField) -> Ordering
where
    T: SortableEntity + ?Sized,
{
    let left = a.sort_value(field);
    let right = b.sort_value(field);

    left.partial_compare(&right).unwrap_or_else(|| {
        trace!(
            field = %field,
            left = ?left,
            right = ?right,
            "incomparable sort values, keeping input order"
        );
        Ordering::Equal
    })
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_model::{Document, DocumentStatus};

    fn draft(title: &str) -> Document {
        Document::new(title, DocumentStatus::Draft)
    }

    fn published(title: &str) -> Document {
        Document::new(title, DocumentStatus::Published)
    }

    #[test]
    fn test_missing_date_sorts_as_epoch() {
        let dated = draft("B").with_published_at("2023-01-01");
        let undated = draft("A");
        let config = SortConfig::ascending(DocumentField::PublishedAt);

        assert_eq!(compare_documents(&undated, &dated, &config), Ordering::Less);
        assert_eq!(
            compare_documents(&undated, &dated, &config.reversed()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_empty_date_equals_missing_date() {
        let empty = draft("A").with_published_at("");
        let missing = draft("B");
        let config = SortConfig::ascending(DocumentField::PublishedAt);

        assert_eq!(
            compare_documents(&empty, &missing, &config),
            Ordering::Equal
        );
    }

    #[test]
    fn test_status_orders_draft_first() {
        let config = SortConfig::ascending(DocumentField::Status);
        // Titles would say otherwise; status wins.
        let d = draft("Zulu");
        let p = published("Alpha");

        assert_eq!(compare_documents(&d, &p, &config), Ordering::Less);
        assert_eq!(compare_documents(&p, &d, &config), Ordering::Greater);
        assert_eq!(
            compare_documents(&d, &p, &config.reversed()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_status_tie_breaks_on_title_with_direction() {
        let config = SortConfig::ascending(DocumentField::Status);
        let banana = draft("Banana");
        let apple = draft("Apple");

        assert_eq!(compare_documents(&apple, &banana, &config), Ordering::Less);
        assert_eq!(
            compare_documents(&apple, &banana, &config.reversed()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_generic_text_and_numbers() {
        let a = draft("a")
            .with_field("series", "alpha")
            .with_field("order", 10_i64);
        let b = draft("b")
            .with_field("series", "Beta")
            .with_field("order", 2_i64);

        let by_series = SortConfig::ascending(DocumentField::Custom("series".into()));
        let by_order = SortConfig::ascending(DocumentField::Custom("order".into()));

        assert_eq!(compare_documents(&a, &b, &by_series), Ordering::Less);
        assert_eq!(compare_documents(&a, &b, &by_order), Ordering::Greater);
        assert_eq!(
            compare_documents(&a, &b, &by_order.reversed()),
            Ordering::Less
        );
    }

    #[test]
    fn test_mismatched_values_tie_in_both_directions() {
        let text = draft("a").with_field("rank", "first");
        let number = draft("b").with_field("rank", 1_i64);
        let absent = draft("c");
        let flag = draft("d").with_field("rank", true);
        let config = SortConfig::ascending(DocumentField::Custom("rank".into()));

        for (left, right) in [(&text, &number), (&number, &absent), (&flag, &flag)] {
            assert_eq!(compare_documents(left, right, &config), Ordering::Equal);
            assert_eq!(
                compare_documents(left, right, &config.reversed()),
                Ordering::Equal
            );
        }
    }

    #[test]
    fn test_author_objects_are_not_ordered() {
        let mut a = draft("a");
        a.author = Some(docsort_model::Author {
            name: Some("Zed".into()),
            picture: None,
        });
        let b = draft("b");
        let config = SortConfig::ascending(DocumentField::Author);

        assert_eq!(compare_documents(&a, &b, &config), Ordering::Equal);
    }

    #[test]
    fn test_comparator_is_sorted() {
        let config = SortConfig::ascending(DocumentField::Title);
        let comparator = Comparator::new(&config);
        let docs = vec![draft("apple"), draft("Banana"), draft("cherry")];

        assert_eq!(comparator.kind(), FieldKind::Generic);
        assert!(comparator.is_sorted(&docs));
        assert!(!Comparator::new(&config.reversed()).is_sorted(&docs));
    }
}
