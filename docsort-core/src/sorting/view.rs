//! Sorted views over document lists
//!
//! [`sorted_view`] is the pure entry point. [`SortedView`] adds the
//! recompute-on-change policy: the last order is reused while the same list
//! (by `Arc` identity) is viewed with an equal config.

use super::compare::Comparator;
use super::traits::SortableEntity;
use super::utils::{identity_order, stable_sort_by};
use docsort_model::SortConfig;
use std::sync::Arc;
use tracing::{debug, trace};

/// Order `documents` under `config` without touching the input.
///
/// Returns references to the input elements, so identities are preserved.
/// The sort is stable: documents that compare equal keep their input order.
pub fn sorted_view<'a, T>(documents: &'a [T], config: &SortConfig) -> Vec<&'a T>
where
    T: SortableEntity,
{
    let comparator = Comparator::new(config);
    let mut view: Vec<&T> = documents.iter().collect();
    stable_sort_by(&mut view, |a, b| comparator.compare(*a, *b));
    view
}

/// Input positions of `documents` in sorted order
pub fn sort_indices<T>(documents: &[T], config: &SortConfig) -> Vec<usize>
where
    T: SortableEntity,
{
    let comparator = Comparator::new(config);
    let mut order = identity_order(documents.len());
    stable_sort_by(&mut order, |&a, &b| {
        comparator.compare(&documents[a], &documents[b])
    });
    order
}

/// Hit/miss counters for a [`SortedView`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct CachedOrder<T> {
    // Holding the source keeps its allocation, and therefore its address, alive.
    source: Arc<[T]>,
    config: SortConfig,
    order: Vec<usize>,
}

impl<T: SortableEntity> CachedOrder<T> {
    fn compute(documents: &Arc<[T]>, config: &SortConfig) -> Self {
        let order = sort_indices(documents, config);
        debug!(
            documents = order.len(),
            key = %config.key,
            direction = %config.direction,
            "recomputed sorted view"
        );

        Self {
            source: Arc::clone(documents),
            config: config.clone(),
            order,
        }
    }

    fn matches(&self, documents: &Arc<[T]>, config: &SortConfig) -> bool {
        Arc::ptr_eq(&self.source, documents) && self.config == *config
    }
}

/// Memoized sorted view
///
/// Recomputes only when it is handed a different list (a new `Arc`, even if
/// the contents are equal) or a config that differs by value.
#[derive(Debug)]
pub struct SortedView<T> {
    cached: Option<CachedOrder<T>>,
    stats: SortCacheStats,
}

impl<T> Default for SortedView<T> {
    fn default() -> Self {
        Self {
            cached: None,
            stats: SortCacheStats::default(),
        }
    }
}

impl<T: SortableEntity> SortedView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted input positions, recomputed only if the inputs changed
    pub fn order(&mut self, documents: &Arc<[T]>, config: &SortConfig) -> &[usize] {
        if self.is_cached_for(documents, config) {
            self.stats.hits += 1;
            trace!(documents = documents.len(), "sorted view cache hit");
        } else {
            self.stats.misses += 1;
            self.cached = None;
        }

        let cached = self
            .cached
            .get_or_insert_with(|| CachedOrder::compute(documents, config));
        &cached.order
    }

    /// Sorted references into `documents`
    pub fn view<'a>(&mut self, documents: &'a Arc<[T]>, config: &SortConfig) -> Vec<&'a T> {
        self.order(documents, config)
            .iter()
            .map(|&index| &documents[index])
            .collect()
    }

    pub fn is_cached_for(&self, documents: &Arc<[T]>, config: &SortConfig) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|cached| cached.matches(documents, config))
    }

    /// Drop the cached order so the next call recomputes
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn stats(&self) -> SortCacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_model::{Document, DocumentField, DocumentStatus};

    fn titles<'a>(view: &[&'a Document]) -> Vec<&'a str> {
        view.iter().map(|doc| doc.title.as_str()).collect()
    }

    fn sample() -> Arc<[Document]> {
        vec![
            Document::new("Cherry", DocumentStatus::Published)
                .with_published_at("2023-03-01"),
            Document::new("apple", DocumentStatus::Draft),
            Document::new("Banana", DocumentStatus::Published)
                .with_published_at("2023-01-15T12:00:00Z"),
        ]
        .into()
    }

    #[test]
    fn test_sorted_view_does_not_touch_input() {
        let docs = sample();
        let config = SortConfig::ascending(DocumentField::Title);

        let view = sorted_view(&docs, &config);

        assert_eq!(titles(&view), vec!["apple", "Banana", "Cherry"]);
        assert_eq!(docs[0].title, "Cherry");
        assert!(std::ptr::eq(view[0], &docs[1]));
    }

    #[test]
    fn test_sort_indices_matches_sorted_view() {
        let docs = sample();
        let config = SortConfig::descending(DocumentField::PublishedAt);

        let order = sort_indices(&docs, &config);
        let view = sorted_view(&docs, &config);

        assert_eq!(order, vec![0, 2, 1]);
        for (index, doc) in order.iter().zip(view) {
            assert!(std::ptr::eq(&docs[*index], doc));
        }
    }

    #[test]
    fn test_cache_reuses_order_for_same_inputs() {
        let docs = sample();
        let config = SortConfig::ascending(DocumentField::Title);
        let mut view = SortedView::new();

        let first = titles(&view.view(&docs, &config));
        let second = titles(&view.view(&docs, &config.clone()));

        assert_eq!(first, second);
        assert_eq!(view.stats(), SortCacheStats { hits: 1, misses: 1 });
        assert!(view.is_cached_for(&docs, &config));
    }

    #[test]
    fn test_cache_recomputes_on_new_list_or_config() {
        let docs = sample();
        let config = SortConfig::ascending(DocumentField::Title);
        let mut view = SortedView::new();

        view.order(&docs, &config);

        // Equal contents, different allocation.
        let copy: Arc<[Document]> = docs.iter().cloned().collect();
        view.order(&copy, &config);
        assert!(!view.is_cached_for(&docs, &config));

        let reversed = config.reversed();
        let order = view.order(&copy, &reversed).to_vec();
        assert_eq!(order, vec![0, 2, 1]);

        assert_eq!(view.stats(), SortCacheStats { hits: 0, misses: 3 });
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let docs = sample();
        let config = SortConfig::ascending(DocumentField::Status);
        let mut view = SortedView::new();

        view.order(&docs, &config);
        view.invalidate();
        assert!(!view.is_cached_for(&docs, &config));

        view.order(&docs, &config);
        assert_eq!(view.stats().misses, 2);
    }
}
