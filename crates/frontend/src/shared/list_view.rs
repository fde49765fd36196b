//! The list view engine shared by every management screen.
//!
//! A screen owns one `ListView<T>` holding the raw sequence as last fetched
//! from the API plus the current filter/sort/page state. The displayed rows
//! are always derived in a fixed order — filter, then sort, then slice —
//! and recomputed from the raw sequence on every call, so a render can
//! never show stale derived data.
//!
//! Two page-indexing conventions are in use across the screens (some count
//! from 1, some from 0). Each screen keeps its own convention; the engine
//! is parametrized instead of unifying them.

use std::cmp::Ordering;

/// Field-wise three-way comparison, selected dynamically by field name.
/// Unknown fields compare equal (sorting by them is a no-op).
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Client-side filter predicate. Most screens delegate search to the
/// server and never set a filter; the engine still composes one when
/// present.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndexing {
    ZeroBased,
    OneBased,
}

impl PageIndexing {
    pub fn first_page(self) -> usize {
        match self {
            PageIndexing::ZeroBased => 0,
            PageIndexing::OneBased => 1,
        }
    }

    fn offset(self, page: usize, page_size: usize) -> usize {
        match self {
            PageIndexing::ZeroBased => page * page_size,
            PageIndexing::OneBased => page.saturating_sub(1) * page_size,
        }
    }

    fn last_page(self, page_count: usize) -> usize {
        match self {
            PageIndexing::ZeroBased => page_count.saturating_sub(1),
            PageIndexing::OneBased => page_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    rows: Vec<T>,
    filter: String,
    sort: Option<SortSpec>,
    page_size: usize,
    indexing: PageIndexing,
    page: usize,
}

impl<T: Sortable + Searchable + Clone> ListView<T> {
    pub fn new(page_size: usize, indexing: PageIndexing) -> Self {
        debug_assert!(page_size > 0);
        Self {
            rows: Vec::new(),
            filter: String::new(),
            sort: None,
            page_size,
            indexing,
            page: indexing.first_page(),
        }
    }

    /// Wholesale replacement of the raw sequence: the initial fetch or a
    /// server-side search result. Resets to the first page of the screen's
    /// convention.
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.page = self.indexing.first_page();
    }

    /// Wholesale replacement after a mutation refetch. The current page is
    /// kept; if it ends up past the new last page the slice renders empty
    /// rather than being clamped to some other page behind the user's back.
    pub fn refresh(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = self.indexing.first_page();
    }

    /// Clicking the active sort field flips its direction; clicking a new
    /// field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(spec) if spec.field == field => SortSpec {
                field: spec.field,
                ascending: !spec.ascending,
            },
            _ => SortSpec {
                field: field.to_string(),
                ascending: true,
            },
        });
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn indexing(&self) -> PageIndexing {
        self.indexing
    }

    /// The raw sequence is untouched by every derivation.
    pub fn raw(&self) -> &[T] {
        &self.rows
    }

    fn filtered(&self) -> Vec<T> {
        if self.filter.trim().is_empty() {
            self.rows.clone()
        } else {
            self.rows
                .iter()
                .filter(|row| row.matches_filter(&self.filter))
                .cloned()
                .collect()
        }
    }

    /// Filtered then sorted, the full sequence the pages slice into.
    /// `sort_by` is stable, so rows with equal keys keep their fetched
    /// relative order.
    pub fn ordered(&self) -> Vec<T> {
        let mut items = self.filtered();
        if let Some(spec) = &self.sort {
            items.sort_by(|a, b| {
                let ord = a.compare_by_field(b, &spec.field);
                if spec.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }
        items
    }

    /// The current page slice: filter → sort → paginate, in that order.
    pub fn visible(&self) -> Vec<T> {
        let items = self.ordered();
        let start = self.indexing.offset(self.page, self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        items[start..end].to_vec()
    }

    /// Number of rows after filtering (what the pager counts).
    pub fn total(&self) -> usize {
        if self.filter.trim().is_empty() {
            self.rows.len()
        } else {
            self.rows
                .iter()
                .filter(|row| row.matches_filter(&self.filter))
                .count()
        }
    }

    pub fn page_count(&self) -> usize {
        self.total().div_ceil(self.page_size)
    }

    /// Moves to `page` if it is within bounds, otherwise does nothing.
    /// Out-of-range requests are never clamped to a different page.
    pub fn set_page(&mut self, page: usize) {
        let count = self.page_count();
        if count == 0 {
            if page == self.indexing.first_page() {
                self.page = page;
            }
            return;
        }
        if page >= self.indexing.first_page() && page <= self.indexing.last_page(count) {
            self.page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.set_page(self.page - 1);
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > self.indexing.first_page()
    }

    pub fn has_next(&self) -> bool {
        let count = self.page_count();
        count > 0 && self.page < self.indexing.last_page(count)
    }

    /// 1-based "Showing X to Y of Z" range for the footer, `None` when
    /// nothing is visible on the current page.
    pub fn shown_range(&self) -> Option<(usize, usize, usize)> {
        let total = self.total();
        let start = self.indexing.offset(self.page, self.page_size);
        if start >= total {
            return None;
        }
        let end = (start + self.page_size).min(total);
        Some((start + 1, end, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        people: i32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "id" => self.id.cmp(&other.id),
                "name" => self.name.cmp(other.name),
                "people" => self.people.cmp(&other.people),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn row(id: i64, name: &'static str, people: i32) -> Row {
        Row { id, name, people }
    }

    fn rows(n: i64) -> Vec<Row> {
        (1..=n).map(|i| row(i, "r", i as i32)).collect()
    }

    #[test]
    fn sorting_is_a_stable_permutation() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(vec![
            row(1, "banh mi", 2),
            row(2, "pho", 2),
            row(3, "bun cha", 1),
        ]);
        view.toggle_sort("people");
        let sorted = view.ordered();
        // Same multiset.
        assert_eq!(sorted.len(), 3);
        for r in view.raw() {
            assert!(sorted.contains(r));
        }
        // Stable: ids 1 and 2 share a key and keep their fetched order.
        assert_eq!(
            sorted.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        // Raw sequence untouched.
        assert_eq!(view.raw().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn toggling_same_field_reverses_distinct_keys() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(vec![row(2, "b", 0), row(3, "c", 0), row(1, "a", 0)]);
        view.toggle_sort("id");
        let asc: Vec<i64> = view.ordered().iter().map(|r| r.id).collect();
        view.toggle_sort("id");
        let desc: Vec<i64> = view.ordered().iter().map(|r| r.id).collect();
        assert_eq!(asc, vec![1, 2, 3]);
        assert_eq!(desc, asc.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn switching_fields_resets_to_ascending() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(rows(3));
        view.toggle_sort("id");
        view.toggle_sort("id");
        assert!(!view.sort_spec().unwrap().ascending);
        view.toggle_sort("people");
        let spec = view.sort_spec().unwrap();
        assert_eq!(spec.field, "people");
        assert!(spec.ascending);
    }

    #[test]
    fn twenty_three_bookings_page_size_ten() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(rows(23));
        assert_eq!(view.page_count(), 3);
        assert_eq!(
            view.visible().iter().map(|r| r.id).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );
        view.set_page(3);
        assert_eq!(
            view.visible().iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![21, 22, 23]
        );
        assert_eq!(view.shown_range(), Some((21, 23, 23)));
    }

    #[test]
    fn pages_concatenate_to_the_ordered_sequence() {
        for indexing in [PageIndexing::ZeroBased, PageIndexing::OneBased] {
            let mut view = ListView::new(5, indexing);
            view.replace(rows(17));
            view.toggle_sort("id");
            view.toggle_sort("id"); // descending
            let mut collected = Vec::new();
            view.set_page(indexing.first_page());
            loop {
                let slice = view.visible();
                assert!(slice.len() <= 5);
                collected.extend(slice);
                if !view.has_next() {
                    break;
                }
                view.next_page();
            }
            assert_eq!(collected, view.ordered());
        }
    }

    #[test]
    fn navigation_past_bounds_is_a_no_op() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(rows(23));
        view.prev_page();
        assert_eq!(view.page(), 1);
        view.set_page(4);
        assert_eq!(view.page(), 1);
        view.set_page(0);
        assert_eq!(view.page(), 1);
        view.set_page(3);
        view.next_page();
        assert_eq!(view.page(), 3);

        let mut zero = ListView::new(5, PageIndexing::ZeroBased);
        zero.replace(rows(12));
        assert!(!zero.has_prev());
        zero.prev_page();
        assert_eq!(zero.page(), 0);
        zero.set_page(2);
        assert!(!zero.has_next());
        zero.next_page();
        assert_eq!(zero.page(), 2);
    }

    #[test]
    fn replace_resets_page_refresh_keeps_it() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(rows(23));
        view.set_page(3);

        // Mutation refetch: same screen position.
        view.refresh(rows(23));
        assert_eq!(view.page(), 3);

        // Server search result replaces the raw sequence and resets paging.
        view.replace(vec![row(99, "match", 1)]);
        assert_eq!(view.page(), 1);
        assert_eq!(view.raw().len(), 1);
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn refresh_never_clamps_an_out_of_range_page() {
        let mut view = ListView::new(10, PageIndexing::OneBased);
        view.replace(rows(23));
        view.set_page(3);
        view.refresh(rows(5));
        assert_eq!(view.page(), 3);
        assert!(view.visible().is_empty());
        assert_eq!(view.shown_range(), None);
    }

    #[test]
    fn filter_composes_before_sort_and_slice() {
        let mut view = ListView::new(2, PageIndexing::ZeroBased);
        view.replace(vec![
            row(1, "pho bo", 1),
            row(2, "banh mi", 2),
            row(3, "pho ga", 3),
            row(4, "com tam", 4),
            row(5, "PHO chay", 5),
        ]);
        view.set_filter("pho");
        view.toggle_sort("people");
        view.toggle_sort("people"); // descending
        assert_eq!(view.total(), 3);
        assert_eq!(view.page_count(), 2);
        assert_eq!(
            view.visible().iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![5, 3]
        );
        view.next_page();
        assert_eq!(
            view.visible().iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn empty_sequence_has_no_pages() {
        let view: ListView<Row> = ListView::new(10, PageIndexing::OneBased);
        assert_eq!(view.page_count(), 0);
        assert!(view.visible().is_empty());
        assert!(!view.has_next());
        assert!(!view.has_prev());
        assert_eq!(view.shown_range(), None);
    }
}
