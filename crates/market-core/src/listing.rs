//! Listing Pipeline
//!
//! Client-side filter -> sort -> paginate over already-fetched items.

use std::collections::BTreeSet;

use crate::condition::Condition;
use crate::item::Item;

/// Items per page
pub const PAGE_SIZE: usize = 12;

/// Sort order for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Newest, SortKey::Oldest, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    /// Unknown keys fall back to `Newest`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "oldest" => SortKey::Oldest,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::PriceLow => "Price: low to high",
            SortKey::PriceHigh => "Price: high to low",
        }
    }

    /// `(sortBy, sortOrder)` query parameters
    pub fn api_params(&self) -> (&'static str, &'static str) {
        match self {
            SortKey::Newest => ("createdAt", "desc"),
            SortKey::Oldest => ("createdAt", "asc"),
            SortKey::PriceLow => ("price", "asc"),
            SortKey::PriceHigh => ("price", "desc"),
        }
    }

    /// Stable in-place sort
    pub fn sort(&self, items: &mut [Item]) {
        match self {
            SortKey::Newest => items.sort_by(|a, b| b.created_timestamp().cmp(&a.created_timestamp())),
            SortKey::Oldest => items.sort_by_key(Item::created_timestamp),
            SortKey::PriceLow => items.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero())),
            SortKey::PriceHigh => items.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero())),
        }
    }
}

/// Filter configuration for the browse page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    pub search: String,
    /// `None` or "All" matches every category
    pub category: Option<String>,
    pub faculty: Option<String>,
    pub condition: Option<Condition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl ListingFilter {
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item)
            && option_matches(self.category.as_deref(), item.category.as_deref())
            && option_matches(self.faculty.as_deref(), item.faculty.as_deref())
            && self.matches_condition(item)
            && self.matches_price(item)
    }

    fn matches_search(&self, item: &Item) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [Some(item.title.as_str()), item.description.as_deref(), item.category.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_condition(&self, item: &Item) -> bool {
        match &self.condition {
            None => true,
            Some(wanted) => item.normalized_condition().is_some_and(|c| wanted.matches(&c)),
        }
    }

    fn matches_price(&self, item: &Item) -> bool {
        let price = item.price_or_zero();
        self.min_price.map_or(true, |min| price >= min) && self.max_price.map_or(true, |max| price <= max)
    }

    /// True when no narrowing filter is set (sort is ignored)
    pub fn is_empty(&self) -> bool {
        ListingFilter { sort: self.sort, ..ListingFilter::default() } == *self
    }
}

fn option_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted.map(str::trim) {
        None | Some("") => true,
        Some(w) if w.eq_ignore_ascii_case("all") => true,
        Some(w) => actual.is_some_and(|a| a.trim().eq_ignore_ascii_case(w)),
    }
}

/// One page of filtered, sorted items
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub items: Vec<Item>,
    /// 1-based page actually shown (clamped)
    pub page: usize,
    pub total_pages: usize,
    /// Matches across all pages
    pub total_matches: usize,
}

/// Run the full pipeline
pub fn apply(items: &[Item], filter: &ListingFilter, page: usize) -> ListingPage {
    let mut matched: Vec<Item> = items.iter().filter(|item| filter.matches(item)).cloned().collect();
    filter.sort.sort(&mut matched);
    let total_matches = matched.len();
    let (items, page, total_pages) = paginate(matched, page, PAGE_SIZE);
    ListingPage { items, page, total_pages, total_matches }
}

/// Slice out a 1-based page. Returns `(page_items, clamped_page, total_pages)`;
/// there is always at least one (possibly empty) page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> (Vec<T>, usize, usize) {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let page_items = items.into_iter().skip((page - 1) * page_size).take(page_size).collect();
    (page_items, page, total_pages)
}

/// Distinct categories for the filter dropdown
pub fn categories(items: &[Item]) -> Vec<String> {
    distinct(items.iter().filter_map(|i| i.category.as_deref()))
}

/// Distinct faculties for the filter dropdown
pub fn faculties(items: &[Item]) -> Vec<String> {
    distinct(items.iter().filter_map(|i| i.faculty.as_deref()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Filter plus current page. Changing the filter always returns to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    filter: ListingFilter,
    page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self { filter: ListingFilter::default(), page: 1 }
    }
}

impl BrowseState {
    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn update_filter(&mut self, f: impl FnOnce(&mut ListingFilter)) {
        f(&mut self.filter);
        self.page = 1;
    }

    pub fn reset_filter(&mut self) {
        self.update_filter(|filter| *filter = ListingFilter::default());
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn view(&self, items: &[Item]) -> ListingPage {
        apply(items, &self.filter, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, price: Option<f64>) -> Item {
        Item {
            object_id: Some(id.to_string()),
            title: format!("Item {}", id),
            price,
            ..Item::default()
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::id).collect()
    }

    #[test]
    fn test_sort_price_low() {
        let mut items = vec![make_item("a", Some(300.0)), make_item("b", Some(100.0)), make_item("c", Some(200.0))];
        SortKey::parse("price-low").sort(&mut items);
        let prices: Vec<f64> = items.iter().map(Item::price_or_zero).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_sort_is_stable_and_coerces_missing_price() {
        let mut items = vec![
            make_item("a", Some(5.0)),
            make_item("b", None),
            make_item("c", Some(5.0)),
            make_item("d", Some(0.0)),
        ];
        SortKey::PriceLow.sort(&mut items);
        assert_eq!(ids(&items), vec!["b", "d", "a", "c"]);

        SortKey::PriceHigh.sort(&mut items);
        assert_eq!(ids(&items), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_sort_by_date() {
        let mut items = vec![make_item("old", None), make_item("new", None), make_item("bad", None)];
        items[0].created_at = Some("2023-01-01T00:00:00Z".to_string());
        items[1].created_at = Some("2024-06-01T00:00:00Z".to_string());
        items[2].created_at = Some("not a date".to_string());

        SortKey::Newest.sort(&mut items);
        assert_eq!(ids(&items), vec!["new", "old", "bad"]);
        SortKey::Oldest.sort(&mut items);
        assert_eq!(ids(&items), vec!["bad", "old", "new"]);
    }

    #[test]
    fn test_pagination() {
        let items: Vec<Item> = (0..25).map(|i| make_item(&i.to_string(), None)).collect();
        let filter = ListingFilter::default();

        let first = apply(&items, &filter, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 12);

        let last = apply(&items, &filter, 3);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.total_matches, 25);

        let clamped = apply(&items, &filter, 9);
        assert_eq!(clamped.page, 3);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let page = apply(&[], &ListingFilter::default(), 4);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_filters() {
        let mut lamp = make_item("lamp", Some(15.0));
        lamp.title = "Desk Lamp".to_string();
        lamp.category = Some("Furniture".to_string());
        lamp.faculty = Some("Engineering".to_string());
        lamp.condition = Some("LIKE-NEW".to_string());

        let mut book = make_item("book", Some(40.0));
        book.title = "Organic Chemistry".to_string();
        book.description = Some("barely used, no highlights".to_string());
        book.category = Some("Books".to_string());
        book.condition = Some("good".to_string());

        let items = vec![lamp, book];
        let run = |filter: ListingFilter| ids(&apply(&items, &filter, 1).items).join(",");

        assert_eq!(run(ListingFilter { search: "LAMP".into(), ..Default::default() }), "lamp");
        assert_eq!(run(ListingFilter { search: "highlights".into(), ..Default::default() }), "book");
        assert_eq!(run(ListingFilter { category: Some("books".into()), ..Default::default() }), "book");
        assert_eq!(run(ListingFilter { category: Some("All".into()), sort: SortKey::PriceLow, ..Default::default() }), "lamp,book");
        assert_eq!(run(ListingFilter { faculty: Some("engineering".into()), ..Default::default() }), "lamp");
        assert_eq!(run(ListingFilter { condition: Condition::parse("like_new"), ..Default::default() }), "lamp");
        assert_eq!(run(ListingFilter { min_price: Some(20.0), ..Default::default() }), "book");
        assert_eq!(run(ListingFilter { max_price: Some(15.0), ..Default::default() }), "lamp");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = BrowseState::default();
        state.set_page(3);
        assert_eq!(state.page(), 3);

        state.update_filter(|f| f.search = "lamp".to_string());
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.update_filter(|f| f.sort = SortKey::PriceHigh);
        assert_eq!(state.page(), 1);
        assert!(!state.filter().is_empty());

        state.set_page(2);
        state.reset_filter();
        assert_eq!(state.page(), 1);
        assert!(state.filter().is_empty());
    }

    #[test]
    fn test_sort_only_filter_counts_as_empty() {
        let mut state = BrowseState::default();
        state.update_filter(|f| f.sort = SortKey::Oldest);
        assert!(state.filter().is_empty());
        assert_ne!(state.filter(), &ListingFilter::default());
    }

    #[test]
    fn test_facets() {
        let mut a = make_item("a", None);
        a.category = Some(" Books ".to_string());
        let mut b = make_item("b", None);
        b.category = Some("Electronics".to_string());
        let mut c = make_item("c", None);
        c.category = Some("Books".to_string());
        assert_eq!(categories(&[a, b, c]), vec!["Books", "Electronics"]);
    }
}
