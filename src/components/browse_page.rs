//! Browse Page
//!
//! Fetches items for the current filter, then filters, sorts and paginates
//! them client-side. Responses to superseded requests are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::listing::{categories, faculties};
use market_core::{BrowseState, Item, ItemQuery};

use crate::api::{self, ApiClient, ApiError};
use crate::components::{EmptyState, ErrorPanel, FilterBar, ItemCard, LoadingIndicator, Pagination};
use crate::config::{CATEGORIES, FETCH_LIMIT, MAX_FETCH_PAGES};

/// Known categories merged with those present in the data
fn category_options(items: &[Item]) -> Vec<String> {
    let mut options: Vec<String> = CATEGORIES.iter().map(|c| c.to_string()).collect();
    for category in categories(items) {
        if !options.iter().any(|o| o.eq_ignore_ascii_case(&category)) {
            options.push(category);
        }
    }
    options
}

/// Shown when the backend holds more listings than were fetched
fn truncation_note(fetched: usize, missing: usize) -> Option<String> {
    (missing > 0).then(|| {
        format!(
            "Showing the first {} of {} listings. Narrow your search to see the rest.",
            fetched,
            fetched + missing
        )
    })
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let (state, set_state) = signal(BrowseState::default());
    let (items, set_items) = signal(Vec::<Item>::new());
    let (missing, set_missing) = signal(0usize);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);
    let (reload, set_reload) = signal(0u32);
    let generation = StoredValue::new(0u64);

    // Refetch only when the filter changes; paging is purely local
    let filter = Memo::new(move |_| state.with(|s| s.filter().clone()));

    Effect::new(move |_| {
        let _ = reload.get();
        let query = ItemQuery::from_filter(&filter.get(), 1, FETCH_LIMIT);
        generation.update_value(|g| *g += 1);
        let this_request = generation.get_value();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::list_all_items(&ApiClient::user(), &query, MAX_FETCH_PAGES).await;
            if generation.try_get_value() != Some(this_request) {
                return;
            }
            match result {
                Ok(page) => {
                    web_sys::console::log_1(&format!("[Browse] Loaded {} items", page.items.len()).into());
                    if page.missing() > 0 {
                        web_sys::console::warn_1(&format!("[Browse] {} listings not fetched", page.missing()).into());
                    }
                    set_missing.try_set(page.missing());
                    set_items.try_set(page.items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Browse] Load failed: {}", e).into());
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    let listing = Memo::new(move |_| state.with(|s| items.with(|items| s.view(items))));
    let category_list = Signal::derive(move || items.with(|items| category_options(items)));
    let faculty_list = Signal::derive(move || items.with(|items| faculties(items)));

    let page = Signal::derive(move || listing.with(|l| l.page));
    let total_pages = Signal::derive(move || listing.with(|l| l.total_pages));
    let on_page = Callback::new(move |p: usize| set_state.update(|s| s.set_page(p)));
    let on_retry = Callback::new(move |_: ()| set_reload.update(|n| *n += 1));

    view! {
        <div class="browse-page">
            <FilterBar
                state=state
                set_state=set_state
                categories=category_list
                faculties=faculty_list
            />

            <p class="result-count">
                {move || listing.with(|l| match l.total_matches {
                    1 => "1 item".to_string(),
                    n => format!("{} items", n),
                })}
            </p>
            {move || truncation_note(items.with(Vec::len), missing.get())
                .map(|note| view! { <p class="truncation-note">{note}</p> })}

            {move || {
                if let Some(e) = error.get() {
                    return view! { <ErrorPanel error=e on_retry=on_retry /> }.into_any();
                }
                if loading.get() && items.with(Vec::is_empty) {
                    return view! { <LoadingIndicator label="Loading items..." /> }.into_any();
                }
                let current = listing.get();
                if current.items.is_empty() {
                    let message = if state.with(|s| s.filter().is_empty()) {
                        "No items listed yet"
                    } else {
                        "No items match your filters"
                    };
                    return view! { <EmptyState message=message /> }.into_any();
                }
                view! {
                    <div class="item-grid">
                        <For
                            each=move || current.items.clone()
                            key=|item| item.id().to_string()
                            children=|item| view! { <ItemCard item=item /> }
                        />
                    </div>
                }.into_any()
            }}

            <Pagination page=page total_pages=total_pages on_change=on_page />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_merge() {
        let mut odd = Item::default();
        odd.category = Some("Musical Instruments".to_string());
        let mut known = Item::default();
        known.category = Some("books".to_string());

        let options = category_options(&[odd, known]);
        assert_eq!(options.len(), CATEGORIES.len() + 1);
        assert_eq!(options.last().map(String::as_str), Some("Musical Instruments"));
    }

    #[test]
    fn test_truncation_note() {
        assert_eq!(truncation_note(120, 0), None);
        assert_eq!(
            truncation_note(2000, 350).as_deref(),
            Some("Showing the first 2000 of 2350 listings. Narrow your search to see the rest.")
        );
    }
}
