//! Filter Bar Component
//!
//! Search box plus category, faculty, condition, price range and sort
//! controls. Every change goes through `BrowseState::update_filter`, which
//! sends the listing back to page 1.

use leptos::prelude::*;

use market_core::{BrowseState, Condition, ListingFilter, SortKey};

/// Blank or "All" clears a dropdown filter
fn selection(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && !value.eq_ignore_ascii_case("all")).then(|| value.to_string())
}

/// Blank clears a price bound; invalid or negative input is ignored
fn price_bound(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}

#[component]
pub fn FilterBar(
    state: ReadSignal<BrowseState>,
    set_state: WriteSignal<BrowseState>,
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] faculties: Signal<Vec<String>>,
) -> impl IntoView {
    let (draft, set_draft) = signal(state.get_untracked().filter().search.clone());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term = draft.get();
        set_state.update(|s| s.update_filter(|f| f.search = term));
    };

    let selected = move |pick: fn(&ListingFilter) -> Option<String>| {
        move || state.with(|s| pick(s.filter())).unwrap_or_default()
    };

    view! {
        <div class="filter-bar">
            <form class="search-form" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search textbooks, furniture, electronics..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>

            <div class="filter-controls">
                <select
                    prop:value=selected(|f| f.category.clone())
                    on:change=move |ev| {
                        let value = selection(event_target_value(&ev));
                        set_state.update(|s| s.update_filter(|f| f.category = value));
                    }
                >
                    <option value="">"All categories"</option>
                    {move || categories.get().into_iter().map(|c| view! { <option value=c.clone()>{c.clone()}</option> }).collect_view()}
                </select>

                <select
                    prop:value=selected(|f| f.faculty.clone())
                    on:change=move |ev| {
                        let value = selection(event_target_value(&ev));
                        set_state.update(|s| s.update_filter(|f| f.faculty = value));
                    }
                >
                    <option value="">"All faculties"</option>
                    {move || faculties.get().into_iter().map(|c| view! { <option value=c.clone()>{c.clone()}</option> }).collect_view()}
                </select>

                <select
                    prop:value=selected(|f| f.condition.as_ref().map(|c| c.label().to_string()))
                    on:change=move |ev| {
                        let value = Condition::parse(&event_target_value(&ev));
                        set_state.update(|s| s.update_filter(|f| f.condition = value));
                    }
                >
                    <option value="">"Any condition"</option>
                    {Condition::KNOWN.iter().map(|c| {
                        let label = c.label().to_string();
                        view! { <option value=label.clone()>{label.clone()}</option> }
                    }).collect_view()}
                </select>

                <input
                    type="number"
                    min="0"
                    placeholder="Min price"
                    class="price-input"
                    prop:value=move || state.with(|s| s.filter().min_price.map(|p| p.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let value = price_bound(&event_target_value(&ev));
                        set_state.update(|s| s.update_filter(|f| f.min_price = value));
                    }
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Max price"
                    class="price-input"
                    prop:value=move || state.with(|s| s.filter().max_price.map(|p| p.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let value = price_bound(&event_target_value(&ev));
                        set_state.update(|s| s.update_filter(|f| f.max_price = value));
                    }
                />

                <select
                    prop:value=move || state.with(|s| s.filter().sort.as_str())
                    on:change=move |ev| {
                        let sort = SortKey::parse(&event_target_value(&ev));
                        set_state.update(|s| s.update_filter(|f| f.sort = sort));
                    }
                >
                    {SortKey::ALL.iter().map(|k| view! { <option value=k.as_str()>{k.label()}</option> }).collect_view()}
                </select>

                <button
                    type="button"
                    class="clear-filters-btn"
                    disabled=move || state.with(|s| s.filter().is_empty())
                    on:click=move |_| {
                        set_draft.set(String::new());
                        set_state.update(BrowseState::reset_filter);
                    }
                >
                    "Clear filters"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection() {
        assert_eq!(selection("Books".to_string()), Some("Books".to_string()));
        assert_eq!(selection("All".to_string()), None);
        assert_eq!(selection("  ".to_string()), None);
    }

    #[test]
    fn test_price_bound() {
        assert_eq!(price_bound("12.5"), Some(12.5));
        assert_eq!(price_bound(""), None);
        assert_eq!(price_bound("-3"), None);
        assert_eq!(price_bound("abc"), None);
    }
}
