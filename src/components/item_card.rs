//! Item Card Component
//!
//! Compact listing tile used by the browse grid.

use leptos::prelude::*;

use market_core::{format_price, Item, Route};

use crate::router::Link;

/// Letter shown in the image slot of listings without a picture
fn placeholder_initial(title: &str) -> String {
    title
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Listing picture, or a lettered block when the item has none
#[component]
pub fn ItemImage(
    src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    match src {
        Some(src) => view! { <img class=class src=src alt=alt loading="lazy" /> }.into_any(),
        None => {
            let initial = placeholder_initial(&alt);
            let class = format!("{} image-placeholder", class).trim_start().to_string();
            view! {
                <div class=class role="img" aria-label=alt>
                    {initial}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let href = Route::Item(item.id().to_string()).to_string();
    let image = item.primary_image().map(str::to_string);
    let condition = item.normalized_condition().map(|c| c.to_string());
    let sold = item.is_sold();
    let meta = [item.category.clone(), item.faculty.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <Link href=href class="item-card">
            <div class="item-card-image">
                <ItemImage src=image alt=item.title.clone() />
                <Show when=move || sold>
                    <span class="sold-badge">"Sold"</span>
                </Show>
            </div>
            <div class="item-card-body">
                <div class="item-card-title" title=item.title.clone()>{item.title.clone()}</div>
                <div class="item-card-price">{format_price(item.price)}</div>
                <div class="item-card-meta">
                    {condition.map(|c| view! { <span class="condition-badge">{c}</span> })}
                    <span class="item-card-tags">{meta}</span>
                </div>
            </div>
        </Link>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_initial() {
        assert_eq!(placeholder_initial("desk lamp"), "D");
        assert_eq!(placeholder_initial("  #2 pencils"), "2");
        assert_eq!(placeholder_initial(""), "?");
    }
}
