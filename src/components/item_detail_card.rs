//! Item Detail Card Component

use leptos::prelude::*;

use market_core::{format_price, Item, Route};

use crate::components::ItemImage;
use crate::router::Link;

#[component]
pub fn ItemDetailCard(item: Item) -> impl IntoView {
    let image = item.primary_image().map(str::to_string);
    let gallery: Vec<String> = item.images.iter().skip(1).cloned().collect();
    let condition = item
        .normalized_condition()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Not specified".to_string());
    let seller_name = item
        .seller
        .as_ref()
        .and_then(|s| s.name.clone())
        .unwrap_or_else(|| "Campus seller".to_string());
    let chat_href = Route::Chat(item.id().to_string()).to_string();
    let sold = item.is_sold();

    view! {
        <article class="item-detail-card">
            <div class="item-detail-media">
                <ItemImage class="item-detail-image" src=image alt=item.title.clone() />
                <div class="item-detail-gallery">
                    {gallery.into_iter().map(|src| view! { <img src=src alt="" loading="lazy" /> }).collect_view()}
                </div>
            </div>
            <div class="item-detail-info">
                <h1>{item.title.clone()}</h1>
                <div class="item-detail-price">{format_price(item.price)}</div>
                <dl class="item-detail-facts">
                    <dt>"Condition"</dt>
                    <dd>{condition}</dd>
                    <dt>"Category"</dt>
                    <dd>{item.category.clone().unwrap_or_else(|| "Uncategorized".to_string())}</dd>
                    <dt>"Faculty"</dt>
                    <dd>{item.faculty.clone().unwrap_or_else(|| "Any".to_string())}</dd>
                    <dt>"Listed"</dt>
                    <dd>{item.listed_on().unwrap_or_else(|| "Unknown".to_string())}</dd>
                    <dt>"Seller"</dt>
                    <dd>{seller_name}</dd>
                </dl>
                <p class="item-detail-description">
                    {item.description.clone().unwrap_or_else(|| "No description provided.".to_string())}
                </p>
                {if sold {
                    view! { <span class="sold-badge">"This item has been sold"</span> }.into_any()
                } else {
                    view! { <Link href=chat_href class="contact-btn">"Message seller"</Link> }.into_any()
                }}
            </div>
        </article>
    }
}
