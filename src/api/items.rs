//! Item Endpoints

use market_core::wire::{ItemPage, ItemQuery};
use market_core::Item;

use super::{segment, ApiClient, ApiError};

/// `GET /items`
pub async fn list_items(client: &ApiClient, query: &ItemQuery) -> Result<ItemPage, ApiError> {
    client.get("items", &query.to_params()).await
}

/// `GET /items` for `query`, then the following server pages until the
/// backend reports no more or `max_pages` pages are held. A failed
/// follow-up request keeps what was already fetched.
pub async fn list_all_items(
    client: &ApiClient,
    query: &ItemQuery,
    max_pages: usize,
) -> Result<ItemPage, ApiError> {
    let mut page = query.page.unwrap_or(1);
    let mut all = list_items(client, query).await?;
    let mut fetched_pages = 1;

    while fetched_pages < max_pages {
        let Some(next) = all.next_page(page) else {
            break;
        };
        let batch = match list_items(client, &query.at_page(next)).await {
            Ok(batch) => batch,
            Err(e) => {
                web_sys::console::warn_1(&format!("[Items] Page {} failed: {}", next, e).into());
                break;
            }
        };
        if all.absorb(batch) == 0 {
            break;
        }
        page = next;
        fetched_pages += 1;
    }
    Ok(all)
}

/// `GET /items/:id`. An empty payload counts as not found.
pub async fn get_item(client: &ApiClient, id: &str) -> Result<Item, ApiError> {
    let item: Item = client.get(&format!("items/{}", segment(id)), &[]).await?;
    if item.id().is_empty() && item.title.is_empty() {
        return Err(ApiError::Status { status: 404, message: "Item not found".to_string() });
    }
    Ok(item)
}
