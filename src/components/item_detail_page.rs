//! Item Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::{Item, Route};

use crate::api::{self, ApiClient, ApiError};
use crate::components::{ErrorPanel, ItemDetailCard, LoadingIndicator};
use crate::router::Link;

#[component]
pub fn ItemDetailPage(id: String) -> impl IntoView {
    let (item, set_item) = signal(None::<Item>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let id = id.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_item(&ApiClient::user(), &id).await {
                Ok(found) => {
                    web_sys::console::log_1(&format!("[Item] Loaded {}", found.id()).into());
                    set_item.try_set(Some(found));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Item] Load {} failed: {}", id, e).into());
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_retry = Callback::new(move |_: ()| set_reload.update(|n| *n += 1));

    view! {
        <div class="item-detail-page">
            <Link href=Route::Browse.to_string() class="back-link">"‹ Back to listings"</Link>
            {move || {
                if let Some(e) = error.get() {
                    return view! { <ErrorPanel error=e on_retry=on_retry /> }.into_any();
                }
                match item.get() {
                    Some(found) => view! { <ItemDetailCard item=found /> }.into_any(),
                    None if loading.get() => view! { <LoadingIndicator /> }.into_any(),
                    None => view! { <div></div> }.into_any(),
                }
            }}
        </div>
    }
}
