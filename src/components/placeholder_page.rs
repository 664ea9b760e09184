//! Placeholder Page
//!
//! Chat, order, profile and admin moderation screens are served elsewhere;
//! notification links still land here so the route is visible.

use leptos::prelude::*;

use market_core::Route;

use crate::router::Link;

#[component]
pub fn PlaceholderPage(route: Route) -> impl IntoView {
    let heading = route.title();
    let path = route.to_string();
    let body = match route {
        Route::NotFound(_) => "This page doesn't exist.",
        _ => "This section isn't available in the web app yet.",
    };
    view! {
        <div class="placeholder-page">
            <h1>{heading}</h1>
            <p>{body}</p>
            <code class="placeholder-path">{path}</code>
            <Link href=Route::Browse.to_string() class="back-link">"Back to listings"</Link>
        </div>
    }
}
