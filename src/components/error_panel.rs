//! Error, Loading and Empty States

use leptos::prelude::*;

use crate::api::ApiError;

/// Generic error panel with a manual retry button
#[component]
pub fn ErrorPanel(error: ApiError, on_retry: Callback<()>) -> impl IntoView {
    let detail = error.to_string();
    view! {
        <div class="error-panel" role="alert">
            <p class="error-message">{error.user_message()}</p>
            <p class="error-detail">{detail}</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

#[component]
pub fn LoadingIndicator(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! { <div class="loading">{label.unwrap_or_else(|| "Loading...".to_string())}</div> }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}
