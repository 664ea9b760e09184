//! Notification Pages
//!
//! User and admin notification centers. The admin page requires an admin
//! token in local storage.

use leptos::prelude::*;

use market_core::Audience;

use crate::components::NotificationCenter;
use crate::session;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let signed_in = session::user_token().is_some();
    view! {
        <div class="notifications-page">
            <h1>"Notifications"</h1>
            {if signed_in {
                view! { <NotificationCenter audience=Audience::User /> }.into_any()
            } else {
                view! { <div class="auth-required">"Sign in to see your notifications."</div> }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn AdminNotificationsPage() -> impl IntoView {
    let is_admin = session::is_admin();
    view! {
        <div class="notifications-page admin">
            <h1>"Admin Notifications"</h1>
            {if is_admin {
                view! { <NotificationCenter audience=Audience::Admin /> }.into_any()
            } else {
                view! { <div class="auth-required">"Admin sign-in required."</div> }.into_any()
            }}
        </div>
    }
}
