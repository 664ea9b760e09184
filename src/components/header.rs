//! Site Header Component

use leptos::prelude::*;

use market_core::{Audience, Route};

use crate::components::NotificationBell;
use crate::router::{use_router, Link};
use crate::session;

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let signed_in = session::user_token().is_some();
    let is_admin = session::is_admin();
    let user_name = session::current_user().and_then(|u| u.name);

    let current = move |target: Route| Signal::derive(move || router.route.get() == target);
    let in_admin = Signal::derive(move || router.route.with(Route::is_admin));

    view! {
        <header class="site-header">
            <Link href=Route::Browse.to_string() class="brand">"Campus Market"</Link>
            <nav class="site-nav">
                <Link href=Route::Browse.to_string() class="nav-link" active=current(Route::Browse)>"Browse"</Link>
                <Link href=Route::Orders.to_string() class="nav-link" active=current(Route::Orders)>"Orders"</Link>
                <Link href=Route::Chats.to_string() class="nav-link" active=current(Route::Chats)>"Messages"</Link>
                {is_admin.then(|| view! {
                    <Link href=Route::AdminNotifications.to_string() class="nav-link" active=in_admin>"Admin"</Link>
                })}
            </nav>
            <div class="header-actions">
                {signed_in.then(|| view! { <NotificationBell audience=Audience::User /> })}
                {is_admin.then(|| view! { <NotificationBell audience=Audience::Admin /> })}
                {user_name.map(|name| view! { <span class="user-name">{name}</span> })}
            </div>
        </header>
    }
}
