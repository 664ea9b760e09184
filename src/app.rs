//! Campus Market App
//!
//! Header plus the page for the current route.

use leptos::prelude::*;

use market_core::Route;

use crate::components::{
    AdminNotificationsPage, BrowsePage, Header, ItemDetailPage, NotificationsPage, PlaceholderPage,
};
use crate::context::NotificationContext;
use crate::router::Router;

#[component]
pub fn App() -> impl IntoView {
    let router = Router::new();
    provide_context(router);
    provide_context(NotificationContext::new(router));

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match router.route.get() {
                    Route::Browse => view! { <BrowsePage /> }.into_any(),
                    Route::Item(id) => view! { <ItemDetailPage id=id /> }.into_any(),
                    Route::Notifications => view! { <NotificationsPage /> }.into_any(),
                    Route::AdminNotifications | Route::AdminDashboard => view! { <AdminNotificationsPage /> }.into_any(),
                    other => view! { <PlaceholderPage route=other /> }.into_any(),
                }}
            </main>
        </div>
    }
}
