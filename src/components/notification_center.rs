//! Notification Center Component
//!
//! Full notification list shared by the user and admin pages: all/unread
//! tabs, mark-all-as-read, and click-to-navigate rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::time::time_ago;
use market_core::{Audience, Notification, NotificationKind};

use crate::api::{ApiError, NotificationApi};
use crate::components::{EmptyState, ErrorPanel, LoadingIndicator};
use crate::context::use_notifications;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    All,
    Unread,
}

/// One clickable notification line
#[component]
pub fn NotificationRow(notification: Notification, on_open: Callback<Notification>) -> impl IntoView {
    let kind_icon = notification
        .kind()
        .unwrap_or(NotificationKind::System)
        .icon();
    let when = notification
        .created_at
        .as_deref()
        .and_then(|raw| time_ago(raw, js_sys::Date::now() as i64))
        .unwrap_or_default();
    let unread = !notification.is_read();
    let title = notification.title.clone();
    let message = notification.message.clone();

    view! {
        <li
            class="notification-row"
            class:unread=unread
            on:click=move |_| on_open.run(notification.clone())
        >
            <span class="notification-icon">{kind_icon}</span>
            <div class="notification-body">
                <div class="notification-title">{title}</div>
                <div class="notification-message">{message}</div>
            </div>
            <span class="notification-time">{when}</span>
        </li>
    }
}

#[component]
pub fn NotificationCenter(audience: Audience) -> impl IntoView {
    let ctx = use_notifications();
    let (notifications, set_notifications) = signal(Vec::<Notification>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);
    let (reload, set_reload) = signal(0u32);
    let (tab, set_tab) = signal(Tab::All);
    let (action_error, set_action_error) = signal(None::<String>);

    Effect::new(move |_| {
        let _ = reload.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match NotificationApi::new(audience).list().await {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[Notifications] Loaded {} for {:?}", list.len(), audience).into());
                    let unread = list.iter().filter(|n| !n.is_read()).count() as u32;
                    if set_notifications.try_set(list).is_none() {
                        ctx.set_unread(audience, unread);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Notifications] Load failed: {}", e).into());
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    let visible = move || {
        let tab = tab.get();
        notifications
            .get()
            .into_iter()
            .filter(|n| tab == Tab::All || !n.is_read())
            .collect::<Vec<_>>()
    };
    let unread_count = move || notifications.with(|list| list.iter().filter(|n| !n.is_read()).count());

    let on_open = Callback::new(move |n: Notification| {
        set_notifications.update(|list| {
            if let Some(entry) = list.iter_mut().find(|entry| entry.id() == n.id()) {
                entry.mark_read();
            }
        });
        ctx.handle_click(&n, audience);
    });

    let mark_all = move |_| {
        set_action_error.set(None);
        spawn_local(async move {
            match NotificationApi::new(audience).mark_all_read().await {
                Ok(()) => {
                    set_notifications.try_update(|list| list.iter_mut().for_each(Notification::mark_read));
                    ctx.set_unread(audience, 0);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Notifications] Mark all read failed: {}", e).into());
                    set_action_error.try_set(Some(e.user_message()));
                }
            }
        });
    };

    let on_retry = Callback::new(move |_: ()| set_reload.update(|n| *n += 1));

    view! {
        <section class="notification-center">
            <header class="notification-center-header">
                <div class="notification-tabs">
                    <button
                        class=move || if tab.get() == Tab::All { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(Tab::All)
                    >
                        "All"
                    </button>
                    <button
                        class=move || if tab.get() == Tab::Unread { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(Tab::Unread)
                    >
                        {move || format!("Unread ({})", unread_count())}
                    </button>
                </div>
                <button
                    class="mark-all-btn"
                    disabled=move || unread_count() == 0
                    on:click=mark_all
                >
                    "Mark all as read"
                </button>
            </header>

            {move || action_error.get().map(|msg| view! { <p class="inline-error">{msg}</p> })}

            {move || {
                if let Some(e) = error.get() {
                    return view! { <ErrorPanel error=e on_retry=on_retry /> }.into_any();
                }
                if loading.get() && notifications.with(Vec::is_empty) {
                    return view! { <LoadingIndicator /> }.into_any();
                }
                let list = visible();
                if list.is_empty() {
                    let message = match tab.get() {
                        Tab::All => "No notifications yet",
                        Tab::Unread => "You're all caught up",
                    };
                    return view! { <EmptyState message=message /> }.into_any();
                }
                view! {
                    <ul class="notification-list">
                        <For
                            each=move || list.clone()
                            key=|n| (n.id().to_string(), n.is_read())
                            children=move |n| view! { <NotificationRow notification=n on_open=on_open /> }
                        />
                    </ul>
                }.into_any()
            }}
        </section>
    }
}
