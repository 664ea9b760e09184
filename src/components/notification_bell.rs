//! Notification Bell Component
//!
//! Header badge with the unread count, refreshed on a fixed interval, and a
//! dropdown previewing the latest notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::{Audience, Notification, Route};

use crate::api::NotificationApi;
use crate::components::NotificationRow;
use crate::config::{BELL_PREVIEW, POLL_INTERVAL_MS};
use crate::context::use_notifications;
use crate::router::use_router;

/// Badge text; large counts are capped
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

#[component]
pub fn NotificationBell(audience: Audience) -> impl IntoView {
    let ctx = use_notifications();
    let router = use_router();
    let unread = ctx.unread_for(audience);
    let (open, set_open) = signal(false);
    let (preview, set_preview) = signal(Vec::<Notification>::new());
    let (loading, set_loading) = signal(false);

    // Initial count, then poll until the bell is torn down.
    // A disposed flag reads as `None`, which also ends the loop.
    ctx.refresh_unread(audience);
    let polling = StoredValue::new(true);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
            if polling.try_get_value() != Some(true) {
                break;
            }
            ctx.refresh_unread(audience);
        }
    });
    on_cleanup(move || {
        let _ = polling.try_update_value(|p| *p = false);
    });

    let toggle = move |_| {
        let now_open = !open.get();
        set_open.set(now_open);
        if !now_open {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match NotificationApi::new(audience).list().await {
                Ok(mut list) => {
                    list.truncate(BELL_PREVIEW);
                    set_preview.try_set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Bell] Preview failed: {}", e).into());
                    set_preview.try_set(Vec::new());
                }
            }
            set_loading.try_set(false);
        });
    };

    let on_open = Callback::new(move |n: Notification| {
        set_open.set(false);
        ctx.handle_click(&n, audience);
    });

    let mark_all = move |_| {
        spawn_local(async move {
            match NotificationApi::new(audience).mark_all_read().await {
                Ok(()) => {
                    ctx.set_unread(audience, 0);
                    set_preview.try_update(|list| list.iter_mut().for_each(Notification::mark_read));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Bell] Mark all read failed: {}", e).into());
                }
            }
        });
    };

    let view_all = move |_| {
        set_open.set(false);
        let route = match audience {
            Audience::User => Route::Notifications,
            Audience::Admin => Route::AdminNotifications,
        };
        router.navigate(&route.to_string());
    };

    let bell_class = match audience {
        Audience::User => "notification-bell",
        Audience::Admin => "notification-bell admin",
    };

    view! {
        <div class=bell_class>
            <button class="bell-btn" title="Notifications" on:click=toggle>
                "🔔"
                {move || badge_label(unread.get()).map(|label| view! { <span class="bell-badge">{label}</span> })}
            </button>
            <Show when=move || open.get()>
                <div class="bell-dropdown">
                    <div class="bell-dropdown-header">
                        <span>"Notifications"</span>
                        <button class="link-btn" on:click=mark_all>"Mark all read"</button>
                    </div>
                    {move || {
                        if loading.get() {
                            return view! { <div class="loading">"Loading..."</div> }.into_any();
                        }
                        let list = preview.get();
                        if list.is_empty() {
                            return view! { <div class="empty-state">"No notifications"</div> }.into_any();
                        }
                        view! {
                            <ul class="notification-list compact">
                                {list.into_iter().map(|n| view! { <NotificationRow notification=n on_open=on_open /> }).collect_view()}
                            </ul>
                        }.into_any()
                    }}
                    <button class="bell-view-all" on:click=view_all>"View all"</button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(250).as_deref(), Some("99+"));
    }
}
