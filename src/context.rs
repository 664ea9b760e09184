//! Notification Context
//!
//! Cross-cutting notification state provided via Leptos Context API:
//! unread counters for both notification centers and click handling.

use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::{resolve_link, Audience, Notification};

use crate::api::NotificationApi;
use crate::router::Router;

#[derive(Clone, Copy)]
pub struct NotificationContext {
    /// Unread notifications for the signed-in user - read
    pub unread: ReadSignal<u32>,
    set_unread: WriteSignal<u32>,
    /// Unread admin notifications - read
    pub admin_unread: ReadSignal<u32>,
    set_admin_unread: WriteSignal<u32>,
    router: Router,
}

impl NotificationContext {
    pub fn new(router: Router) -> Self {
        let (unread, set_unread) = signal(0u32);
        let (admin_unread, set_admin_unread) = signal(0u32);
        Self { unread, set_unread, admin_unread, set_admin_unread, router }
    }

    pub fn unread_for(&self, audience: Audience) -> ReadSignal<u32> {
        match audience {
            Audience::User => self.unread,
            Audience::Admin => self.admin_unread,
        }
    }

    fn setter(&self, audience: Audience) -> WriteSignal<u32> {
        match audience {
            Audience::User => self.set_unread,
            Audience::Admin => self.set_admin_unread,
        }
    }

    pub fn set_unread(&self, audience: Audience, count: u32) {
        self.setter(audience).set(count);
    }

    /// Fetch the unread count from the backend
    pub fn refresh_unread(&self, audience: Audience) {
        let set = self.setter(audience);
        spawn_local(async move {
            match NotificationApi::new(audience).unread_count().await {
                Ok(count) => {
                    set.try_set(count);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[Notifications] Unread count for {:?} failed: {}", audience, e).into());
                }
            }
        });
    }

    /// Mark as read (fire-and-forget) and navigate to the resolved route.
    /// A failed mark-as-read is logged and never blocks navigation.
    pub fn handle_click(&self, notification: &Notification, audience: Audience) {
        if !notification.is_read() && !notification.id().is_empty() {
            self.setter(audience).update(|n| *n = n.saturating_sub(1));
            let id = notification.id().to_string();
            spawn_local(async move {
                if let Err(e) = NotificationApi::new(audience).mark_read(&id).await {
                    web_sys::console::warn_1(&format!("[Notifications] Mark {} as read failed: {}", id, e).into());
                }
            });
        }
        let target = resolve_link(notification, audience);
        self.router.navigate(&target);
    }
}

pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}
