//! Notification Link Resolution
//!
//! Maps a notification to the route a click should open. Stored links are
//! preferred after repairing the malformed shapes older backend versions
//! wrote; otherwise the route is derived from `action`, then `type`, then a
//! per-audience default.

use crate::notification::{Action, Notification, NotificationKind};
use crate::route::Route;

/// Which notification center the click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    User,
    Admin,
}

impl Audience {
    fn fallback(self) -> Route {
        match self {
            Audience::User => Route::Notifications,
            Audience::Admin => Route::AdminNotifications,
        }
    }
}

/// Route for a notification click
pub fn resolve_link(notification: &Notification, audience: Audience) -> String {
    if let Some(link) = notification.link.as_deref().and_then(repair_link) {
        return link;
    }
    if let Some(route) = notification.action().and_then(|a| route_for_action(notification, &a, audience)) {
        return route.to_string();
    }
    if let Some(route) = notification.kind().and_then(|k| route_for_kind(notification, &k, audience)) {
        return route.to_string();
    }
    audience.fallback().to_string()
}

/// Rewrite known malformed link shapes. Returns `None` for anything that is
/// not an in-app path.
pub fn repair_link(link: &str) -> Option<String> {
    let link = link.trim();
    if !link.starts_with('/') || link.starts_with("//") {
        return None;
    }

    let (path, query) = match link.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (link, None),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let repaired = match segments.as_slice() {
        ["items" | "product" | "products", id] => Some(Route::Item(id.to_string())),
        ["chats", id] => Some(Route::Chat(id.to_string())),
        ["chats"] => query_param(query, "itemId").map(Route::Chat),
        ["orders"] => query_param(query, "orderId").map(Route::Order),
        _ => None,
    };
    Some(repaired.map_or_else(|| link.to_string(), |route| route.to_string()))
}

fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, v)| *k == key && !v.is_empty())
        .map(|(_, v)| v.to_string())
}

fn item_route(n: &Notification) -> Route {
    n.item_id().map_or(Route::Browse, |id| Route::Item(id.to_string()))
}

fn order_route(n: &Notification) -> Route {
    n.order_id().map_or(Route::Orders, |id| Route::Order(id.to_string()))
}

fn chat_route(n: &Notification) -> Route {
    n.chat_id().map_or(Route::Chats, |id| Route::Chat(id.to_string()))
}

fn route_for_action(n: &Notification, action: &Action, audience: Audience) -> Option<Route> {
    let route = match (action, audience) {
        (Action::ViewItem, _) => item_route(n),
        (Action::ViewOrder, _) => order_route(n),
        (Action::OpenChat, _) => chat_route(n),
        (Action::ViewProfile, _) => Route::Profile,
        (Action::ViewReviews, _) => Route::ProfileReviews,
        (Action::ReviewReport, Audience::Admin) => Route::AdminReports,
        (Action::ReviewItem, Audience::Admin) => Route::AdminItems,
        (Action::ViewUser, Audience::Admin) => Route::AdminUsers,
        _ => return None,
    };
    Some(route)
}

fn route_for_kind(n: &Notification, kind: &NotificationKind, audience: Audience) -> Option<Route> {
    let route = match (kind, audience) {
        (NotificationKind::Message, _) => chat_route(n),
        (NotificationKind::Order, _) => order_route(n),
        (NotificationKind::Item, _) => item_route(n),
        (NotificationKind::Review, _) => Route::ProfileReviews,
        (NotificationKind::Report, Audience::Admin) => Route::AdminReports,
        (NotificationKind::NewUser, Audience::Admin) => Route::AdminUsers,
        (NotificationKind::ItemFlagged, Audience::Admin) => Route::AdminItems,
        _ => return None,
    };
    Some(route)
}
