//! Notification Model
//!
//! User- and admin-directed event records. `type` and `action` are free
//! strings on the wire and are parsed into enums with an `Other` fallback.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Document id (`_id`); preferred over `id` when both are sent
    #[serde(rename = "_id", default, deserialize_with = "lenient::opt_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(rename = "id", default, deserialize_with = "lenient::opt_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::opt_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "opt_action_data")]
    pub action_data: Option<ActionData>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub related_item: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub related_order: Option<String>,
    /// `read` wins over `isRead` when both are sent
    #[serde(default, deserialize_with = "lenient::opt_flag", skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(rename = "isRead", default, deserialize_with = "lenient::opt_flag", skip_serializing_if = "Option::is_none")]
    pub read_alias: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
}

/// Auxiliary ids attached to a notification's action
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub chat_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,
}

fn opt_action_data<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ActionData>, D::Error> {
    let value = Value::deserialize(d)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// What the notification asks the reader to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ViewItem,
    ViewOrder,
    OpenChat,
    ViewProfile,
    ViewReviews,
    /// Admin: moderate a user report
    ReviewReport,
    /// Admin: moderate a listing
    ReviewItem,
    /// Admin: inspect a user account
    ViewUser,
    Other(String),
}

impl Action {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "view_item" => Action::ViewItem,
            "view_order" => Action::ViewOrder,
            "open_chat" | "view_chat" | "reply" => Action::OpenChat,
            "view_profile" => Action::ViewProfile,
            "view_reviews" => Action::ViewReviews,
            "review_report" => Action::ReviewReport,
            "review_item" => Action::ReviewItem,
            "view_user" => Action::ViewUser,
            other => Action::Other(other.to_string()),
        }
    }
}

/// Event category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Message,
    Order,
    Item,
    Review,
    Report,
    NewUser,
    ItemFlagged,
    System,
    Other(String),
}

impl NotificationKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "message" | "chat" => NotificationKind::Message,
            "order" | "order_update" | "purchase" => NotificationKind::Order,
            "item" | "item_sold" | "item_interest" | "price_drop" => NotificationKind::Item,
            "review" => NotificationKind::Review,
            "report" => NotificationKind::Report,
            "new_user" => NotificationKind::NewUser,
            "item_flagged" => NotificationKind::ItemFlagged,
            "system" => NotificationKind::System,
            other => NotificationKind::Other(other.to_string()),
        }
    }

    /// Glyph shown next to the notification
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Message => "💬",
            NotificationKind::Order => "📦",
            NotificationKind::Item => "🏷️",
            NotificationKind::Review => "⭐",
            NotificationKind::Report => "🚩",
            NotificationKind::NewUser => "👤",
            NotificationKind::ItemFlagged => "⚠️",
            NotificationKind::System | NotificationKind::Other(_) => "🔔",
        }
    }
}

impl Notification {
    /// Record id; empty when the backend sent none
    pub fn id(&self) -> &str {
        self.object_id
            .as_deref()
            .or(self.record_id.as_deref())
            .unwrap_or_default()
    }

    pub fn is_read(&self) -> bool {
        self.read.or(self.read_alias).unwrap_or(false)
    }

    pub fn mark_read(&mut self) {
        self.read = Some(true);
    }

    pub fn action(&self) -> Option<Action> {
        self.action.as_deref().map(Action::parse)
    }

    pub fn kind(&self) -> Option<NotificationKind> {
        self.kind.as_deref().map(NotificationKind::parse)
    }

    /// `relatedItem`, then `actionData.itemId`
    pub fn item_id(&self) -> Option<&str> {
        self.related_item
            .as_deref()
            .or_else(|| self.action_data.as_ref()?.item_id.as_deref())
    }

    /// `relatedOrder`, then `actionData.orderId`
    pub fn order_id(&self) -> Option<&str> {
        self.related_order
            .as_deref()
            .or_else(|| self.action_data.as_ref()?.order_id.as_deref())
    }

    /// `actionData.chatId`, then the item id
    pub fn chat_id(&self) -> Option<&str> {
        self.action_data
            .as_ref()
            .and_then(|data| data.chat_id.as_deref())
            .or_else(|| self.item_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_populated_refs() {
        let n: Notification = serde_json::from_value(json!({
            "_id": "n1",
            "title": "Item sold",
            "type": "item_sold",
            "relatedItem": {"_id": "it5", "title": "Lamp"},
            "isRead": true
        }))
        .unwrap();

        assert_eq!(n.id(), "n1");
        assert_eq!(n.item_id(), Some("it5"));
        assert_eq!(n.kind(), Some(NotificationKind::Item));
        assert!(n.is_read());
    }

    #[test]
    fn test_read_and_is_read_together() {
        let n: Notification = serde_json::from_value(json!({
            "_id": "n2",
            "read": false,
            "isRead": true
        }))
        .unwrap();
        assert_eq!(n.id(), "n2");
        assert!(!n.is_read());

        let mut n: Notification = serde_json::from_value(json!({"isRead": false})).unwrap();
        assert!(!n.is_read());
        n.mark_read();
        assert!(n.is_read());
    }

    #[test]
    fn test_action_data_fallbacks() {
        let n: Notification = serde_json::from_value(json!({
            "action": "VIEW_ORDER",
            "actionData": {"orderId": 88, "itemId": "it2"}
        }))
        .unwrap();

        assert_eq!(n.action(), Some(Action::ViewOrder));
        assert_eq!(n.order_id(), Some("88"));
        assert_eq!(n.chat_id(), Some("it2"));
    }

    #[test]
    fn test_malformed_action_data_is_ignored() {
        let n: Notification = serde_json::from_value(json!({
            "message": "hi",
            "actionData": "oops",
            "relatedOrder": [],
            "read": "yes"
        }))
        .unwrap();

        assert!(n.action_data.is_none());
        assert!(n.order_id().is_none());
        assert!(!n.is_read());
    }
}
