//! Notification Endpoints
//!
//! User endpoints live under `/notifications`, admin ones under
//! `/admin/notifications`; both require a bearer token.

use market_core::wire::{NotificationList, UnreadCount};
use market_core::{Audience, Notification};

use super::{segment, ApiClient, ApiError};

/// Notification endpoints for one audience
#[derive(Clone)]
pub struct NotificationApi {
    client: ApiClient,
    audience: Audience,
}

impl NotificationApi {
    pub fn new(audience: Audience) -> Self {
        let client = match audience {
            Audience::User => ApiClient::user(),
            Audience::Admin => ApiClient::admin(),
        };
        Self { client, audience }
    }

    fn path(&self, suffix: &str) -> String {
        endpoint(self.audience, suffix)
    }

    pub async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        self.client.require_token()?;
        let list: NotificationList = self.client.get(&self.path(""), &[]).await?;
        Ok(list.0)
    }

    pub async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        self.client.require_token()?;
        self.client.put(&self.path(&format!("/{}/read", segment(id)))).await
    }

    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        self.client.require_token()?;
        self.client.put(&self.path("/read/all")).await
    }

    pub async fn unread_count(&self) -> Result<u32, ApiError> {
        self.client.require_token()?;
        let count: UnreadCount = self.client.get(&self.path("/unread-count"), &[]).await?;
        Ok(count.count)
    }
}

fn endpoint(audience: Audience, suffix: &str) -> String {
    let base = match audience {
        Audience::User => "notifications",
        Audience::Admin => "admin/notifications",
    };
    format!("{}{}", base, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(endpoint(Audience::User, ""), "notifications");
        assert_eq!(endpoint(Audience::User, "/n1/read"), "notifications/n1/read");
        assert_eq!(endpoint(Audience::Admin, "/read/all"), "admin/notifications/read/all");
        assert_eq!(endpoint(Audience::Admin, "/unread-count"), "admin/notifications/unread-count");
    }
}
