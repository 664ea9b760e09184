//! REST Wire Types
//!
//! Every endpoint answers with one envelope: `{ success?, data, message? }`.
//! List payloads drop undecodable entries instead of failing the request.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::condition::Condition;
use crate::item::Item;
use crate::lenient;
use crate::listing::{ListingFilter, SortKey};
use crate::notification::Notification;

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload, unless the backend flagged the call as failed
    pub fn into_result(self) -> Result<T, String> {
        match self.success {
            Some(false) => Err(self.message.unwrap_or_else(|| "Request failed".to_string())),
            _ => Ok(self.data),
        }
    }
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// `data` of `GET /items`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl ItemPage {
    /// Server page to request after `page`, when the backend reports more
    pub fn next_page(&self, page: usize) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let more = match (self.total_pages, self.total) {
            (Some(pages), _) => page < pages as usize,
            (None, Some(total)) => self.items.len() < total as usize,
            (None, None) => false,
        };
        more.then_some(page + 1)
    }

    /// Append a following page, skipping ids already held. Returns the number of new items.
    pub fn absorb(&mut self, next: ItemPage) -> usize {
        let mut seen: HashSet<String> = self.items.iter().map(|i| i.id().to_string()).collect();
        let before = self.items.len();
        for item in next.items {
            if item.id().is_empty() || seen.insert(item.id().to_string()) {
                self.items.push(item);
            }
        }
        self.total = next.total.or(self.total);
        self.total_pages = next.total_pages.or(self.total_pages);
        self.items.len() - before
    }

    /// Listings the backend reported but that were not fetched
    pub fn missing(&self) -> usize {
        self.total
            .map_or(0, |total| (total as usize).saturating_sub(self.items.len()))
    }
}

/// `data` of `GET /notifications`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NotificationList(#[serde(deserialize_with = "lenient::list")] pub Vec<Notification>);

/// `data` of `GET /notifications/unread-count`
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub count: u32,
}

/// Query parameters for `GET /items`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub condition: Option<Condition>,
    pub sort: Option<SortKey>,
}

impl ItemQuery {
    pub fn from_filter(filter: &ListingFilter, page: usize, limit: usize) -> Self {
        let category = filter
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(str::to_string);
        let q = Some(filter.search.trim().to_string()).filter(|q| !q.is_empty());

        Self {
            q,
            page: Some(page),
            limit: Some(limit),
            category,
            min_price: filter.min_price,
            max_price: filter.max_price,
            condition: filter.condition.clone(),
            sort: Some(filter.sort),
        }
    }

    pub fn at_page(&self, page: usize) -> Self {
        Self { page: Some(page), ..self.clone() }
    }

    /// Unset parameters are omitted
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(min) = self.min_price {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("maxPrice", max.to_string()));
        }
        if let Some(condition) = &self.condition {
            params.push(("condition", condition.api_value()));
        }
        if let Some(sort) = self.sort {
            let (sort_by, sort_order) = sort.api_params();
            params.push(("sortBy", sort_by.to_string()));
            params.push(("sortOrder", sort_order.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_page_envelope() {
        let env: Envelope<ItemPage> = serde_json::from_value(json!({
            "success": true,
            "data": {
                "items": [{"_id": "a", "title": "Lamp"}, "garbage", {"_id": "b"}],
                "total": 2,
                "totalPages": 1
            }
        }))
        .unwrap();

        let page = env.into_result().unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, Some(1));
    }

    fn page_of(ids: &[&str], total: Option<u64>, total_pages: Option<u32>) -> ItemPage {
        let items = ids
            .iter()
            .map(|id| serde_json::from_value(json!({"_id": id})).unwrap())
            .collect();
        ItemPage { items, total, page: None, total_pages }
    }

    #[test]
    fn test_next_page_follows_reported_totals() {
        assert_eq!(page_of(&["a", "b"], None, Some(3)).next_page(1), Some(2));
        assert_eq!(page_of(&["a", "b"], None, Some(3)).next_page(3), None);
        assert_eq!(page_of(&["a", "b"], Some(5), None).next_page(1), Some(2));
        assert_eq!(page_of(&["a", "b"], Some(2), None).next_page(1), None);
        assert_eq!(page_of(&["a", "b"], None, None).next_page(1), None);
        assert_eq!(page_of(&[], Some(10), Some(4)).next_page(1), None);
    }

    #[test]
    fn test_absorb_and_missing() {
        let mut all = page_of(&["a", "b"], Some(450), Some(3));
        assert_eq!(all.missing(), 448);

        assert_eq!(all.absorb(page_of(&["b", "c"], Some(450), Some(3))), 1);
        assert_eq!(all.items.len(), 3);
        assert_eq!(all.missing(), 447);

        // A backend that ignores `page` sends the same items again
        assert_eq!(all.absorb(page_of(&["a", "b", "c"], Some(450), Some(3))), 0);
    }

    #[test]
    fn test_empty_and_null_payloads() {
        let env: Envelope<ItemPage> = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(env.into_result().unwrap().items.is_empty());

        let env: Envelope<NotificationList> = serde_json::from_value(json!({})).unwrap();
        assert!(env.into_result().unwrap().0.is_empty());

        let env: Envelope<NotificationList> = serde_json::from_value(json!({"data": {"oops": 1}})).unwrap();
        assert!(env.into_result().unwrap().0.is_empty());
    }

    #[test]
    fn test_notification_list_keeps_records_with_duplicate_spellings() {
        let env: Envelope<NotificationList> = serde_json::from_value(json!({
            "data": [
                {"_id": "n1", "id": "n1", "read": false, "isRead": false},
                {"_id": "n2", "title": "Order shipped"}
            ]
        }))
        .unwrap();

        let list = env.into_result().unwrap().0;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id(), "n1");
        assert!(!list[0].is_read());
    }

    #[test]
    fn test_failed_envelope() {
        let env: Envelope<UnreadCount> =
            serde_json::from_value(json!({"success": false, "message": "Token expired"})).unwrap();
        assert_eq!(env.into_result(), Err("Token expired".to_string()));
    }

    #[test]
    fn test_query_params() {
        let filter = ListingFilter {
            search: "  lamp ".to_string(),
            category: Some("All".to_string()),
            condition: Condition::parse("LIKE-NEW"),
            min_price: Some(5.0),
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        let params = ItemQuery::from_filter(&filter, 1, 100).to_params();

        assert_eq!(
            params,
            vec![
                ("q", "lamp".to_string()),
                ("page", "1".to_string()),
                ("limit", "100".to_string()),
                ("minPrice", "5".to_string()),
                ("condition", "like_new".to_string()),
                ("sortBy", "price".to_string()),
                ("sortOrder", "asc".to_string()),
            ]
        );

        let next = ItemQuery::from_filter(&filter, 1, 100).at_page(4);
        assert_eq!(next.page, Some(4));
        assert_eq!(next.limit, Some(100));
    }
}
