//! Item Model
//!
//! A marketplace listing as returned by the backend. Every field is optional
//! on the wire; accessors apply the fallbacks the listing views rely on.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::condition::Condition;
use crate::lenient;
use crate::time::parse_timestamp;

/// Marketplace listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Document id (`_id`); preferred over `id` when both are sent
    #[serde(rename = "_id", default, deserialize_with = "lenient::opt_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(rename = "id", default, deserialize_with = "lenient::opt_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Numeric or numeric-string price; anything else is `None`
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub faculty: Option<String>,
    /// Condition as typed by the seller
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub image: Option<String>,
    #[serde(rename = "imageURL", default, deserialize_with = "lenient::opt_string")]
    pub image_url: Option<String>,
    /// Camel-case spelling some endpoints send alongside `imageURL`
    #[serde(rename = "imageUrl", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub image_url_alt: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_seller")]
    pub seller: Option<Seller>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

/// Seller reference: a bare id or a populated user record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Seller {
    pub id: Option<String>,
    pub name: Option<String>,
}

fn opt_seller<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Seller>, D::Error> {
    let value = Value::deserialize(d)?;
    let seller = match &value {
        Value::Object(map) => Seller {
            id: lenient::id_from_value(&value),
            name: map
                .get("name")
                .or_else(|| map.get("username"))
                .and_then(lenient::string_from_value),
        },
        other => Seller {
            id: lenient::id_from_value(other),
            name: None,
        },
    };
    Ok((seller.id.is_some() || seller.name.is_some()).then_some(seller))
}

impl Item {
    pub fn id(&self) -> &str {
        self.object_id
            .as_deref()
            .or(self.record_id.as_deref())
            .unwrap_or_default()
    }

    /// Price used for sorting and range filters
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Creation time in epoch milliseconds; unparseable dates sort as the epoch
    pub fn created_timestamp(&self) -> i64 {
        self.created_at.as_deref().and_then(parse_timestamp).unwrap_or(0)
    }

    /// First available image reference: `image`, then `imageURL`/`imageUrl`, then `images[0]`
    pub fn primary_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or(self.image_url.as_deref())
            .or(self.image_url_alt.as_deref())
            .or_else(|| self.images.first().map(String::as_str))
    }

    pub fn normalized_condition(&self) -> Option<Condition> {
        self.condition.as_deref().and_then(Condition::parse)
    }

    pub fn is_sold(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("sold"))
    }

    /// Creation date for display (`YYYY-MM-DD`), when parseable
    pub fn listed_on(&self) -> Option<String> {
        let millis = self.created_at.as_deref().and_then(parse_timestamp)?;
        DateTime::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d").to_string())
    }
}

/// Price label for cards
pub fn format_price(price: Option<f64>) -> String {
    match price {
        None => "Price on request".to_string(),
        Some(p) if p == 0.0 => "Free".to_string(),
        Some(p) if p.fract() == 0.0 => format!("${:.0}", p),
        Some(p) => format!("${:.2}", p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_item() {
        let item: Item = serde_json::from_value(json!({
            "_id": "66a1",
            "title": "Calculus textbook",
            "price": "45.5",
            "category": "Books",
            "condition": "like_new",
            "imageURL": "https://cdn.example/calc.jpg",
            "createdAt": "2024-03-01T10:00:00Z",
            "seller": {"_id": "u9", "name": "Ada"}
        }))
        .unwrap();

        assert_eq!(item.id(), "66a1");
        assert_eq!(item.price, Some(45.5));
        assert_eq!(item.normalized_condition(), Some(Condition::LikeNew));
        assert_eq!(item.primary_image(), Some("https://cdn.example/calc.jpg"));
        assert_eq!(item.seller.as_ref().and_then(|s| s.name.as_deref()), Some("Ada"));
        assert_eq!(item.listed_on().as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_malformed_fields_fall_back() {
        let item: Item = serde_json::from_value(json!({
            "id": 12,
            "title": null,
            "price": "ask me",
            "createdAt": "yesterday",
            "images": "not-a-list",
            "seller": ["?"]
        }))
        .unwrap();

        assert_eq!(item.id(), "12");
        assert_eq!(item.title, "");
        assert_eq!(item.price_or_zero(), 0.0);
        assert_eq!(item.created_timestamp(), 0);
        assert!(item.images.is_empty());
        assert!(item.seller.is_none());
        assert!(item.primary_image().is_none());
    }

    #[test]
    fn test_both_id_keys_prefer_object_id() {
        let item: Item = serde_json::from_value(json!({"_id": "abc", "id": "abc-virtual"})).unwrap();
        assert_eq!(item.id(), "abc");
    }

    #[test]
    fn test_both_image_url_spellings() {
        let item: Item = serde_json::from_value(json!({
            "_id": "i1",
            "imageURL": "a.jpg",
            "imageUrl": "b.jpg"
        }))
        .unwrap();
        assert_eq!(item.primary_image(), Some("a.jpg"));

        let item: Item = serde_json::from_value(json!({"imageUrl": "b.jpg"})).unwrap();
        assert_eq!(item.primary_image(), Some("b.jpg"));
    }

    #[test]
    fn test_image_precedence() {
        let item: Item = serde_json::from_value(json!({
            "imageURL": "b.jpg",
            "images": [{"url": "c.jpg"}]
        }))
        .unwrap();
        assert_eq!(item.primary_image(), Some("b.jpg"));

        let item: Item = serde_json::from_value(json!({"images": [{"url": "c.jpg"}]})).unwrap();
        assert_eq!(item.primary_image(), Some("c.jpg"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(None), "Price on request");
        assert_eq!(format_price(Some(0.0)), "Free");
        assert_eq!(format_price(Some(20.0)), "$20");
        assert_eq!(format_price(Some(19.5)), "$19.50");
    }
}
