//! Campus Market Core
//!
//! Platform-independent pieces of the marketplace frontend:
//! - models: Item and Notification records as the backend sends them
//! - condition: condition synonym table
//! - listing: client-side filter/sort/paginate pipeline
//! - links: notification click routing with link repair
//! - route: application routes
//! - time: timestamp parsing and relative labels
//! - wire: response envelope and query parameters for the REST API

mod lenient;

pub mod time;
pub mod condition;
pub mod item;
pub mod notification;
pub mod listing;
pub mod links;
pub mod route;
pub mod wire;

pub use condition::Condition;
pub use item::{format_price, Item, Seller};
pub use notification::{Action, ActionData, Notification, NotificationKind};
pub use listing::{BrowseState, ListingFilter, ListingPage, SortKey, PAGE_SIZE};
pub use links::{repair_link, resolve_link, Audience};
pub use route::Route;
pub use wire::{Envelope, ItemPage, ItemQuery, UnreadCount};
