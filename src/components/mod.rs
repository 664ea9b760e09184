//! UI Components
//!
//! Pages and reusable Leptos components.

mod error_panel;
mod item_card;
mod item_detail_card;
mod filter_bar;
mod pagination;
mod notification_center;
mod notification_bell;
mod header;
mod browse_page;
mod item_detail_page;
mod notifications_page;
mod placeholder_page;

pub use error_panel::{EmptyState, ErrorPanel, LoadingIndicator};
pub use item_card::{ItemCard, ItemImage};
pub use item_detail_card::ItemDetailCard;
pub use filter_bar::FilterBar;
pub use pagination::Pagination;
pub use notification_center::{NotificationCenter, NotificationRow};
pub use notification_bell::NotificationBell;
pub use header::Header;
pub use browse_page::BrowsePage;
pub use item_detail_page::ItemDetailPage;
pub use notifications_page::{AdminNotificationsPage, NotificationsPage};
pub use placeholder_page::PlaceholderPage;
