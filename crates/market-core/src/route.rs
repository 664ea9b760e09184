//! Application Routes
//!
//! Path <-> route mapping shared by the router and link resolution.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Browse,
    Item(String),
    Chats,
    Chat(String),
    Orders,
    Order(String),
    Profile,
    ProfileReviews,
    Notifications,
    AdminDashboard,
    AdminNotifications,
    AdminReports,
    AdminItems,
    AdminUsers,
    NotFound(String),
}

impl Route {
    /// Parse a path; query string, fragment and trailing slashes are ignored
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["browse"] => Route::Browse,
            ["item", id] => Route::Item(id.to_string()),
            ["chats"] => Route::Chats,
            ["chat", id] => Route::Chat(id.to_string()),
            ["orders"] => Route::Orders,
            ["orders", id] => Route::Order(id.to_string()),
            ["profile"] => Route::Profile,
            ["profile", "reviews"] => Route::ProfileReviews,
            ["notifications"] => Route::Notifications,
            ["admin"] => Route::AdminDashboard,
            ["admin", "notifications"] => Route::AdminNotifications,
            ["admin", "reports"] => Route::AdminReports,
            ["admin", "items"] => Route::AdminItems,
            ["admin", "users"] => Route::AdminUsers,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminDashboard
                | Route::AdminNotifications
                | Route::AdminReports
                | Route::AdminItems
                | Route::AdminUsers
        )
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Route::Browse => "Browse",
            Route::Item(_) => "Item",
            Route::Chats | Route::Chat(_) => "Messages",
            Route::Orders | Route::Order(_) => "Orders",
            Route::Profile => "Profile",
            Route::ProfileReviews => "Reviews",
            Route::Notifications => "Notifications",
            Route::AdminDashboard => "Admin",
            Route::AdminNotifications => "Admin Notifications",
            Route::AdminReports => "Reports",
            Route::AdminItems => "Listings",
            Route::AdminUsers => "Users",
            Route::NotFound(_) => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Browse => f.write_str("/browse"),
            Route::Item(id) => write!(f, "/item/{}", id),
            Route::Chats => f.write_str("/chats"),
            Route::Chat(id) => write!(f, "/chat/{}", id),
            Route::Orders => f.write_str("/orders"),
            Route::Order(id) => write!(f, "/orders/{}", id),
            Route::Profile => f.write_str("/profile"),
            Route::ProfileReviews => f.write_str("/profile/reviews"),
            Route::Notifications => f.write_str("/notifications"),
            Route::AdminDashboard => f.write_str("/admin"),
            Route::AdminNotifications => f.write_str("/admin/notifications"),
            Route::AdminReports => f.write_str("/admin/reports"),
            Route::AdminItems => f.write_str("/admin/items"),
            Route::AdminUsers => f.write_str("/admin/users"),
            Route::NotFound(path) => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Browse);
        assert_eq!(Route::parse("/item/42/"), Route::Item("42".to_string()));
        assert_eq!(Route::parse("/orders?tab=open"), Route::Orders);
        assert_eq!(Route::parse("/admin/notifications"), Route::AdminNotifications);
        assert_eq!(Route::parse("/nope/x"), Route::NotFound("/nope/x".to_string()));
    }

    #[test]
    fn test_display_parses_back() {
        for route in [
            Route::Item("a1".to_string()),
            Route::Chat("c".to_string()),
            Route::Order("o".to_string()),
            Route::ProfileReviews,
            Route::AdminUsers,
        ] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }

    #[test]
    fn test_admin_routes() {
        assert!(Route::AdminReports.is_admin());
        assert!(!Route::Notifications.is_admin());
        // Every page under /admin keeps the header's Admin link active
        for path in ["/admin", "/admin/notifications", "/admin/users/"] {
            assert!(Route::parse(path).is_admin(), "{}", path);
        }
        assert!(!Route::parse("/administrator").is_admin());
    }
}
