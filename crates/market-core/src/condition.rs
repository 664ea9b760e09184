//! Item Condition
//!
//! Sellers type conditions freely ("like_new", "LIKE-NEW", "mint"...).
//! Everything is folded onto five canonical grades through a synonym table.

use std::fmt;

/// Canonical item condition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
    /// Unrecognized value, kept trimmed as typed
    Other(String),
}

impl Condition {
    /// Grades offered in the condition filter, best first
    pub const KNOWN: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    /// Normalize a raw condition. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::from_synonym(&synonym_key(trimmed)).unwrap_or_else(|| Condition::Other(trimmed.to_string())))
    }

    fn from_synonym(key: &str) -> Option<Self> {
        let condition = match key {
            "new" | "brand new" | "brandnew" | "unused" => Condition::New,
            "like new" | "likenew" | "as new" | "mint" | "excellent" => Condition::LikeNew,
            "good" | "very good" | "used good" => Condition::Good,
            "fair" | "used" | "acceptable" => Condition::Fair,
            "poor" | "damaged" | "for parts" => Condition::Poor,
            _ => return None,
        };
        Some(condition)
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
            Condition::Other(raw) => raw,
        }
    }

    /// Value sent as the `condition` query parameter
    pub fn api_value(&self) -> String {
        match self {
            Condition::Other(raw) => raw.clone(),
            known => synonym_key(known.label()).replace(' ', "_"),
        }
    }

    /// Compare two conditions after normalization; `Other` values compare
    /// case-insensitively.
    pub fn matches(&self, other: &Condition) -> bool {
        match (self, other) {
            (Condition::Other(a), Condition::Other(b)) => synonym_key(a) == synonym_key(b),
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower-case, `_`/`-` to spaces, collapsed whitespace
fn synonym_key(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_new_spellings() {
        assert_eq!(Condition::parse("like_new"), Some(Condition::LikeNew));
        assert_eq!(Condition::parse("LIKE-NEW"), Some(Condition::LikeNew));
        assert_eq!(Condition::parse("  Like   New "), Some(Condition::LikeNew));
        assert_eq!(Condition::parse("like_new").unwrap().to_string(), "Like New");
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(Condition::parse("Brand-New"), Some(Condition::New));
        assert_eq!(Condition::parse("mint"), Some(Condition::LikeNew));
        assert_eq!(Condition::parse("USED"), Some(Condition::Fair));
        assert_eq!(Condition::parse("for_parts"), Some(Condition::Poor));
    }

    #[test]
    fn test_unknown_and_blank() {
        assert_eq!(Condition::parse("  refurbished "), Some(Condition::Other("refurbished".to_string())));
        assert_eq!(Condition::parse("   "), None);
        assert!(Condition::parse("Refurbished").unwrap().matches(&Condition::parse("refurbished").unwrap()));
    }

    #[test]
    fn test_api_value() {
        assert_eq!(Condition::LikeNew.api_value(), "like_new");
        assert_eq!(Condition::New.api_value(), "new");
    }
}
