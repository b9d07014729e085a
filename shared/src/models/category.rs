//! Category selection

use serde::{Deserialize, Serialize};

/// Active category filter
///
/// `All` is the unset state: every category is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// The selected category, `None` for `All`
    pub fn category(&self) -> Option<&str> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Only(c) => Some(c.as_str()),
        }
    }

    /// Whether a dish in `category` is visible under this selection
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(c) => c == category,
        }
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySelection::All => write!(f, "All"),
            CategorySelection::Only(c) => write!(f, "{}", c),
        }
    }
}

impl From<Option<String>> for CategorySelection {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(c) => CategorySelection::Only(c),
            None => CategorySelection::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_matches() {
        assert!(CategorySelection::All.matches("Pizza"));
        let only = CategorySelection::Only("Salad".to_string());
        assert!(only.matches("Salad"));
        assert!(!only.matches("Pizza"));
        assert_eq!(only.category(), Some("Salad"));
        assert_eq!(CategorySelection::default(), CategorySelection::All);
    }
}
