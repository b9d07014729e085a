//! Category filter
//!
//! At most one category is active. Toggling the active category again clears
//! the filter.

use shared::models::{CategorySelection, DishRecord};

#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    selection: CategorySelection,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `category`, or clear the filter if it is already selected
    ///
    /// Returns the selection after the toggle.
    pub fn toggle(&mut self, category: &str) -> &CategorySelection {
        self.selection = match &self.selection {
            CategorySelection::Only(current) if current == category => CategorySelection::All,
            _ => CategorySelection::Only(category.to_string()),
        };
        &self.selection
    }

    /// Back to "All"; returns whether anything changed
    pub fn clear(&mut self) -> bool {
        let changed = !self.selection.is_all();
        self.selection = CategorySelection::All;
        changed
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    /// Chip highlighting: is `category` the active one
    pub fn is_active(&self, category: &str) -> bool {
        self.selection.category() == Some(category)
    }

    /// Catalog entries visible under the current selection, order preserved
    pub fn apply<'a>(&self, catalog: &'a [DishRecord]) -> Vec<&'a DishRecord> {
        catalog
            .iter()
            .filter(|dish| self.selection.matches(&dish.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn catalog() -> Vec<DishRecord> {
        vec![
            DishRecord::new("p1", "Margherita", Decimal::from(4500), "Pizza"),
            DishRecord::new("s1", "Caprese", Decimal::from(3000), "Salad"),
            DishRecord::new("p2", "Diavola", Decimal::from(5200), "Pizza"),
        ]
    }

    fn ids(dishes: &[&DishRecord]) -> Vec<String> {
        dishes.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let filter = CategoryFilter::new();
        let catalog = catalog();
        assert!(!filter.is_active("Pizza"));
        assert_eq!(ids(&filter.apply(&catalog)), vec!["p1", "s1", "p2"]);
    }

    #[test]
    fn test_toggle_selects_and_unselects() {
        let mut filter = CategoryFilter::new();
        let catalog = catalog();

        assert_eq!(
            filter.toggle("Pizza"),
            &CategorySelection::Only("Pizza".to_string())
        );
        assert_eq!(ids(&filter.apply(&catalog)), vec!["p1", "p2"]);
        assert!(filter.is_active("Pizza"));
        assert!(!filter.is_active("Salad"));

        assert_eq!(filter.toggle("Pizza"), &CategorySelection::All);
        assert_eq!(filter.apply(&catalog).len(), 3);
    }

    #[test]
    fn test_toggle_switches_category() {
        let mut filter = CategoryFilter::new();
        filter.toggle("Pizza");
        filter.toggle("Salad");
        assert_eq!(filter.selection().category(), Some("Salad"));
        assert_eq!(ids(&filter.apply(&catalog())), vec!["s1"]);
    }

    #[test]
    fn test_unknown_category_shows_nothing() {
        let mut filter = CategoryFilter::new();
        filter.toggle("Pasta");
        assert!(filter.apply(&catalog()).is_empty());
    }

    #[test]
    fn test_apply_is_stable() {
        let mut filter = CategoryFilter::new();
        let catalog = catalog();
        filter.toggle("Pizza");
        assert_eq!(filter.apply(&catalog), filter.apply(&catalog));
    }

    #[test]
    fn test_clear() {
        let mut filter = CategoryFilter::new();
        assert!(!filter.clear());
        filter.toggle("Salad");
        assert!(filter.clear());
        assert!(filter.selection().is_all());
    }
}
