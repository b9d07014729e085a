//! 菜品目录
//!
//! Read-only, ordered dish list. The session never mutates it; cart views and
//! the filter are derived against it on every read.

use shared::models::DishRecord;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::Config;

/// Built-in Delizia Kitchen menu
const BUILTIN_MENU: &str = include_str!("../../assets/menu.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate dish id: {0}")]
    DuplicateDish(String),

    #[error("Dish at position {0} has an empty id")]
    EmptyId(usize),
}

/// Source of dish records
pub trait CatalogProvider: Send + Sync {
    /// All dishes, in display order
    fn dishes(&self) -> &[DishRecord];

    fn find(&self, dish_id: &str) -> Option<&DishRecord> {
        self.dishes().iter().find(|d| d.id == dish_id)
    }

    fn contains(&self, dish_id: &str) -> bool {
        self.find(dish_id).is_some()
    }

    /// Distinct categories in order of first appearance
    fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.dishes()
            .iter()
            .filter(|d| seen.insert(d.category.as_str()))
            .map(|d| d.category.clone())
            .collect()
    }
}

/// In-memory catalog loaded once at startup
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    dishes: Vec<DishRecord>,
}

impl StaticCatalog {
    /// Validate and wrap a dish list
    pub fn new(dishes: Vec<DishRecord>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(dishes.len());
        for (index, dish) in dishes.iter().enumerate() {
            if dish.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if !ids.insert(dish.id.as_str()) {
                return Err(CatalogError::DuplicateDish(dish.id.clone()));
            }
        }
        Ok(Self { dishes })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let dishes: Vec<DishRecord> = serde_json::from_str(json)?;
        Self::new(dishes)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_MENU)
    }

    /// `CATALOG_PATH` if configured, otherwise the built-in menu
    pub fn load(config: &Config) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading catalog from file");
                Self::from_json_file(path)?
            }
            None => {
                tracing::info!("Using built-in catalog");
                Self::builtin()?
            }
        };
        tracing::info!(dishes = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn dishes(&self) -> &[DishRecord] {
        &self.dishes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn dish(id: &str, category: &str) -> DishRecord {
        DishRecord::new(id, format!("Dish {}", id), Decimal::from(1000), category)
    }

    #[test]
    fn test_builtin_menu_loads() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("p1"));
        assert!(catalog.contains("s1"));
        assert_eq!(catalog.find("p1").map(|d| d.category.as_str()), Some("Pizza"));
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = StaticCatalog::new(vec![
            dish("p1", "Pizza"),
            dish("s1", "Salad"),
            dish("p2", "Pizza"),
            dish("d1", "Dessert"),
            dish("s2", "Salad"),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["Pizza", "Salad", "Dessert"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = StaticCatalog::new(vec![dish("p1", "Pizza"), dish("p1", "Salad")]);
        assert!(matches!(result, Err(CatalogError::DuplicateDish(id)) if id == "p1"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = StaticCatalog::new(vec![dish("p1", "Pizza"), dish(" ", "Salad")]);
        assert!(matches!(result, Err(CatalogError::EmptyId(1))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "x1", "name": "Bruschetta", "price": 1800, "category": "Starter"}},
                {{"id": "x2", "name": "Arancini", "price": 2100.5, "category": "Starter"}}
            ]"#
        )
        .unwrap();

        let catalog = StaticCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.dishes()[1].name, "Arancini");
        assert_eq!(catalog.dishes()[0].description, "");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StaticCatalog::from_json_file(dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = StaticCatalog::from_json_str(r#"{"id": "p1"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
