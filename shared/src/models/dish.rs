//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dish record supplied by the catalog provider
///
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    /// Menu price (display currency, not cents)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    /// Image reference (URL or site-relative path)
    #[serde(default, alias = "img")]
    pub image: String,
}

impl DishRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            image: String::new(),
        }
    }
}
