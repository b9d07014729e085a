//! Cart ledger
//!
//! Maps dish id → positive quantity. The ledger never stores a zero entry:
//! a decrement that would reach zero deletes the dish instead.
//!
//! The ledger only stores ids. Names, prices and images are joined in from
//! the catalog when the view is derived, so the cart never holds a stale copy
//! of a dish.


use shared::models::{CartLine, DishRecord};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: HashMap<String, u32>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `dish_id`, returns the new quantity
    ///
    /// The id is not checked against the catalog here; the store does that.
    pub fn add(&mut self, dish_id: &str) -> u32 {
        let qty = self.lines.entry(dish_id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
        *qty
    }

    /// Remove one unit of `dish_id`
    ///
    /// Returns the new quantity (`0` = entry deleted), or `None` if the dish
    /// was not in the cart.
    pub fn remove(&mut self, dish_id: &str) -> Option<u32> {
        let qty = self.lines.get_mut(dish_id)?;
        if *qty > 1 {
            *qty -= 1;
            Some(*qty)
        } else {
            self.lines.remove(dish_id);
            Some(0)
        }
    }

    /// Empty the cart, returns the number of distinct dishes dropped
    pub fn clear(&mut self) -> usize {
        let dropped = self.lines.len();
        self.lines.clear();
        dropped
    }

    pub fn quantity(&self, dish_id: &str) -> u32 {
        self.lines.get(dish_id).copied().unwrap_or(0)
    }

    /// Distinct dishes in the cart (not the sum of quantities)
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities
    pub fn total_units(&self) -> u64 {
        self.lines.values().map(|q| u64::from(*q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derived cart view, in catalog order
    ///
    /// Entries whose id no longer resolves against `catalog` are omitted.
    pub fn view(&self, catalog: &[DishRecord]) -> Vec<CartLine> {
        let lines: Vec<CartLine> = catalog
            .iter()
            .filter_map(|dish| {
                self.lines.get(&dish.id).map(|qty| CartLine {
                    dish: dish.clone(),
                    quantity: *qty,
                })
            })
            .collect();

        if lines.len() < self.lines.len() {
            for id in self.lines.keys() {
                if !catalog.iter().any(|d| &d.id == id) {
                    tracing::warn!(dish_id = %id, "Cart entry has no matching dish, omitted from view");
                }
            }
        }

        lines
    }
}
