//! Cart view types

use super::dish::DishRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the derived cart view: a catalog dish and its quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub dish: DishRecord,
    pub quantity: u32,
}

impl CartLine {
    /// price × quantity
    pub fn line_total(&self) -> Decimal {
        self.dish.price * Decimal::from(self.quantity)
    }
}

/// Sum of all line totals
pub fn cart_subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}
