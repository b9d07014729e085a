//! Session snapshot - everything the presentation layer renders

use super::cart::CartLine;
use super::category::CategorySelection;
use super::dish::DishRecord;
use super::reservation::{ReservationDraft, ReservationStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time view of a session, recomputed on every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    /// Dishes visible under the current category selection
    pub visible_catalog: Vec<DishRecord>,
    /// Filter chips in catalog order
    pub categories: Vec<String>,
    pub selection: CategorySelection,
    /// Cart lines in catalog order
    pub cart: Vec<CartLine>,
    /// Distinct dishes in the cart (badge count)
    pub cart_item_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub cart_subtotal: Decimal,
    pub draft: ReservationDraft,
    pub status: ReservationStatus,
}
