//! Session intents - user actions forwarded by the presentation layer
//!
//! Every button, chip and form input maps to exactly one intent. The session
//! store is the only place that interprets them.

use crate::models::ReservationField;
use serde::{Deserialize, Serialize};

/// User intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionIntent {
    // Cart
    AddToCart { dish_id: String },
    RemoveFromCart { dish_id: String },
    ClearCart,

    // Category filter
    ToggleCategory { category: String },
    ClearCategory,

    // Reservation form
    SetReservationField { field: ReservationField, value: String },
    /// Popular-time chip
    PickTime { value: String },
    /// Party-size picker
    PickGuestCount { value: String },
    ResetReservation,
    SubmitReservation,
}

impl SessionIntent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            SessionIntent::AddToCart { .. } => "ADD_TO_CART",
            SessionIntent::RemoveFromCart { .. } => "REMOVE_FROM_CART",
            SessionIntent::ClearCart => "CLEAR_CART",
            SessionIntent::ToggleCategory { .. } => "TOGGLE_CATEGORY",
            SessionIntent::ClearCategory => "CLEAR_CATEGORY",
            SessionIntent::SetReservationField { .. } => "SET_RESERVATION_FIELD",
            SessionIntent::PickTime { .. } => "PICK_TIME",
            SessionIntent::PickGuestCount { .. } => "PICK_GUEST_COUNT",
            SessionIntent::ResetReservation => "RESET_RESERVATION",
            SessionIntent::SubmitReservation => "SUBMIT_RESERVATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_format() {
        let intent = SessionIntent::SetReservationField {
            field: ReservationField::GuestCount,
            value: "4".to_string(),
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "SET_RESERVATION_FIELD");
        assert_eq!(json["field"], "guest_count");

        let parsed: SessionIntent =
            serde_json::from_str(r#"{"type":"ADD_TO_CART","dish_id":"p1"}"#).unwrap();
        assert_eq!(
            parsed,
            SessionIntent::AddToCart {
                dish_id: "p1".to_string()
            }
        );
    }
}
