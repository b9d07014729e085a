//! Session events - facts published after each state change
//!
//! Subscribers (header badge, menu page, reservation panel, ...) receive
//! these and re-read the session snapshot.

use crate::models::{CategorySelection, ReservationField};
use serde::{Deserialize, Serialize};

/// Session event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Per-session sequence number, strictly increasing
    pub sequence: u64,
    pub session_id: String,
    /// Unix milliseconds
    pub timestamp: i64,
    pub event_type: SessionEventType,
    pub payload: SessionEventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEventType {
    // Cart
    CartItemChanged,
    CartCleared,

    // Filter
    CategoryChanged,

    // Reservation
    DraftChanged,
    DraftReset,
    ReservationConfirmed,
    ReservationExpired,

    // Lifecycle
    SessionClosed,
}

impl std::fmt::Display for SessionEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEventType::CartItemChanged => write!(f, "CART_ITEM_CHANGED"),
            SessionEventType::CartCleared => write!(f, "CART_CLEARED"),
            SessionEventType::CategoryChanged => write!(f, "CATEGORY_CHANGED"),
            SessionEventType::DraftChanged => write!(f, "DRAFT_CHANGED"),
            SessionEventType::DraftReset => write!(f, "DRAFT_RESET"),
            SessionEventType::ReservationConfirmed => write!(f, "RESERVATION_CONFIRMED"),
            SessionEventType::ReservationExpired => write!(f, "RESERVATION_EXPIRED"),
            SessionEventType::SessionClosed => write!(f, "SESSION_CLOSED"),
        }
    }
}

/// Event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEventPayload {
    CartItemChanged {
        dish_id: String,
        /// New quantity, 0 when the entry was deleted
        quantity: u32,
        item_count: usize,
    },
    CartCleared,
    CategoryChanged {
        selection: CategorySelection,
    },
    DraftChanged {
        field: ReservationField,
    },
    DraftReset,
    ReservationConfirmed {
        episode: u64,
    },
    ReservationExpired {
        episode: u64,
    },
    SessionClosed,
}

impl SessionEventPayload {
    pub fn event_type(&self) -> SessionEventType {
        match self {
            SessionEventPayload::CartItemChanged { .. } => SessionEventType::CartItemChanged,
            SessionEventPayload::CartCleared => SessionEventType::CartCleared,
            SessionEventPayload::CategoryChanged { .. } => SessionEventType::CategoryChanged,
            SessionEventPayload::DraftChanged { .. } => SessionEventType::DraftChanged,
            SessionEventPayload::DraftReset => SessionEventType::DraftReset,
            SessionEventPayload::ReservationConfirmed { .. } => {
                SessionEventType::ReservationConfirmed
            }
            SessionEventPayload::ReservationExpired { .. } => SessionEventType::ReservationExpired,
            SessionEventPayload::SessionClosed => SessionEventType::SessionClosed,
        }
    }
}

impl SessionEvent {
    pub fn new(
        sequence: u64,
        session_id: impl Into<String>,
        payload: SessionEventPayload,
    ) -> Self {
        Self {
            sequence,
            session_id: session_id.into(),
            timestamp: crate::util::now_millis(),
            event_type: payload.event_type(),
            payload,
        }
    }
}
