//! Shared types for the Delizia session core
//!
//! Domain types used by the session runtime and by any presentation layer:
//! dish records, cart lines, category selection, reservation draft/status,
//! user intents, session events and the unified error codes.

pub mod error;
pub mod intent;
pub mod message;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use intent::SessionIntent;
pub use message::{SessionEvent, SessionEventPayload, SessionEventType};
pub use models::{
    CartLine, CategorySelection, DishRecord, ReservationDraft, ReservationField,
    ReservationStatus, SessionSnapshot,
};
pub use serde::{Deserialize, Serialize};
