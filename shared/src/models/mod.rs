//! Data models
//!
//! Shared between the session runtime and any presentation layer.
//! Dish ids are strings, as supplied by the catalog.

pub mod cart;
pub mod category;
pub mod dish;
pub mod reservation;
pub mod snapshot;

// Re-exports
pub use cart::*;
pub use category::*;
pub use dish::*;
pub use reservation::*;
pub use snapshot::*;
