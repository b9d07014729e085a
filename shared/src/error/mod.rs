//! Unified error system
//!
//! - [`ErrorCode`]: numeric codes grouped by domain
//! - [`AppError`]: code + message + optional details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ReservationIncomplete)
//!     .with_detail("missing", vec!["name", "phone"]);
//! assert_eq!(err.code.code(), 7001);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
