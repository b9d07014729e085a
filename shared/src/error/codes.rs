//! Unified error codes for the Delizia session core
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 6xxx: Catalog errors
//! - 7xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so a presentation layer in any language can
/// match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Cart ====================
    /// Dish is not part of the catalog
    DishNotFound = 4001,

    // ==================== 6xxx: Catalog ====================
    /// Catalog could not be read
    CatalogUnavailable = 6001,
    /// Catalog content is malformed
    CatalogInvalid = 6002,
    /// Two dishes share the same id
    DuplicateDish = 6003,

    // ==================== 7xxx: Reservation ====================
    /// Reservation draft has empty required fields
    ReservationIncomplete = 7001,
    /// Confirmation timer could not be scheduled
    ConfirmationTimerUnavailable = 7002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Session has been closed
    SessionClosed = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Numeric value of this code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::CatalogUnavailable => "Catalog unavailable",
            ErrorCode::CatalogInvalid => "Catalog is invalid",
            ErrorCode::DuplicateDish => "Duplicate dish id in catalog",
            ErrorCode::ReservationIncomplete => "Reservation is missing required fields",
            ErrorCode::ConfirmationTimerUnavailable => "Confirmation timer unavailable",
            ErrorCode::InternalError => "Internal error",
            ErrorCode::SessionClosed => "Session has been closed",
            ErrorCode::ConfigError => "Configuration error",
        }
    }

    /// Category name derived from the code range
    pub fn category(&self) -> &'static str {
        match self.code() {
            0..=999 => "general",
            4000..=4999 => "cart",
            6000..=6999 => "catalog",
            7000..=7999 => "reservation",
            _ => "system",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidFormat,
            7 => ErrorCode::RequiredField,
            4001 => ErrorCode::DishNotFound,
            6001 => ErrorCode::CatalogUnavailable,
            6002 => ErrorCode::CatalogInvalid,
            6003 => ErrorCode::DuplicateDish,
            7001 => ErrorCode::ReservationIncomplete,
            7002 => ErrorCode::ConfirmationTimerUnavailable,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::SessionClosed,
            9003 => ErrorCode::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
