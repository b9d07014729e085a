use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::reservation::{ReservationError, TimerError};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("会话已关闭")]
    Closed,

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// 会话操作的 Result 类型别名
pub type Result<T> = std::result::Result<T, SessionError>;

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::IncompleteDraft { missing } => {
                let fields: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
                AppError::with_message(
                    ErrorCode::ReservationIncomplete,
                    format!("Please fill in: {}", fields.join(", ")),
                )
                .with_detail("missing", fields)
            }
            ReservationError::Timer(TimerError::NoRuntime) => {
                tracing::error!("Confirmation timer has no runtime");
                AppError::new(ErrorCode::ConfirmationTimerUnavailable)
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::Io { path, .. } => {
                AppError::with_message(ErrorCode::CatalogUnavailable, err.to_string())
                    .with_detail("path", path.display().to_string())
            }
            CatalogError::Parse(_) | CatalogError::EmptyId(_) => {
                AppError::with_message(ErrorCode::CatalogInvalid, err.to_string())
            }
            CatalogError::DuplicateDish(id) => {
                AppError::with_message(ErrorCode::DuplicateDish, err.to_string())
                    .with_detail("dish_id", id.clone())
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Closed => AppError::session_closed(),
            SessionError::Reservation(e) => e.into(),
        }
    }
}
