//! # Slot State
//!
//! The value each observable slot holds. A slot only ever moves
//! `Idle → Loading → Success | Error`, and every new request re-enters `Loading`.
//!
//! ```text
//!          search()/load_planet()
//!   Idle ───────────────────────► Loading ──► Success(T)
//!     ▲                             ▲    └──► Error { message, cause }
//!     │ clear_*()                   │ new request
//!     └──────────── any ────────────┘
//! ```

use crate::domain::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    Idle,
    Loading,
    Success(T),
    Error {
        message: String,
        /// Underlying failure, when there was one (blank input and empty results have none).
        cause: Option<FetchError>,
    },
}

impl<T> Default for UiState<T> {
    fn default() -> Self {
        UiState::Idle
    }
}

impl<T> UiState<T> {
    pub fn error(message: impl Into<String>) -> Self {
        UiState::Error {
            message: message.into(),
            cause: None,
        }
    }

    /// Error state carrying the failure's own message and the failure as cause.
    pub fn failed(cause: FetchError) -> Self {
        UiState::Error {
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// True once a request has settled (Success or Error).
    pub fn is_terminal(&self) -> bool {
        matches!(self, UiState::Success(_) | UiState::Error { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            UiState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}
