//! Per-request fetch lifecycle state.

use std::fmt::Display;

/// Render state of one remote request: loading, error or success.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Request in flight; render a placeholder.
    Loading,
    /// Request failed; the message is for diagnostics, views render a
    /// generic error text.
    Failed(String),
    /// Payload ready.
    Ready(T),
}

impl<T> FetchState<T> {
    /// Folds a finished request into its terminal state.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Ready(payload),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Payload when ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}
