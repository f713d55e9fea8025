use std::fmt;

use crate::ItemId;

/// Which of the two fetches failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Items,
    Memberships,
}

impl fmt::Display for FetchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchSource::Items => write!(f, "items"),
            FetchSource::Memberships => write!(f, "memberships"),
        }
    }
}

/// User-displayable error value produced by the transport layer's formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayError {
    pub status: Option<u16>,
    pub message: String,
}

impl DisplayError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("failed to retrieve {origin}: {error}")]
    FetchFailed {
        origin: FetchSource,
        error: DisplayError,
    },
    #[error("item {0} is not in the collection")]
    ItemNotFound(ItemId),
}
