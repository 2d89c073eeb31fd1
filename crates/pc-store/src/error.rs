use std::io;

use pc_core::{ClockError, CorruptEntry};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No timer is stored under this name.
    #[error("no clock with name \"{name}\" exists")]
    NotFound { name: String },

    /// A timer with this name is already stored.
    #[error("a clock with name \"{name}\" already exists")]
    AlreadyExists { name: String },

    /// The backend failed to read or write.
    #[error("storage error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// The stored bytes are not a history at all.
    #[error("failed to decode history: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The stored history decodes but breaks the entry layout.
    #[error("corrupt history for \"{name}\": {source}")]
    Corrupt {
        name: String,
        #[source]
        source: CorruptEntry,
    },
}

impl StoreError {
    pub(crate) fn io(key: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors from punchclock operations.
#[derive(Debug, Error)]
pub enum PunchclockError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Clock(#[from] ClockError),
}

impl PunchclockError {
    /// Refused transitions and clock regressions: report them, don't abort.
    pub const fn is_user_facing(&self) -> bool {
        match self {
            Self::Clock(err) => err.is_user_facing(),
            Self::Store(_) => false,
        }
    }
}
