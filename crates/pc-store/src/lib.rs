//! Storage layer for punchclock timers.
//!
//! Each timer's history is stored as one value under its name through a
//! [`Backend`]. The store always reads and writes a timer's whole history.
//!
//! # Format
//!
//! A history is a UTF-8 JSON array with one inner array per entry: `[start]`
//! for a running entry, `[start, end]` for a finished one. Timestamps are local
//! wall-clock ISO 8601 with up to microsecond precision, e.g.
//! `[["2024-01-01T09:00:00","2024-01-01T17:00:00"],["2024-01-02T09:00:00"]]`.
//!
//! # Concurrency
//!
//! Nothing is locked. Two processes writing the same timer race and the last
//! write wins; each individual write is atomic.

mod backend;
mod codec;
mod error;
mod punchclock;
mod store;

pub use backend::{Backend, DirBackend, FILE_PREFIX, MemoryBackend};
pub use codec::{decode, encode};
pub use error::{PunchclockError, StoreError};
pub use punchclock::{ClockedIn, Confirm, Lookup, Punchclock};
pub use store::IntervalStore;
