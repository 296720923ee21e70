//! In-memory event log subsystem.
//!
//! # Data Flow
//! ```text
//! proxy handler event
//!     → entry.rs (LogEntry stamped with time, request URL, client IP)
//!     → store.rs (bounded, newest-first buffer shared via Arc)
//!     → diagnostics (HTML page, JSON listing, health)
//! ```
//!
//! # Design Decisions
//! - The store is constructed once at startup and passed through AppState
//! - Entries are immutable once appended
//! - Capacity overflow evicts the oldest entries first

pub mod entry;
pub mod store;

pub use entry::{LogEntry, EVENT_COMPLETED, EVENT_FAILED, EVENT_RECEIVED};
pub use store::{LogStore, MAX_LOG_ENTRIES};
