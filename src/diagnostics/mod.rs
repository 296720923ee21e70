//! Diagnostic endpoints over the event log.
//!
//! - `/_logs`: HTML viewer polling the JSON API
//! - `/_logs/api`: recent entries, newest first
//! - `/_logs/clear` (POST): drop every entry
//! - `/_health`: liveness plus current entry count

pub mod handlers;
pub mod page;

pub use handlers::{clear_logs, health, list_logs, log_page, ClearResponse, HealthResponse, ListParams, LogsResponse};
