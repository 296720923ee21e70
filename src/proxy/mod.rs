//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Route::Upstream
//!     → handler.rs (log "request received")
//!     → upstream.rs (origin + path + query)
//!     → hyper client (same method, headers, streamed body)
//!     → relay status/headers/body verbatim, log "request completed"
//!     → or 500 {"error":"Proxy error"}, log "request failed"
//! ```
//!
//! # Design Decisions
//! - Upstream 4xx/5xx are ordinary responses, never failures
//! - Bodies stream in both directions; nothing is buffered
//! - No retries and no timeouts beyond the transport defaults

pub mod handler;
pub mod upstream;

pub use handler::forward;
pub use upstream::{Upstream, UpstreamError};
