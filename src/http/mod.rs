//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, dispatch, graceful shutdown)
//!     → request.rs (request ID span, client IP, original URL)
//!     → routing::dispatcher (diagnostics or upstream)
//!     → diagnostics / proxy handler
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{client_ip, original_url, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
