//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → dispatcher.rs (ordered rule table)
//!     → Return: diagnostic Route or Route::Upstream
//! ```
//!
//! # Design Decisions
//! - Exact, case-sensitive path comparison
//! - Deterministic: same input always matches same route
//! - First match wins; no match means forward upstream

pub mod dispatcher;

pub use dispatcher::Route;
