//! # Wolkenliste Backend Library
//!
//! Wolkenliste turns a cloud-drive directory snapshot into a ready-to-display
//! listing: one row per entry with icon, formatted size and timestamp, a
//! download link per configured mirror host (or a permalink for folders), and
//! the bulk-selection state behind the "select all" checkbox.
//!
//! ## Architecture
//!
//! The listing logic in [`listing`] is plain synchronous Rust with no I/O.
//! A thin REST surface exposes it:
//! - **Axum**: HTTP server and routing
//! - **Tokio**: Async runtime
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`listing`]: Link building, row rendering, selection tracking
//! - [`metrics`]: Request counters
//! - [`middleware`]: Security headers
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`types`]: Request/response bodies

pub mod config;
pub mod error;
pub mod listing;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
