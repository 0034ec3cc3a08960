//! # Folio Backend Library
//!
//! Core library for Folio, a portfolio site for a motion graphics designer.
//! It lists media folders under a public asset root, arranges the files into
//! gallery grids (a periodic-table layout for the daily works, flowing grids
//! for everything else) and serves the result as JSON and server-rendered HTML.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **Tokio**: async runtime; directory reads run on the blocking pool
//! - **Maud**: compile-time HTML templates
//! - **Serde**: JSON listings and layouts
//!
//! ## Core Components
//!
//! - [`assets`]: media folder listing with extension filters and natural ordering
//! - [`config`]: layered configuration (embedded defaults, file, environment)
//! - [`error`]: HTTP error responses
//! - [`gallery`]: gallery catalog, hover state and the enlarge modal
//! - [`layout`]: grid templates and the file-to-cell assignment
//! - [`metrics`]: request counters
//! - [`middleware`]: device routing, security headers and request validation
//! - [`render`]: HTML pages
//! - [`routes`]: HTTP handlers and router assembly
//! - [`state`]: shared application state
//! - [`types`]: categories, media kinds and response types

pub mod assets;
pub mod config;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod metrics;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
