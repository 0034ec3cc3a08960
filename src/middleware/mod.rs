//! Middleware components for HTTP request processing.
//!
//! - [`device`]: user-agent based redirect between the root and mobile pages
//! - [`security_headers`]: hardening and caching headers on every response
//! - [`validation`]: early rejection of traversal attempts and write methods

pub mod device;
pub mod security_headers;
pub mod validation;

pub use device::{classify, device_router_middleware, redirect_target, DeviceClass};
