//! Contact Transport - Production HTTP Handler
//!
//! Implements [`contact_core::ContactTransport`] over HTTP. The handler is
//! deliberately thin: it reports the raw status code and leaves its
//! interpretation (created vs anything else) to the submission workflow.

#![forbid(unsafe_code)]

/// Endpoint configuration
pub mod config;

/// Reqwest-backed transport handler
pub mod http;

pub use config::TransportConfig;
pub use http::HttpContactTransport;
