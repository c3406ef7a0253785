//! # assura-client
//!
//! Authenticated HTTP clients for the Assura upstream services.
//!
//! This crate provides the thin layer every tool call goes through:
//! - [`ClientFactory`] — the single construction path, parameterized by
//!   service family and auth source
//! - [`ServiceClient`] — verb methods that inject `Authorization` and tenant
//!   headers and normalize non-2xx responses into [`assura_core::Error`]
//! - [`QueryParams`] — query-string serialization (nulls skipped, arrays as
//!   repeated keys)
//!
//! ```rust,ignore
//! let factory = ClientFactory::new(config)?;
//! let client = factory.client(ServiceFamily::Claims, AuthSource::Token(token), Some("acme"))?;
//! let claim = client.get("/api/v1/claims/CLM-1", &QueryParams::new()).await?;
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod factory;
pub mod query;
pub mod response;

pub use client::{ServiceClient, TENANT_HEADER};
pub use factory::{ClientFactory, TENANT_PARAM};
pub use query::QueryParams;
pub use response::{error_message, fallback_message};

/// Re-exported so callers don't need a direct `reqwest` dependency.
pub use reqwest::Method;
