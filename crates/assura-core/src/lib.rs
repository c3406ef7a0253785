//! Assura Core — shared errors and service configuration.
//!
//! This crate provides the foundational types used across all Assura crates.
//! It has no internal Assura dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`config`]: Service families, upstream endpoints, gateway configuration

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{GatewayConfig, ServiceEndpoint, ServiceFamily, validate_tenant_id};
pub use error::{Error, Result};
