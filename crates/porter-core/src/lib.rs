//! Core types for the Porter identity gateway.
//!
//! ## Module Organization
//!
//! - `account`: Local account records and the insert shape used for provisioning
//! - `config`: Settings loading (`.env`, environment, `config.toml`) and validation
//! - `constants`: Route components and default header names shared across crates
//! - `error`: Core error type
//! - `identity`: Upstream-asserted identity, local session snapshot, friend classification

pub mod account;
pub mod config;
pub mod constants;
pub mod error;
pub mod identity;
