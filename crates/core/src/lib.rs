//! Scrutin Core - Shared types library.
//!
//! This crate provides common types used across all Scrutin components:
//! - `client` - HTTP client library for the survey service
//! - `cli` - Command-line frontend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Payload
//! types mirror what the remote service sends and are deliberately tolerant:
//! the client displays them, it does not validate them.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, survey/user payloads, and the session record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
