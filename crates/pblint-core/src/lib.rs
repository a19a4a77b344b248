//! # pblint-core
//!
//! Core types shared across all pblint crates.
//!
//! This crate provides:
//! - The read-only schema model (files, services, methods, message types)
//!   produced by a schema loader and consumed by the rule engine
//! - The generic per-method option map and the typed HTTP binding decoded from it
//! - The `Violation` record reported for every convention failure
//! - Cross-cutting error types

pub mod error;
pub mod http;
pub mod schema;
pub mod violation;

pub use error::BindingError;
pub use http::{CustomPattern, HTTP_RULE_EXTENSION, HttpBinding, HttpPattern};
pub use schema::{MessageRef, MessageType, Method, OptionMap, SchemaFile, Service};
pub use violation::{EntityRef, Violation, ViolationKind};
