//! # pblint-loader
//!
//! Schema loader for pblint.
//!
//! Compiles `.proto` files with `protox` (no `protoc` required), then walks
//! the resulting `prost-reflect` descriptor pool to build the read-only
//! [`pblint_core::SchemaFile`] tree the rule engine consumes. Imports are
//! resolved against the given include directories but only the requested
//! files are returned.

mod convert;
mod error;
mod loader;

pub use error::LoaderError;
pub use loader::parse;
