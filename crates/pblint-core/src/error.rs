//! Cross-cutting error types for pblint.
//!
//! Convention failures are never errors; they are reported as
//! [`Violation`](crate::Violation) values. The types here cover the few
//! places where decoding can fail and the caller must decide what to do.

use thiserror::Error;

/// Failure to obtain a typed HTTP binding from a method's options.
#[derive(Debug, Error)]
pub enum BindingError {
    /// The method carries no option under the binding extension name.
    #[error("HTTP binding option '{extension}' is not set")]
    Missing { extension: String },

    /// The option is present but does not have the binding shape.
    #[error("HTTP binding option '{extension}' is malformed: {source}")]
    Malformed {
        extension: String,
        #[source]
        source: serde_json::Error,
    },
}
