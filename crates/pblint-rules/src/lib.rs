//! # pblint-rules
//!
//! The fixed convention rule set for service-definition schemas and the
//! engine that applies it.
//!
//! - [`naming`]: file name, request/response type names and locations
//! - [`http`]: presence and shape of the `google.api.http` binding
//! - [`placement`]: model messages kept out of `_service.proto` files
//! - [`engine`]: ordered traversal and violation aggregation
//!
//! Every rule is a pure function returning `Option<Violation>`; none of them
//! depends on another rule's outcome.

pub mod case;
pub mod engine;
pub mod http;
pub mod naming;
pub mod placement;
mod scope;

pub use engine::{LintReport, lint, lint_report};
pub use scope::MethodScope;
