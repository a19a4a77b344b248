//! Naming derivations shared by the rules.

use convert_case::{Case, Casing};

/// Extension of schema files.
pub const PROTO_EXTENSION: &str = ".proto";

/// Snake-case form of a PascalCase or camelCase identifier.
///
/// Consecutive capitals stay together as one word (`HTTPServer` becomes
/// `http_server`).
#[must_use]
pub fn snake_case(ident: &str) -> String {
    ident.to_case(Case::Snake)
}

/// File name a service is expected to be declared in.
#[must_use]
pub fn expected_file_name(service: &str) -> String {
    format!("{}{PROTO_EXTENSION}", snake_case(service))
}

/// Name a method's request message is expected to have.
#[must_use]
pub fn expected_request_name(method: &str) -> String {
    format!("{method}Request")
}

/// Name a method's response message is expected to have.
#[must_use]
pub fn expected_response_name(method: &str) -> String {
    format!("{method}Response")
}

/// URL a method's HTTP binding is expected to target.
#[must_use]
pub fn expected_url(service: &str, method: &str) -> String {
    format!("/{service}/{method}")
}
