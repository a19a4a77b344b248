//! Violation records produced by the rule engine.
//!
//! A violation is data, never an error: the engine collects every one of
//! them in traversal order and hands the full list to the caller.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// ViolationKind
// ---------------------------------------------------------------------------

/// Which convention a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    FileName,
    RequestTypeName,
    ResponseTypeName,
    RequestTypeLocation,
    ResponseTypeLocation,
    HttpRuleNotFound,
    HttpMethod,
    HttpBody,
    HttpAdditionalBindings,
    HttpUrl,
    ModelMessageInServiceFile,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileName => "file_name",
            Self::RequestTypeName => "request_type_name",
            Self::ResponseTypeName => "response_type_name",
            Self::RequestTypeLocation => "request_type_location",
            Self::ResponseTypeLocation => "response_type_location",
            Self::HttpRuleNotFound => "http_rule_not_found",
            Self::HttpMethod => "http_method",
            Self::HttpBody => "http_body",
            Self::HttpAdditionalBindings => "http_additional_bindings",
            Self::HttpUrl => "http_url",
            Self::ModelMessageInServiceFile => "model_message_in_service_file",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityRef
// ---------------------------------------------------------------------------

/// The schema entity a violation is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum EntityRef {
    Service {
        file: String,
        service: String,
    },
    Method {
        file: String,
        service: String,
        method: String,
    },
    Message {
        file: String,
        message: String,
    },
}

impl EntityRef {
    #[must_use]
    pub fn service(file: &str, service: &str) -> Self {
        Self::Service {
            file: file.to_string(),
            service: service.to_string(),
        }
    }

    #[must_use]
    pub fn method(file: &str, service: &str, method: &str) -> Self {
        Self::Method {
            file: file.to_string(),
            service: service.to_string(),
            method: method.to_string(),
        }
    }

    #[must_use]
    pub fn message(file: &str, message: &str) -> Self {
        Self::Message {
            file: file.to_string(),
            message: message.to_string(),
        }
    }

    /// Name of the file the entity is declared in.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::Service { file, .. } | Self::Method { file, .. } | Self::Message { file, .. } => {
                file
            }
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service { file, service } => write!(f, "{file}: {service}"),
            Self::Method {
                file,
                service,
                method,
            } => write!(f, "{file}: {service}.{method}"),
            Self::Message { file, message } => write!(f, "{file}: {message}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Violation
// ---------------------------------------------------------------------------

/// One convention-check failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    pub kind: ViolationKind,
    pub entity: EntityRef,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Violation {
    #[must_use]
    pub const fn new(kind: ViolationKind, entity: EntityRef) -> Self {
        Self {
            kind,
            entity,
            expected: None,
            actual: None,
        }
    }

    /// A violation carrying both the expected and the declared value.
    #[must_use]
    pub fn mismatch(
        kind: ViolationKind,
        entity: EntityRef,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity,
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    #[must_use]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Human-readable description without the entity prefix.
    #[must_use]
    pub fn message(&self) -> String {
        let expected = self.expected.as_deref().unwrap_or_default();
        let actual = self.actual.as_deref().unwrap_or_default();

        match self.kind {
            ViolationKind::FileName => {
                format!("file name must be {expected}, got={actual}")
            }
            ViolationKind::RequestTypeName => {
                format!("request type name want={expected}, got={actual}")
            }
            ViolationKind::ResponseTypeName => {
                format!("response type name want={expected}, got={actual}")
            }
            ViolationKind::RequestTypeLocation => {
                format!("request type must be in {expected}, got={actual}")
            }
            ViolationKind::ResponseTypeLocation => {
                format!("response type must be in {expected}, got={actual}")
            }
            ViolationKind::HttpRuleNotFound => "HTTP rule not found".to_string(),
            ViolationKind::HttpMethod => {
                format!("HTTP rule method must use GET or POST, got={actual}")
            }
            ViolationKind::HttpBody => format!("HTTP rule body must be *, got={actual}"),
            ViolationKind::HttpAdditionalBindings => {
                format!("HTTP rule must not use additional bindings, got={actual}")
            }
            ViolationKind::HttpUrl => format!("HTTP URL want={expected}, got={actual}"),
            ViolationKind::ModelMessageInServiceFile => format!(
                "model message must not be declared in a _service.proto file, got={actual}"
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}: {}", self.entity, self.message())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 5)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("entity", &self.entity)?;
        state.serialize_field("expected", &self.expected)?;
        state.serialize_field("actual", &self.actual)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
