//! Read-only schema model consumed by the rule engine.
//!
//! A loader builds the whole tree once per run; nothing in pblint mutates it
//! afterwards. Ordering of every `Vec` is declaration order and drives the
//! order in which violations are reported.
//!
//! ```text
//! SchemaFile ─┬─ Service ── Method ─┬─ input  → MessageRef (name, declaring file)
//!             │                     ├─ output → MessageRef
//!             │                     └─ options (extension name → JSON value)
//!             └─ MessageType
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Options attached to a method, keyed by fully-qualified extension name
/// (e.g. `google.api.http`).
///
/// Values are kept untyped; rules decode the shape they need and treat a
/// decode failure as a finding rather than a crash.
pub type OptionMap = BTreeMap<String, serde_json::Value>;

/// A single schema definition unit, identified by its path-like name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Path-like name, e.g. `a/b/user_service.proto`.
    pub name: String,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub messages: Vec<MessageType>,
}

impl SchemaFile {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            services: Vec::new(),
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: MessageType) -> Self {
        self.messages.push(message);
        self
    }

    /// Last `/`-separated segment of the file name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// An RPC service declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Service {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

/// One RPC method of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub input: MessageRef,
    pub output: MessageRef,
    #[serde(default)]
    pub options: OptionMap,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, input: MessageRef, output: MessageRef) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            options: OptionMap::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, extension: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(extension.into(), value);
        self
    }
}

/// Reference from a method to the message type it consumes or produces.
///
/// The referenced message may be declared in a different file than the
/// method's service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    /// Simple (unqualified) message name.
    pub name: String,
    /// Name of the file declaring the message.
    pub file: String,
}

impl MessageRef {
    #[must_use]
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// A top-level message declared in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageType {
    pub name: String,
}

impl MessageType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
