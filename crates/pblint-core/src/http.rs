//! Typed view of the `google.api.http` method annotation.
//!
//! Loaders hand methods over with an untyped [`OptionMap`]; this module owns
//! the decode-or-error step that turns the binding entry into an
//! [`HttpBinding`]. Both proto-JSON (`additionalBindings`) and proto field
//! names (`additional_bindings`) are accepted.

use serde::{Deserialize, Serialize};

use crate::error::BindingError;
use crate::schema::OptionMap;

/// Fully-qualified name of the HTTP binding extension on `MethodOptions`.
pub const HTTP_RULE_EXTENSION: &str = "google.api.http";

/// HTTP binding attached to an RPC method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHttpBinding")]
pub struct HttpBinding {
    pub selector: String,

    /// Verb and URL template. `None` when the annotation sets no pattern.
    #[serde(flatten)]
    pub pattern: Option<HttpPattern>,

    /// Request field mapped to the HTTP body; `*` maps the whole request.
    pub body: String,

    pub response_body: String,

    pub additional_bindings: Vec<HttpBinding>,
}

/// Wire shape of a binding before the `pattern` oneof is resolved.
///
/// Each oneof key keeps its raw value so that a key that is present but
/// mistyped fails the decode instead of reading as "no pattern".
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHttpBinding {
    #[serde(default)]
    selector: String,
    #[serde(default, deserialize_with = "present")]
    get: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    put: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    post: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    delete: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    patch: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    custom: Option<serde_json::Value>,
    #[serde(default)]
    body: String,
    #[serde(default, alias = "response_body")]
    response_body: String,
    #[serde(default, alias = "additional_bindings")]
    additional_bindings: Vec<HttpBinding>,
}

// A key set to `null` still counts as present.
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl TryFrom<RawHttpBinding> for HttpBinding {
    type Error = String;

    fn try_from(raw: RawHttpBinding) -> Result<Self, Self::Error> {
        let mut patterns = [
            ("get", raw.get),
            ("put", raw.put),
            ("post", raw.post),
            ("delete", raw.delete),
            ("patch", raw.patch),
            ("custom", raw.custom),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)));

        let pattern = match (patterns.next(), patterns.next()) {
            (None, _) => None,
            (Some((key, value)), None) => Some(pattern_of(key, value)?),
            (Some((first, _)), Some((second, _))) => {
                return Err(format!(
                    "pattern is a oneof but both '{first}' and '{second}' are set"
                ));
            }
        };

        Ok(Self {
            selector: raw.selector,
            pattern,
            body: raw.body,
            response_body: raw.response_body,
            additional_bindings: raw.additional_bindings,
        })
    }
}

fn pattern_of(key: &str, value: serde_json::Value) -> Result<HttpPattern, String> {
    let path = |value| {
        serde_json::from_value::<String>(value)
            .map_err(|error| format!("pattern '{key}' must be a string: {error}"))
    };

    Ok(match key {
        "get" => HttpPattern::Get(path(value)?),
        "put" => HttpPattern::Put(path(value)?),
        "post" => HttpPattern::Post(path(value)?),
        "delete" => HttpPattern::Delete(path(value)?),
        "patch" => HttpPattern::Patch(path(value)?),
        _ => HttpPattern::Custom(
            serde_json::from_value(value)
                .map_err(|error| format!("pattern 'custom' must be an object: {error}"))?,
        ),
    })
}

impl HttpBinding {
    /// Decode the binding from a method's options.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Missing`] when no entry exists under
    /// [`HTTP_RULE_EXTENSION`], and [`BindingError::Malformed`] when the entry
    /// is not an object of the binding shape.
    pub fn from_options(options: &OptionMap) -> Result<Self, BindingError> {
        let value = options
            .get(HTTP_RULE_EXTENSION)
            .ok_or_else(|| BindingError::Missing {
                extension: HTTP_RULE_EXTENSION.to_string(),
            })?;

        Self::deserialize(value).map_err(|source| BindingError::Malformed {
            extension: HTTP_RULE_EXTENSION.to_string(),
            source,
        })
    }
}

/// The oneof `pattern` of an HTTP binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpPattern {
    Get(String),
    Put(String),
    Post(String),
    Delete(String),
    Patch(String),
    Custom(CustomPattern),
}

impl HttpPattern {
    /// Upper-case HTTP verb (the custom kind as written for `custom`).
    #[must_use]
    pub fn verb(&self) -> &str {
        match self {
            Self::Get(_) => "GET",
            Self::Put(_) => "PUT",
            Self::Post(_) => "POST",
            Self::Delete(_) => "DELETE",
            Self::Patch(_) => "PATCH",
            Self::Custom(custom) => &custom.kind,
        }
    }

    /// URL template of the pattern.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Get(path)
            | Self::Put(path)
            | Self::Post(path)
            | Self::Delete(path)
            | Self::Patch(path) => path,
            Self::Custom(custom) => &custom.path,
        }
    }
}

/// A pattern with a verb outside the predefined set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPattern {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn options(value: serde_json::Value) -> OptionMap {
        OptionMap::from([(HTTP_RULE_EXTENSION.to_string(), value)])
    }

    #[test]
    fn decodes_get_binding() {
        let binding = HttpBinding::from_options(&options(json!({"get": "/UserService/GetUser"})))
            .expect("binding decodes");

        assert_eq!(
            binding.pattern,
            Some(HttpPattern::Get("/UserService/GetUser".to_string()))
        );
        assert!(binding.body.is_empty());
        assert!(binding.additional_bindings.is_empty());
    }

    #[test]
    fn decodes_nested_additional_bindings_in_both_spellings() {
        let camel = options(json!({
            "post": "/S/M",
            "body": "*",
            "additionalBindings": [{"get": "/S/M/alt"}]
        }));
        let snake = options(json!({
            "post": "/S/M",
            "body": "*",
            "additional_bindings": [{"get": "/S/M/alt"}]
        }));

        let camel = HttpBinding::from_options(&camel).expect("camelCase decodes");
        let snake = HttpBinding::from_options(&snake).expect("snake_case decodes");

        assert_eq!(camel, snake);
        assert_eq!(camel.body, "*");
        assert_eq!(
            camel.additional_bindings[0].pattern,
            Some(HttpPattern::Get("/S/M/alt".to_string()))
        );
    }

    #[test]
    fn decodes_custom_pattern() {
        let binding = HttpBinding::from_options(&options(json!({
            "custom": {"kind": "HEAD", "path": "/S/M"}
        })))
        .expect("binding decodes");

        let pattern = binding.pattern.expect("pattern set");
        assert_eq!(pattern.verb(), "HEAD");
        assert_eq!(pattern.path(), "/S/M");
    }

    #[test]
    fn binding_without_pattern_decodes_to_none() {
        let binding =
            HttpBinding::from_options(&options(json!({"body": "*"}))).expect("binding decodes");
        assert_eq!(binding.pattern, None);
    }

    #[test]
    fn missing_option_is_reported_as_missing() {
        let err = HttpBinding::from_options(&OptionMap::new()).expect_err("no binding");
        assert!(matches!(err, BindingError::Missing { .. }));
    }

    #[test]
    fn mistyped_pattern_is_reported_as_malformed() {
        for value in [
            json!({"get": 5}),
            json!({"get": null}),
            json!({"custom": "x"}),
            json!({"post": "/S/M", "get": "/S/M"}),
        ] {
            let err = HttpBinding::from_options(&options(value.clone()))
                .expect_err("mistyped pattern must not decode");
            assert!(
                matches!(err, BindingError::Malformed { .. }),
                "{value} gave {err}"
            );
        }
    }

    #[test]
    fn mistyped_nested_binding_is_reported_as_malformed() {
        let err = HttpBinding::from_options(&options(json!({
            "get": "/S/M",
            "additionalBindings": [{"get": ["/S/M"]}]
        })))
        .expect_err("nested binding must not decode");
        assert!(matches!(err, BindingError::Malformed { .. }));
    }

    #[test]
    fn non_object_option_is_reported_as_malformed() {
        let err = HttpBinding::from_options(&options(json!("GET /x"))).expect_err("bad shape");
        assert!(matches!(err, BindingError::Malformed { .. }));
    }
}
