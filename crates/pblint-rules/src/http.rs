//! HTTP binding rules.
//!
//! Every method must carry a `google.api.http` binding using GET or POST at
//! `/<Service>/<Method>`, with no additional bindings and, for POST, the
//! whole request as body.

use pblint_core::{HttpBinding, HttpPattern, Violation, ViolationKind};
use tracing::debug;

use crate::case::expected_url;
use crate::scope::MethodScope;

/// Body template required for POST bindings.
pub const POST_BODY: &str = "*";

/// Run every HTTP rule for one method.
///
/// When the binding cannot be extracted, only the not-found violation is
/// reported; the dependent checks have nothing to inspect.
#[must_use]
pub fn check_http(scope: &MethodScope<'_>) -> Vec<Violation> {
    let binding = match extract_binding(scope) {
        Ok(binding) => binding,
        Err(violation) => return vec![violation],
    };

    [
        check_method_kind(scope, &binding),
        check_body(scope, &binding),
        check_additional_bindings(scope, &binding),
        check_url(scope, &binding),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Decode the binding from the method's options.
///
/// # Errors
///
/// Returns an `HttpRuleNotFound` violation when the option is absent or does
/// not have the binding shape.
pub fn extract_binding(scope: &MethodScope<'_>) -> Result<HttpBinding, Violation> {
    HttpBinding::from_options(&scope.method.options).map_err(|error| {
        debug!(method = %scope.entity(), %error, "HTTP binding unavailable");
        Violation::new(ViolationKind::HttpRuleNotFound, scope.entity())
    })
}

/// The binding must use GET or POST.
#[must_use]
pub fn check_method_kind(scope: &MethodScope<'_>, binding: &HttpBinding) -> Option<Violation> {
    match &binding.pattern {
        Some(HttpPattern::Get(_) | HttpPattern::Post(_)) => None,
        Some(pattern) => Some(
            Violation::new(ViolationKind::HttpMethod, scope.entity()).with_actual(pattern.verb()),
        ),
        None => Some(Violation::new(ViolationKind::HttpMethod, scope.entity()).with_actual("none")),
    }
}

/// POST bindings must map the whole request to the body. GET is not checked.
#[must_use]
pub fn check_body(scope: &MethodScope<'_>, binding: &HttpBinding) -> Option<Violation> {
    match binding.pattern {
        Some(HttpPattern::Post(_)) if binding.body != POST_BODY => Some(Violation::mismatch(
            ViolationKind::HttpBody,
            scope.entity(),
            POST_BODY,
            binding.body.as_str(),
        )),
        _ => None,
    }
}

/// The binding must not declare additional bindings.
#[must_use]
pub fn check_additional_bindings(
    scope: &MethodScope<'_>,
    binding: &HttpBinding,
) -> Option<Violation> {
    let count = binding.additional_bindings.len();

    (count != 0).then(|| {
        Violation::new(ViolationKind::HttpAdditionalBindings, scope.entity())
            .with_actual(count.to_string())
    })
}

/// GET and POST bindings must target `/<Service>/<Method>`.
///
/// Other patterns are left to [`check_method_kind`].
#[must_use]
pub fn check_url(scope: &MethodScope<'_>, binding: &HttpBinding) -> Option<Violation> {
    let got = match &binding.pattern {
        Some(HttpPattern::Get(url) | HttpPattern::Post(url)) => url,
        _ => return None,
    };
    let want = expected_url(&scope.service.name, &scope.method.name);

    (*got != want)
        .then(|| Violation::mismatch(ViolationKind::HttpUrl, scope.entity(), want, got.as_str()))
}

#[cfg(test)]
mod tests {
    use pblint_core::{HTTP_RULE_EXTENSION, MessageRef, Method, SchemaFile, Service};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn kinds(file: &SchemaFile, service: &Service, method: &Method) -> Vec<ViolationKind> {
        check_http(&MethodScope::new(file, service, method))
            .into_iter()
            .map(|v| v.kind)
            .collect()
    }

    fn fixture(binding: Option<Value>) -> (SchemaFile, Service, Method) {
        let mut method = Method::new(
            "GetUser",
            MessageRef::new("GetUserRequest", "user_service.proto"),
            MessageRef::new("GetUserResponse", "user_service.proto"),
        );
        if let Some(binding) = binding {
            method = method.with_option(HTTP_RULE_EXTENSION, binding);
        }
        (
            SchemaFile::new("user_service.proto"),
            Service::new("UserService"),
            method,
        )
    }

    #[test]
    fn clean_post_binding_has_no_violations() {
        let (file, service, method) = fixture(Some(json!({
            "post": "/UserService/GetUser",
            "body": "*"
        })));
        assert_eq!(kinds(&file, &service, &method), vec![]);
    }

    #[test]
    fn missing_binding_reports_only_not_found() {
        let (file, service, method) = fixture(None);
        assert_eq!(
            kinds(&file, &service, &method),
            vec![ViolationKind::HttpRuleNotFound]
        );
    }

    #[test]
    fn malformed_binding_reports_only_not_found() {
        let (file, service, method) = fixture(Some(json!(["get", "/UserService/GetUser"])));
        assert_eq!(
            kinds(&file, &service, &method),
            vec![ViolationKind::HttpRuleNotFound]
        );
    }

    #[rstest]
    #[case(json!({"get": 5}))]
    #[case(json!({"get": null}))]
    #[case(json!({"custom": "HEAD /x"}))]
    #[case(json!({"get": "/UserService/GetUser", "post": "/UserService/GetUser"}))]
    fn mistyped_pattern_reports_only_not_found(#[case] binding: Value) {
        let (file, service, method) = fixture(Some(binding));
        assert_eq!(
            kinds(&file, &service, &method),
            vec![ViolationKind::HttpRuleNotFound]
        );
    }

    #[test]
    fn get_body_is_never_checked() {
        let (file, service, method) = fixture(Some(json!({
            "get": "/UserService/GetUser",
            "body": "user"
        })));
        assert_eq!(kinds(&file, &service, &method), vec![]);
    }

    #[test]
    fn get_with_additional_bindings_is_reported() {
        let (file, service, method) = fixture(Some(json!({
            "get": "/UserService/GetUser",
            "additionalBindings": [{"get": "/v2/UserService/GetUser"}]
        })));
        let violations = check_http(&MethodScope::new(&file, &service, &method));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::HttpAdditionalBindings);
        assert_eq!(violations[0].actual.as_deref(), Some("1"));
    }

    #[test]
    fn post_body_mismatch_reports_actual_value() {
        let (file, service, method) = fixture(Some(json!({
            "post": "/UserService/GetUser",
            "body": "user"
        })));
        let violations = check_http(&MethodScope::new(&file, &service, &method));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::HttpBody);
        assert_eq!(violations[0].actual.as_deref(), Some("user"));
    }

    #[test]
    fn url_mismatch_cites_both_urls() {
        let (file, service, method) = fixture(Some(json!({"get": "/v1/users/{id}"})));
        let violations = check_http(&MethodScope::new(&file, &service, &method));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::HttpUrl);
        assert_eq!(
            violations[0].expected.as_deref(),
            Some("/UserService/GetUser")
        );
        assert_eq!(violations[0].actual.as_deref(), Some("/v1/users/{id}"));
    }

    #[rstest]
    #[case(json!({"put": "/x", "body": "*"}), "PUT")]
    #[case(json!({"delete": "/x"}), "DELETE")]
    #[case(json!({"patch": "/x", "body": "*"}), "PATCH")]
    #[case(json!({"custom": {"kind": "HEAD", "path": "/x"}}), "HEAD")]
    #[case(json!({"body": "*"}), "none")]
    fn other_verbs_report_method_kind_only(#[case] binding: Value, #[case] verb: &str) {
        let (file, service, method) = fixture(Some(binding));
        let violations = check_http(&MethodScope::new(&file, &service, &method));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::HttpMethod);
        assert_eq!(violations[0].actual.as_deref(), Some(verb));
    }

    #[test]
    fn dependent_checks_all_run_together() {
        let (file, service, method) = fixture(Some(json!({
            "post": "/wrong",
            "body": "",
            "additionalBindings": [{"get": "/a"}, {"get": "/b"}]
        })));
        assert_eq!(
            kinds(&file, &service, &method),
            vec![
                ViolationKind::HttpBody,
                ViolationKind::HttpAdditionalBindings,
                ViolationKind::HttpUrl,
            ]
        );
    }
}
