//! Naming rules: where a service lives and what its messages are called.

use pblint_core::{EntityRef, MessageRef, SchemaFile, Service, Violation, ViolationKind};

use crate::case::{expected_file_name, expected_request_name, expected_response_name};
use crate::scope::MethodScope;

/// The file declaring `service` must be named after it in snake case.
///
/// Only the last path segment of the file name is compared.
#[must_use]
pub fn check_file_name(file: &SchemaFile, service: &Service) -> Option<Violation> {
    let want = expected_file_name(&service.name);
    let got = file.base_name();

    (want != got).then(|| {
        Violation::mismatch(
            ViolationKind::FileName,
            EntityRef::service(&file.name, &service.name),
            want,
            got,
        )
    })
}

/// The input type must be named `<Method>Request`.
#[must_use]
pub fn check_request_type_name(scope: &MethodScope<'_>) -> Option<Violation> {
    type_name(
        scope,
        ViolationKind::RequestTypeName,
        expected_request_name(&scope.method.name),
        &scope.method.input,
    )
}

/// The output type must be named `<Method>Response`.
#[must_use]
pub fn check_response_type_name(scope: &MethodScope<'_>) -> Option<Violation> {
    type_name(
        scope,
        ViolationKind::ResponseTypeName,
        expected_response_name(&scope.method.name),
        &scope.method.output,
    )
}

/// The input type must be declared in the same file as the service.
#[must_use]
pub fn check_request_type_location(scope: &MethodScope<'_>) -> Option<Violation> {
    type_location(scope, ViolationKind::RequestTypeLocation, &scope.method.input)
}

/// The output type must be declared in the same file as the service.
#[must_use]
pub fn check_response_type_location(scope: &MethodScope<'_>) -> Option<Violation> {
    type_location(scope, ViolationKind::ResponseTypeLocation, &scope.method.output)
}

fn type_name(
    scope: &MethodScope<'_>,
    kind: ViolationKind,
    want: String,
    message: &MessageRef,
) -> Option<Violation> {
    (message.name != want)
        .then(|| Violation::mismatch(kind, scope.entity(), want, message.name.as_str()))
}

fn type_location(
    scope: &MethodScope<'_>,
    kind: ViolationKind,
    message: &MessageRef,
) -> Option<Violation> {
    (message.file != scope.file.name).then(|| {
        Violation::mismatch(
            kind,
            scope.entity(),
            scope.file.name.as_str(),
            message.file.as_str(),
        )
    })
}
