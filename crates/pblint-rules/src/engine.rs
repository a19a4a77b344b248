//! Rule engine: walk the schema tree and collect every violation.
//!
//! Traversal order is file order; within a file, each service (its file-name
//! check, then its methods in order) and then each top-level message. Within
//! a method, naming rules run before HTTP rules. Rules never short-circuit one
//! another, apart from the HTTP group collapsing to a single not-found
//! violation when the binding cannot be extracted.

use pblint_core::{SchemaFile, Service, Violation};
use serde::Serialize;
use tracing::{debug, info};

use crate::http::check_http;
use crate::naming::{
    check_file_name, check_request_type_location, check_request_type_name,
    check_response_type_location, check_response_type_name,
};
use crate::placement::check_model_message_placement;
use crate::scope::MethodScope;

/// Outcome of one lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub files_checked: usize,
    pub services_checked: usize,
    pub methods_checked: usize,
    pub messages_checked: usize,
    pub violations: Vec<Violation>,
}

impl LintReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Lint `files` and return every violation in traversal order.
///
/// An empty result means the schema follows every convention.
#[must_use]
pub fn lint(files: &[SchemaFile]) -> Vec<Violation> {
    lint_report(files).violations
}

/// Lint `files` and return the violations together with traversal counts.
#[must_use]
pub fn lint_report(files: &[SchemaFile]) -> LintReport {
    let mut report = LintReport::default();

    for file in files {
        debug!(file = %file.name, "linting schema file");
        report.files_checked += 1;

        for service in &file.services {
            lint_service(file, service, &mut report);
        }

        for message in &file.messages {
            report.messages_checked += 1;
            report
                .violations
                .extend(check_model_message_placement(file, message));
        }
    }

    info!(
        files = report.files_checked,
        services = report.services_checked,
        methods = report.methods_checked,
        messages = report.messages_checked,
        violations = report.violations.len(),
        "lint finished"
    );

    report
}

fn lint_service(file: &SchemaFile, service: &Service, report: &mut LintReport) {
    debug!(service = %service.name, methods = service.methods.len(), "linting service");
    report.services_checked += 1;
    report.violations.extend(check_file_name(file, service));

    for method in &service.methods {
        let scope = MethodScope::new(file, service, method);
        report.methods_checked += 1;

        report.violations.extend(
            [
                check_request_type_name(&scope),
                check_response_type_name(&scope),
                check_request_type_location(&scope),
                check_response_type_location(&scope),
            ]
            .into_iter()
            .flatten(),
        );
        report.violations.extend(check_http(&scope));
    }
}
