//! Validation schema for the registration form.
//!
//! Validation is per field and independent. The only conditional is the
//! location section: its fields are checked only while it is shown, which
//! the caller states through [`ValidationContext`].

pub mod checks;
mod issue;
mod report;
pub mod schema;

pub use issue::{Category, CharClass, Check, Issue, PatternKind};
pub use report::ValidationReport;
pub use schema::{FieldSpec, Requirement, Rule, SCHEMA, ValidationContext, spec_for};

use tracing::debug;

use regform_model::{Field, FormValues};

/// Validate one field against its current value.
///
/// Returns no issues for a field that is inactive in `ctx`.
pub fn validate_field(field: Field, value: &str, ctx: &ValidationContext) -> Vec<Issue> {
    let Some(spec) = spec_for(field) else {
        return Vec::new();
    };
    if !spec.applies(ctx) {
        return Vec::new();
    }
    let issues = checks::check_field(spec, value);
    debug!(field = %field, issue_count = issues.len(), "validated field");
    issues
}

/// Validate every active field of the form.
pub fn validate_form(values: &FormValues, ctx: &ValidationContext) -> ValidationReport {
    let mut report = ValidationReport::new();
    for spec in SCHEMA.iter().filter(|spec| spec.applies(ctx)) {
        report.extend(checks::check_field(spec, values.get(spec.field)));
    }
    debug!(
        location_shown = ctx.location_shown,
        issue_count = report.error_count(),
        "validated form"
    );
    report
}
