//! Subcommand implementations.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use regform_core::{CONFIRMATION, LocationTable, RegistrationForm, UpdateOutcome};
use regform_model::{Field, FormValues, RegistrationData};
use regform_validate::{ValidationContext, ValidationReport, validate_form};

use crate::logging::redact_value;
use crate::render::{RenderOptions, form_table, issue_table, location_table, toggle_line};
use crate::script::{HELP, ScriptCommand, parse_line};
use crate::settings::Settings;

/// Counts collected while driving the form from input lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillSummary {
    /// Submissions that passed validation.
    pub completed: usize,
    /// Submissions rejected with errors.
    pub rejected: usize,
    /// Input lines that could not be parsed.
    pub bad_lines: usize,
    /// Edits refused by the form: disabled fields or options not on offer.
    pub ignored: usize,
}

impl FillSummary {
    pub fn exit_code(&self) -> i32 {
        if self.completed > 0 { 0 } else { 1 }
    }
}

/// Drive a form from line-oriented input, writing renders to `out`.
pub fn run_fill<R, W>(input: R, out: &mut W, settings: &Settings) -> Result<FillSummary>
where
    R: BufRead,
    W: Write,
{
    let render = RenderOptions {
        mask_password: settings.display.mask_password,
    };
    let mut form = RegistrationForm::new(settings.form);
    let mut summary = FillSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("read input")?;
        let line_number = index + 1;
        trace!(line_number, line = redact_value(&line), "input line");

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                warn!(line_number, %error, "skipping input line");
                writeln!(out, "line {line_number}: {error}")?;
                summary.bad_lines += 1;
                continue;
            }
        };

        match command {
            ScriptCommand::Message(message) => match form.update(message) {
                UpdateOutcome::Updated => {}
                UpdateOutcome::Ignored(field) => {
                    summary.ignored += 1;
                    writeln!(
                        out,
                        "line {line_number}: ignored, {} is disabled or the value is not offered",
                        field.label()
                    )?;
                }
                UpdateOutcome::Submitted(data) => {
                    summary.completed += 1;
                    write_form(out, &form, render)?;
                    let confirmation = form.handler().confirmation().unwrap_or(CONFIRMATION);
                    writeln!(out, "{confirmation}")?;
                    write_registration(out, &data, render)?;
                }
                UpdateOutcome::Rejected(report) => {
                    summary.rejected += 1;
                    write_form(out, &form, render)?;
                    writeln!(
                        out,
                        "submission rejected: {} issue(s) in {} field(s)",
                        report.error_count(),
                        report.invalid_fields().len()
                    )?;
                }
            },
            ScriptCommand::Show => write_form(out, &form, render)?,
            ScriptCommand::Help => writeln!(out, "{HELP}")?,
            ScriptCommand::Quit => break,
        }
    }

    info!(
        completed = summary.completed,
        rejected = summary.rejected,
        bad_lines = summary.bad_lines,
        ignored = summary.ignored,
        "input finished"
    );
    Ok(summary)
}

/// Validate one set of values and report the issues.
///
/// Returns whether the values are valid.
pub fn run_check<W: Write>(
    assignments: &[(Field, String)],
    show_location: bool,
    json: bool,
    out: &mut W,
) -> Result<bool> {
    let span = info_span!("check", fields = assignments.len(), show_location);
    let _guard = span.enter();

    let values = assignments
        .iter()
        .fold(FormValues::new(), |values, (field, value)| {
            values.with(*field, value.as_str())
        });
    let ctx = ValidationContext::new().with_location(show_location);
    let report = validate_form(&values, &ctx);

    if json {
        let text = serde_json::to_string_pretty(&report).context("serialize report")?;
        writeln!(out, "{text}")?;
    } else {
        write_report(out, &report)?;
    }
    Ok(report.is_valid())
}

pub fn run_locations<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", location_table(&LocationTable::builtin()))?;
    Ok(())
}

fn write_form<W: Write>(out: &mut W, form: &RegistrationForm, render: RenderOptions) -> Result<()> {
    let state = form.state();
    writeln!(out, "{}", toggle_line(state))?;
    writeln!(out, "{}", form_table(state, render))?;
    Ok(())
}

fn write_registration<W: Write>(
    out: &mut W,
    data: &RegistrationData,
    render: RenderOptions,
) -> Result<()> {
    let shown = if render.mask_password {
        data.redacted()
    } else {
        data.clone()
    };
    let text = serde_json::to_string_pretty(&shown).context("serialize registration")?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &ValidationReport) -> Result<()> {
    if report.is_valid() {
        writeln!(out, "all fields valid")?;
    } else {
        writeln!(out, "{}", issue_table(report))?;
        writeln!(
            out,
            "{} issue(s) in {} field(s)",
            report.error_count(),
            report.invalid_fields().len()
        )?;
    }
    Ok(())
}
