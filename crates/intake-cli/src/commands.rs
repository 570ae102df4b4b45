use anyhow::{Context, Result};
use tracing::info;

use intake_cli::render::{print_report, report_json, review_csv, rules_table};
use intake_cli::run::{FormReport, run_form};
use intake_core::{FormEvent, SessionOptions, SubmitDecision};

use crate::cli::{FormArgs, OutputFormatArg, SubmitArgs};

pub fn run_rules() {
    println!("{}", rules_table());
}

pub fn run_review(args: &FormArgs) -> Result<FormReport> {
    let report = run_form(&args.form, FormEvent::ReviewRequested, &session_options(args))?;
    emit(&report, args.format)?;
    Ok(report)
}

pub fn run_submit(args: &SubmitArgs) -> Result<SubmitDecision> {
    let form = &args.form;
    let report = run_form(&form.form, FormEvent::SubmitAttempted, &session_options(form))?;
    emit(&report, form.format)?;

    if args.write_back {
        report
            .document
            .save(&form.form)
            .with_context(|| format!("write form document {}", form.form.display()))?;
        info!(path = %form.form.display(), "form document written back");
    }
    report
        .decision
        .context("submit attempt produced no decision")
}

fn session_options(args: &FormArgs) -> SessionOptions {
    SessionOptions::new()
        .with_as_of(args.as_of)
        .with_symptom_preview_chars(args.symptom_width)
}

fn emit(report: &FormReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print_report(report),
        OutputFormatArg::Json => println!("{}", report_json(report)?),
        OutputFormatArg::Csv => print!("{}", review_csv(&report.review)?),
    }
    Ok(())
}
