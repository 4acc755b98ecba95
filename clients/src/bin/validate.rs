//! `component-validator`: checks a workflow component against a component profile.
//!
//! Loads the component and the profile chain (the profile, its parent and
//! the base profile), validates every layer and prints the findings.
//!
//! **Usage:**
//! ```text
//! component-validator [--format text|json] [--base-profile <url>] [--strict] <component> <profile>
//! ```
//!
//! Exits 0 once validation completes, whatever the findings, unless
//! `--strict` is given: then an unsatisfied run exits 2. Unreadable inputs
//! and usage errors exit 1.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use component_validator::config::BASE_PROFILE_ENV;
use component_validator::report::{self, FORMAT_ENV};
use component_validator::{ReportFormat, ValidationReport, Validator, ValidatorConfig, ValidatorError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Validate a Taverna component against a component profile.
#[derive(Parser)]
#[command(
    name = "component-validator",
    version,
    about = "Validate a Taverna workflow component against a component profile"
)]
struct Args {
    /// Component document (t2flow), as a URL or a path relative to the working directory.
    component: String,

    /// Profile document, as a URL or a path relative to the working directory.
    profile: String,

    /// Report format.
    #[arg(long, value_enum, env = FORMAT_ENV, default_value_t = Format::Text)]
    format: Format,

    /// Base profile appended to every profile chain.
    #[arg(long, env = BASE_PROFILE_ENV)]
    base_profile: Option<String>,

    /// Exit with status 2 when any assertion fails.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable text, failures first.
    #[value(alias = "stdout")]
    Text,
    /// Structured JSON.
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(report) if args.strict && !report.all_satisfied() => process::exit(2),
        Ok(_) => {}
        Err(err) => {
            let not_found = err
                .downcast_ref::<ValidatorError>()
                .is_some_and(ValidatorError::is_not_found);
            if not_found {
                eprintln!("component-validator: {err}");
            } else {
                eprintln!("component-validator: {err:#}");
            }
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ValidationReport> {
    let mut config = ValidatorConfig::from_env();
    if let Some(base) = &args.base_profile {
        config = config.with_base_profile(base.as_str());
    }
    tracing::debug!(component = %args.component, profile = %args.profile, base = %config.base_profile, "validating");
    let validator = Validator::new(config).context("cannot set up the validator")?;
    let report = validator.validate(&args.component, &args.profile)?;
    let rendered = report::render(&report, args.format.into())?;
    println!("{}", rendered.trim_end());
    Ok(report)
}
