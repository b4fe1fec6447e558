//! CLI argument definitions for the charges estimator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use charges_model::Field;

#[derive(Parser)]
#[command(
    name = "charges-estimator",
    version,
    about = "Insurance Charges Estimator - quote annual charges from a prediction service",
    long_about = "Collect age, sex, BMI, children, smoker status and region, validate them,\n\
                  and ask a prediction service for an estimate of annual insurance charges.\n\n\
                  The service base URL defaults to http://127.0.0.1:8000 and can be set with\n\
                  CHARGES_API_BASE or --api-base."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw form values in trace logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Base URL of the prediction service (overrides CHARGES_API_BASE).
    #[arg(long = "api-base", value_name = "URL", global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the form and request an estimate.
    Estimate(FormArgs),

    /// Validate the form without contacting the service.
    Check(FormArgs),

    /// Check that the prediction service is reachable.
    Health,

    /// Edit the form line by line and submit on demand.
    Interactive,
}

/// Form values. Anything omitted keeps its default.
///
/// Values are taken as raw text so invalid input reaches validation and is
/// reported with the form's own messages.
#[derive(Args, Default)]
pub struct FormArgs {
    /// Age in years (18 - 64) [default: 31].
    #[arg(long, value_name = "YEARS", allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Sex (male, female) [default: female].
    #[arg(long, value_name = "SEX")]
    pub sex: Option<String>,

    /// Body mass index (10 - 70) [default: 27.9].
    #[arg(long, value_name = "BMI", allow_hyphen_values = true)]
    pub bmi: Option<String>,

    /// Number of children covered (0 - 10) [default: 0].
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    pub children: Option<String>,

    /// Smoker (yes, no) [default: no].
    #[arg(long, value_name = "YES_NO")]
    pub smoker: Option<String>,

    /// Region (northeast, northwest, southeast, southwest) [default: southwest].
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,
}

impl FormArgs {
    /// Fields given on the command line, in form order.
    pub fn overrides(&self) -> Vec<(Field, &str)> {
        [
            (Field::Age, &self.age),
            (Field::Sex, &self.sex),
            (Field::Bmi, &self.bmi),
            (Field::Children, &self.children),
            (Field::Smoker, &self.smoker),
            (Field::Region, &self.region),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|raw| (field, raw)))
        .collect()
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_form_overrides_keep_raw_text() {
        let cli = Cli::try_parse_from([
            "charges-estimator",
            "estimate",
            "--children",
            "-1",
            "--region",
            "midwest",
        ])
        .unwrap();
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(
            args.overrides(),
            vec![(Field::Children, "-1"), (Field::Region, "midwest")]
        );
    }

    #[test]
    fn test_global_api_base() {
        let cli =
            Cli::try_parse_from(["charges-estimator", "health", "--api-base", "http://x:1"]).unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("http://x:1"));
    }
}
