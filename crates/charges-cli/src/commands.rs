use std::io;

use anyhow::{Context, Result};
use tracing::trace;

use charges_client::{PredictorClient, PredictorConfig};
use charges_form::{FormController, SubmissionState};

use crate::cli::FormArgs;
use charges_cli::interactive::run_session;
use charges_cli::logging::redact_value;
use charges_cli::render::{form_table, predictor_line, result_text};

/// Exit code when the form does not validate.
pub const EXIT_INVALID: i32 = 2;

fn controller_from_args(args: &FormArgs) -> FormController {
    let mut controller = FormController::new();
    for (field, raw) in args.overrides() {
        trace!(field = %field, value = redact_value(raw), "Applying form override");
        controller.update_field(field, raw);
    }
    controller
}

fn client(config: PredictorConfig) -> Result<PredictorClient> {
    PredictorClient::new(config).context("create predictor client")
}

/// Print the form and report validation problems. Returns false if invalid.
fn print_validation(controller: &FormController) -> bool {
    println!("{}", form_table(controller));
    let report = controller.validation();
    for (field, message) in report.iter() {
        eprintln!("{}: {message}", field.label());
    }
    report.is_valid()
}

pub fn run_check(args: &FormArgs) -> Result<i32> {
    let controller = controller_from_args(args);
    if print_validation(&controller) {
        println!("Form is valid.");
        Ok(0)
    } else {
        Ok(EXIT_INVALID)
    }
}

pub async fn run_estimate(args: &FormArgs, config: PredictorConfig) -> Result<i32> {
    let mut controller = controller_from_args(args);
    if !print_validation(&controller) {
        return Ok(EXIT_INVALID);
    }

    let client = client(config)?;
    eprintln!("{}", predictor_line(client.config()));
    eprintln!("{}", SubmissionState::InFlight.status_label());
    let state = controller.submit(&client).await;
    let code = if matches!(state, SubmissionState::Succeeded(_)) {
        0
    } else {
        1
    };
    println!("{}", result_text(&controller));
    Ok(code)
}

pub async fn run_health(config: PredictorConfig) -> Result<i32> {
    let client = client(config)?;
    let url = client.config().health_url();
    match client.health().await {
        Ok(status) if status.is_ok() => {
            println!("{url}: {}", status.status);
            Ok(0)
        }
        Ok(status) => {
            println!("{url}: {}", status.status);
            Ok(1)
        }
        Err(err) => {
            eprintln!("{url}: {}", err.user_message());
            Ok(1)
        }
    }
}

pub async fn run_interactive(config: PredictorConfig) -> Result<i32> {
    let client = client(config)?;
    eprintln!("{}", predictor_line(client.config()));
    let mut controller = FormController::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, &mut controller, &client).await?;
    Ok(0)
}
