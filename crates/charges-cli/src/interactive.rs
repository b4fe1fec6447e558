//! Line-oriented form session.
//!
//! Each input line is one controller operation, followed by a re-render of
//! whatever it changed.

use std::io::{BufRead, Write};

use anyhow::Result;

use charges_client::Predictor;
use charges_form::FormController;
use charges_model::Field;

use crate::logging::redact_value;
use crate::render::{form_table, result_text};

const HELP: &str = "\
Commands:
  set FIELD VALUE   change a field (FIELD=VALUE also works)
  show              print the form and the current result
  submit            request an estimate
  help              print this help
  quit              end the session
Fields: age, sex, bmi, children, smoker, region";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set(Field, String),
    Show,
    Submit,
    Help,
    Quit,
    Empty,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(SessionCommand::Empty);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    if verb.eq_ignore_ascii_case("set") {
        return parse_assignment(rest);
    }
    if line.contains('=') {
        return parse_assignment(line);
    }

    match verb.to_lowercase().as_str() {
        "show" => Ok(SessionCommand::Show),
        "submit" => Ok(SessionCommand::Submit),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        _ => Err(format!("Unknown command: {verb} (type `help`)")),
    }
}

/// Parse `FIELD VALUE` or `FIELD=VALUE`.
fn parse_assignment(text: &str) -> Result<SessionCommand, String> {
    let (key, value) = match text.split_once('=') {
        Some((key, value)) => (key, value),
        None => text.split_once(char::is_whitespace).unwrap_or((text, "")),
    };
    let key = key.trim();
    if key.is_empty() {
        return Err("Usage: set FIELD VALUE".to_string());
    }
    Ok(SessionCommand::Set(key.parse()?, value.trim().to_string()))
}

/// Run a session until `quit` or end of input.
pub async fn run_session<R, W, P>(
    input: R,
    output: &mut W,
    controller: &mut FormController,
    predictor: &P,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Predictor + ?Sized,
{
    writeln!(output, "{HELP}")?;
    writeln!(output, "{}", form_table(controller))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Empty => {}
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(output, "{HELP}")?,
            SessionCommand::Show => {
                writeln!(output, "{}", form_table(controller))?;
                writeln!(output, "{}", result_text(controller))?;
            }
            SessionCommand::Set(field, value) => {
                tracing::trace!(field = %field, value = redact_value(&value), "Setting field");
                controller.update_field(field, value);
                match controller.validation().get(field) {
                    Some(message) => writeln!(output, "{}: {message}", field.label())?,
                    None => writeln!(
                        output,
                        "{} = {}",
                        field.label(),
                        controller.state().get(field)
                    )?,
                }
            }
            SessionCommand::Submit => {
                if !controller.can_submit() {
                    for (field, message) in controller.validation().iter() {
                        writeln!(output, "{}: {message}", field.label())?;
                    }
                    writeln!(output, "Fix the fields above before submitting.")?;
                    continue;
                }
                if let Some(request) = controller.begin_submit() {
                    writeln!(output, "{}", controller.submission().status_label())?;
                    output.flush()?;
                    let outcome = predictor.predict(&request).await;
                    controller.finish_submit(outcome);
                }
                writeln!(output, "{}", result_text(controller))?;
            }
        }
    }
    Ok(())
}
