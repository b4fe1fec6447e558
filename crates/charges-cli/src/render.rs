//! Terminal rendering of the form and the submission result.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use charges_client::PredictorConfig;
use charges_form::{FormController, SubmissionState};
use charges_model::Field;

/// Format an amount as whole US dollars, e.g. `$4,214`.
///
/// Rounds half away from zero. Non-finite amounts render as an empty string.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Table of every field with its raw value, hint, and validation status.
pub fn form_table(controller: &FormController) -> Table {
    let report = controller.validation();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Accepts"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);

    for field in Field::ALL {
        let status = match report.get(field) {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => Cell::new("ok").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(field.label()),
            Cell::new(controller.state().get(field)),
            Cell::new(accepts(field)),
            status,
        ]);
    }
    table
}

/// What a field accepts, for the hint column.
pub fn accepts(field: Field) -> String {
    if field.is_numeric() {
        field.placeholder().unwrap_or_default().to_string()
    } else {
        field.options().join(" | ")
    }
}

/// Names the service that answers estimates, e.g. `Predictor: http://127.0.0.1:8000/predict`.
pub fn predictor_line(config: &PredictorConfig) -> String {
    format!("Predictor: {}", config.predict_url())
}

/// One-paragraph description of the current submission state.
pub fn result_text(controller: &FormController) -> String {
    match controller.submission() {
        SubmissionState::InFlight => SubmissionState::InFlight.status_label().to_string(),
        SubmissionState::Succeeded(value) if !controller.is_estimate_stale() => {
            format!("Estimated annual charges: {}", format_currency(*value))
        }
        SubmissionState::Failed(message) => format!("Error: {message}"),
        SubmissionState::Succeeded(_) | SubmissionState::Idle => {
            match controller.last_estimate() {
                Some(value) => format!(
                    "Estimated annual charges: {} (for earlier inputs; submit again to refresh)",
                    format_currency(value)
                ),
                None => {
                    "No estimate yet. Fill the form and submit to see the prediction.".to_string()
                }
            }
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_accepts() {
        assert_eq!(accepts(Field::Age), "18 - 64");
        assert_eq!(accepts(Field::Bmi), "e.g. 27.9");
        assert_eq!(accepts(Field::Sex), "male | female");
        assert_eq!(accepts(Field::Smoker), "yes | no");
    }

    #[test]
    fn test_predictor_line() {
        let config = PredictorConfig::new("http://predictor.internal:9000/");
        assert_eq!(
            predictor_line(&config),
            "Predictor: http://predictor.internal:9000/predict"
        );
    }

    #[test]
    fn test_result_text_marks_estimate_for_edited_values() {
        let mut controller = FormController::new();
        controller.begin_submit().expect("request");
        controller.update_field(Field::Children, "3");
        controller.finish_submit(Ok(charges_model::PredictResponse {
            predicted_charges: 4213.5,
        }));
        assert_eq!(
            result_text(&controller),
            "Estimated annual charges: $4,214 (for earlier inputs; submit again to refresh)"
        );
    }
}
