mod report;
mod rules;

pub use report::ValidationReport;
pub use rules::{
    AGE_MESSAGE, AGE_RANGE, BMI_MESSAGE, BMI_RANGE, CHILDREN_MESSAGE, CHILDREN_RANGE,
    REGION_MESSAGE, SEX_MESSAGE, SMOKER_MESSAGE, message_for,
};

use charges_model::{Field, FormState};

/// Validate every field of the form.
///
/// All rules are evaluated on every call, so the report lists each invalid
/// field at once rather than stopping at the first failure. The function is
/// pure: the same state always yields the same report.
pub fn validate(state: &FormState) -> ValidationReport {
    let mut report = ValidationReport::default();
    for field in Field::ALL {
        if !rules::is_valid(field, state.get(field)) {
            report.insert(field, message_for(field));
        }
    }
    report
}

/// Validate a single raw value in isolation.
pub fn validate_field(field: Field, raw: &str) -> Option<&'static str> {
    (!rules::is_valid(field, raw)).then(|| message_for(field))
}
