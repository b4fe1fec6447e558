use std::ops::RangeInclusive;

use charges_model::{Field, Region, Sex, Smoker, parse_number};

pub const AGE_RANGE: RangeInclusive<f64> = 18.0..=64.0;
pub const BMI_RANGE: RangeInclusive<f64> = 10.0..=70.0;
pub const CHILDREN_RANGE: RangeInclusive<f64> = 0.0..=10.0;

pub const AGE_MESSAGE: &str = "Age must be between 18 and 64.";
pub const BMI_MESSAGE: &str = "BMI must be between 10 and 70.";
pub const CHILDREN_MESSAGE: &str = "Children must be between 0 and 10.";
pub const SEX_MESSAGE: &str = "Select a valid sex.";
pub const SMOKER_MESSAGE: &str = "Select smoker yes/no.";
pub const REGION_MESSAGE: &str = "Select a valid region.";

/// Error message shown when `field` fails validation.
pub fn message_for(field: Field) -> &'static str {
    match field {
        Field::Age => AGE_MESSAGE,
        Field::Sex => SEX_MESSAGE,
        Field::Bmi => BMI_MESSAGE,
        Field::Children => CHILDREN_MESSAGE,
        Field::Smoker => SMOKER_MESSAGE,
        Field::Region => REGION_MESSAGE,
    }
}

pub(crate) fn is_valid(field: Field, raw: &str) -> bool {
    match field {
        Field::Age => in_range(raw, &AGE_RANGE),
        Field::Bmi => in_range(raw, &BMI_RANGE),
        Field::Children => in_range(raw, &CHILDREN_RANGE),
        Field::Sex => raw.parse::<Sex>().is_ok(),
        Field::Smoker => raw.parse::<Smoker>().is_ok(),
        Field::Region => raw.parse::<Region>().is_ok(),
    }
}

fn in_range(raw: &str, range: &RangeInclusive<f64>) -> bool {
    parse_number(raw).is_some_and(|n| range.contains(&n))
}
