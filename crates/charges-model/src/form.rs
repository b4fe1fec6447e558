//! Raw, user-entered form values.

use serde::{Deserialize, Serialize};

use crate::enums::{Region, Sex, Smoker};
use crate::error::{CoercionError, Result};
use crate::field::Field;
use crate::payload::PredictRequest;

/// The six form inputs exactly as the user typed or selected them.
///
/// Nothing here is validated or coerced. Validity is derived on demand so an
/// empty or half-typed value can sit in the form while the user is editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub age: String,
    pub sex: String,
    pub bmi: String,
    pub children: String,
    pub smoker: String,
    pub region: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            age: "31".to_string(),
            sex: Sex::Female.as_str().to_string(),
            bmi: "27.9".to_string(),
            children: "0".to_string(),
            smoker: Smoker::No.as_str().to_string(),
            region: Region::Southwest.as_str().to_string(),
        }
    }
}

impl FormState {
    /// Raw value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.age,
            Field::Sex => &self.sex,
            Field::Bmi => &self.bmi,
            Field::Children => &self.children,
            Field::Smoker => &self.smoker,
            Field::Region => &self.region,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        let slot = match field {
            Field::Age => &mut self.age,
            Field::Sex => &mut self.sex,
            Field::Bmi => &mut self.bmi,
            Field::Children => &mut self.children,
            Field::Smoker => &mut self.smoker,
            Field::Region => &mut self.region,
        };
        *slot = raw.into();
    }

    /// Builder-style variant of [`FormState::set`].
    #[must_use]
    pub fn with(mut self, field: Field, raw: impl Into<String>) -> Self {
        self.set(field, raw);
        self
    }

    /// Numeric value of a field, if its raw text is a finite number.
    pub fn number(&self, field: Field) -> Option<f64> {
        parse_number(self.get(field))
    }

    /// Convert the raw values into the typed request sent to the predictor.
    ///
    /// Range checks are not applied here; callers gate on validation first.
    pub fn coerce(&self) -> Result<PredictRequest> {
        Ok(PredictRequest {
            age: self.coerce_number(Field::Age)?,
            sex: self.coerce_choice(Field::Sex)?,
            bmi: self.coerce_number(Field::Bmi)?,
            children: self.coerce_number(Field::Children)?,
            smoker: self.coerce_choice(Field::Smoker)?,
            region: self.coerce_choice(Field::Region)?,
        })
    }

    fn coerce_number(&self, field: Field) -> Result<f64> {
        self.number(field).ok_or_else(|| CoercionError::NotNumeric {
            field,
            raw: self.get(field).to_string(),
        })
    }

    fn coerce_choice<T: std::str::FromStr>(&self, field: Field) -> Result<T> {
        let raw = self.get(field);
        raw.parse().map_err(|_| CoercionError::InvalidChoice {
            field,
            raw: raw.to_string(),
        })
    }
}

/// Parse raw numeric text.
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text, NaN and
/// infinities all yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let state = FormState::default();
        assert_eq!(state.get(Field::Age), "31");
        assert_eq!(state.get(Field::Sex), "female");
        assert_eq!(state.get(Field::Bmi), "27.9");
        assert_eq!(state.get(Field::Children), "0");
        assert_eq!(state.get(Field::Smoker), "no");
        assert_eq!(state.get(Field::Region), "southwest");
    }

    #[test]
    fn test_set_replaces_only_one_field() {
        let mut state = FormState::default();
        state.set(Field::Bmi, "");
        assert_eq!(state.bmi, "");
        assert_eq!(
            FormState {
                bmi: "27.9".to_string(),
                ..state
            },
            FormState::default()
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" 27.5 "), Some(27.5));
        assert_eq!(parse_number("1e1"), Some(10.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_coerce_defaults() {
        let request = FormState::default().coerce().unwrap();
        assert_eq!(request.age, 31.0);
        assert_eq!(request.sex, Sex::Female);
        assert_eq!(request.bmi, 27.9);
        assert_eq!(request.children, 0.0);
        assert_eq!(request.smoker, Smoker::No);
        assert_eq!(request.region, Region::Southwest);
    }

    #[test]
    fn test_coerce_reports_first_bad_field() {
        let state = FormState::default().with(Field::Age, "thirty");
        assert_eq!(
            state.coerce().unwrap_err(),
            CoercionError::NotNumeric {
                field: Field::Age,
                raw: "thirty".to_string()
            }
        );

        let state = FormState::default().with(Field::Region, "midwest");
        assert!(matches!(
            state.coerce(),
            Err(CoercionError::InvalidChoice {
                field: Field::Region,
                ..
            })
        ));
    }
}
