//! Field keys of the estimator form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{Region, Sex, Smoker};

/// One input of the estimator form.
///
/// Variants are declared in form order, so the derived `Ord` sorts
/// validation output the way the form lays it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Age,
    Sex,
    Bmi,
    Children,
    Smoker,
    Region,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Age,
        Field::Sex,
        Field::Bmi,
        Field::Children,
        Field::Smoker,
        Field::Region,
    ];

    /// Wire key, as used in the JSON request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Bmi => "bmi",
            Field::Children => "children",
            Field::Smoker => "smoker",
            Field::Region => "region",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::Bmi => "BMI",
            Field::Children => "Children",
            Field::Smoker => "Smoker",
            Field::Region => "Region",
        }
    }

    /// Returns true for fields entered as free numeric text.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Age | Field::Bmi | Field::Children)
    }

    /// Input hint for numeric fields.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Age => Some("18 - 64"),
            Field::Bmi => Some("e.g. 27.9"),
            Field::Children => Some("0 - 10"),
            Field::Sex | Field::Smoker | Field::Region => None,
        }
    }

    /// Allowed values for categorical fields, in display order.
    ///
    /// Numeric fields return an empty list.
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Field::Sex => Sex::ALL.iter().map(Sex::as_str).collect(),
            Field::Smoker => Smoker::ALL.iter().map(Smoker::as_str).collect(),
            Field::Region => Region::ALL.iter().map(Region::as_str).collect(),
            Field::Age | Field::Bmi | Field::Children => Vec::new(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Parse a field key (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert_eq!(" BMI ".parse::<Field>().unwrap(), Field::Bmi);
        assert!("weight".parse::<Field>().is_err());
    }

    #[test]
    fn test_options_only_for_categorical_fields() {
        assert_eq!(Field::Smoker.options(), vec!["yes", "no"]);
        assert_eq!(Field::Region.options().len(), 4);
        assert!(Field::Age.options().is_empty());
        assert_eq!(Field::Children.placeholder(), Some("0 - 10"));
        assert_eq!(Field::Sex.placeholder(), None);
    }

    #[test]
    fn test_order_follows_form_layout() {
        let mut shuffled = vec![Field::Region, Field::Age, Field::Smoker, Field::Bmi];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Field::Age, Field::Bmi, Field::Smoker, Field::Region]
        );
    }
}
