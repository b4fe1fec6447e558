//! Closed vocabularies for the categorical form inputs.
//!
//! The string forms are the exact values the predictor accepts. Parsing is
//! strict: a raw value must match one of them exactly, including case, to
//! count as a valid selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex of the insured person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// All options in display order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| format!("Unknown sex: {s}"))
    }
}

/// Whether the insured person smokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    /// All options in display order.
    pub const ALL: [Smoker; 2] = [Smoker::Yes, Smoker::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Smoker::Yes => "yes",
            Smoker::No => "no",
        }
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Smoker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Smoker::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| format!("Unknown smoker option: {s}"))
    }
}

/// Residential region within the US.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    /// All options in display order.
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Northwest,
        Region::Southeast,
        Region::Southwest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
            Region::Southeast => "southeast",
            Region::Southwest => "southwest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| format!("Unknown region: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_values() {
        assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("yes".parse::<Smoker>().unwrap(), Smoker::Yes);
        assert_eq!("southeast".parse::<Region>().unwrap(), Region::Southeast);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Female".parse::<Sex>().is_err());
        assert!(" no".parse::<Smoker>().is_err());
        assert!("NORTHWEST".parse::<Region>().is_err());
    }

    #[test]
    fn test_display_matches_wire_value() {
        for region in Region::ALL {
            assert_eq!(region.to_string(), region.as_str());
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
    }
}
