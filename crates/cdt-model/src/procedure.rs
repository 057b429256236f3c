//! CDT procedure code model.
//!
//! CDT (Code on Dental Procedures and Nomenclature) identifiers are the
//! letter `D` followed by four digits. The leading digit selects the service
//! series:
//!
//! ```text
//! D0xxx Diagnostic              D5xxx Prosthodontics (removable)
//! D1xxx Preventive              D6xxx Implant Services / fixed prosthodontics
//! D2xxx Restorative             D7xxx Oral & Maxillofacial Surgery
//! D3xxx Endodontics             D8xxx Orthodontics
//! D4xxx Periodontics            D9xxx Adjunctive General Services
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A validated CDT procedure code (e.g. `D2391`).
///
/// Stored uppercase; construction rejects anything that is not `D` followed
/// by exactly four ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcedureCode(String);

impl ProcedureCode {
    /// Parse and validate a code, normalizing case.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();

        let mut chars = normalized.chars();
        let valid = chars.next() == Some('D')
            && normalized.len() == 5
            && chars.all(|c| c.is_ascii_digit());

        if !valid {
            return Err(ModelError::InvalidCode {
                value: raw,
                reason: "expected 'D' followed by four digits".to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// The code as a string slice (always uppercase).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading series digit ('0'..='9').
    pub fn series(&self) -> char {
        // Constructor guarantees a digit at index 1.
        self.0.as_bytes()[1] as char
    }

    /// Service category derived from the series digit.
    pub fn category(&self) -> ProcedureCategory {
        ProcedureCategory::from_series(self.series())
    }
}

impl fmt::Display for ProcedureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProcedureCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// CDT service category, one per code series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureCategory {
    Diagnostic,
    Preventive,
    Restorative,
    Endodontics,
    Periodontics,
    Prosthodontics,
    ImplantServices,
    OralSurgery,
    Orthodontics,
    AdjunctiveServices,
}

impl ProcedureCategory {
    /// All categories in series order.
    pub const ALL: [Self; 10] = [
        Self::Diagnostic,
        Self::Preventive,
        Self::Restorative,
        Self::Endodontics,
        Self::Periodontics,
        Self::Prosthodontics,
        Self::ImplantServices,
        Self::OralSurgery,
        Self::Orthodontics,
        Self::AdjunctiveServices,
    ];

    /// Map a series digit to its category.
    pub fn from_series(series: char) -> Self {
        match series {
            '0' => Self::Diagnostic,
            '1' => Self::Preventive,
            '2' => Self::Restorative,
            '3' => Self::Endodontics,
            '4' => Self::Periodontics,
            '5' => Self::Prosthodontics,
            '6' => Self::ImplantServices,
            '7' => Self::OralSurgery,
            '8' => Self::Orthodontics,
            _ => Self::AdjunctiveServices,
        }
    }

    /// Stable machine-readable identifier (matches the serde form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Preventive => "preventive",
            Self::Restorative => "restorative",
            Self::Endodontics => "endodontics",
            Self::Periodontics => "periodontics",
            Self::Prosthodontics => "prosthodontics",
            Self::ImplantServices => "implant_services",
            Self::OralSurgery => "oral_surgery",
            Self::Orthodontics => "orthodontics",
            Self::AdjunctiveServices => "adjunctive_services",
        }
    }

    /// Human-readable label for summaries and table output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Diagnostic => "Diagnostic",
            Self::Preventive => "Preventive",
            Self::Restorative => "Restorative",
            Self::Endodontics => "Endodontics",
            Self::Periodontics => "Periodontics",
            Self::Prosthodontics => "Prosthodontics",
            Self::ImplantServices => "Implant Services",
            Self::OralSurgery => "Oral & Maxillofacial Surgery",
            Self::Orthodontics => "Orthodontics",
            Self::AdjunctiveServices => "Adjunctive General Services",
        }
    }
}

impl fmt::Display for ProcedureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProcedureCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// A single row of the procedure-code reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureEntry {
    /// CDT code (e.g. `D3330`).
    pub code: ProcedureCode,
    /// Nomenclature text used for matching and display.
    pub description: String,
}

impl ProcedureEntry {
    pub fn new(code: ProcedureCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Category derived from the code series.
    pub fn category(&self) -> ProcedureCategory {
        self.code.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_accepts_and_normalizes_valid_input() {
        let code = ProcedureCode::new(" d2391 ").unwrap();
        assert_eq!(code.as_str(), "D2391");
        assert_eq!(code.series(), '2');
        assert_eq!(code.category(), ProcedureCategory::Restorative);
    }

    #[test]
    fn code_rejects_malformed_input() {
        for bad in ["", "2391", "D239", "D23911", "X2391", "D23A1", "root canal"] {
            assert!(ProcedureCode::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn category_covers_every_series() {
        for (series, expected) in [
            ('0', ProcedureCategory::Diagnostic),
            ('3', ProcedureCategory::Endodontics),
            ('7', ProcedureCategory::OralSurgery),
            ('9', ProcedureCategory::AdjunctiveServices),
        ] {
            assert_eq!(ProcedureCategory::from_series(series), expected);
        }
    }

    #[test]
    fn category_parses_cli_spellings() {
        assert_eq!(
            "oral-surgery".parse::<ProcedureCategory>().unwrap(),
            ProcedureCategory::OralSurgery
        );
        assert_eq!(
            "Implant Services".parse::<ProcedureCategory>().unwrap(),
            ProcedureCategory::ImplantServices
        );
        assert!("veterinary".parse::<ProcedureCategory>().is_err());
    }

    #[test]
    fn code_serializes_as_plain_string() {
        let code = ProcedureCode::new("D0120").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"D0120\"");
    }
}
