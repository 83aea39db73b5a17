use super::SoilType;
use crate::error::{AgroSmartError, Result};
use serde::Serialize;

pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Inputs to the crop advisor, already parsed and checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowingConditions {
    pub soil: SoilType,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
}

impl GrowingConditions {
    /// Builds conditions from values supplied by a form layer.
    ///
    /// An empty soil label or a missing/non-finite number is rejected with
    /// `InvalidInput`. A non-empty but unknown soil label is accepted and
    /// carried as `SoilType::Unrecognized`.
    pub fn new(soil: &str, rainfall_mm: Option<f64>, temperature_c: Option<f64>) -> Result<Self> {
        if soil.trim().is_empty() {
            return Err(AgroSmartError::InvalidInput(MISSING_FIELDS.into()));
        }

        let rainfall_mm = rainfall_mm
            .filter(|r| r.is_finite())
            .ok_or_else(|| AgroSmartError::InvalidInput(MISSING_FIELDS.into()))?;
        let temperature_c = temperature_c
            .filter(|t| t.is_finite())
            .ok_or_else(|| AgroSmartError::InvalidInput(MISSING_FIELDS.into()))?;

        if rainfall_mm < 0.0 {
            return Err(AgroSmartError::InvalidInput(
                "Rainfall cannot be negative".into(),
            ));
        }

        Ok(Self {
            soil: SoilType::parse(soil),
            rainfall_mm,
            temperature_c,
        })
    }

    /// Parses raw text as typed into the suggestion form.
    pub fn from_form(soil: &str, rainfall: &str, temperature: &str) -> Result<Self> {
        Self::new(soil, parse_number(rainfall), parse_number(temperature))
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
