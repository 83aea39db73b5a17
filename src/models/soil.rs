use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Loamy,
    Sandy,
    Clay,
    Silt,
    Peaty,
    /// Any label outside the five recognized soils. Yields an empty recommendation.
    Unrecognized,
}

impl SoilType {
    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Loamy,
            SoilType::Sandy,
            SoilType::Clay,
            SoilType::Silt,
            SoilType::Peaty,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loamy => "loamy",
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Silt => "silt",
            SoilType::Peaty => "peaty",
            SoilType::Unrecognized => "unrecognized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Silt => "Silt",
            SoilType::Peaty => "Peaty",
            SoilType::Unrecognized => "Unrecognized",
        }
    }

    /// Matching is exact on the lowercase form values; anything else is `Unrecognized`.
    /// Surrounding whitespace is trimmed first, so `" loamy "` is accepted.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "loamy" => SoilType::Loamy,
            "sandy" => SoilType::Sandy,
            "clay" => SoilType::Clay,
            "silt" => SoilType::Silt,
            "peaty" => SoilType::Peaty,
            _ => SoilType::Unrecognized,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SoilType::Unrecognized)
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_values() {
        assert_eq!(SoilType::parse("loamy"), SoilType::Loamy);
        assert_eq!(SoilType::parse("sandy"), SoilType::Sandy);
        assert_eq!(SoilType::parse("clay"), SoilType::Clay);
        assert_eq!(SoilType::parse("silt"), SoilType::Silt);
        assert_eq!(SoilType::parse(" peaty "), SoilType::Peaty);
    }

    #[test]
    fn parse_trims_but_keeps_case() {
        assert_eq!(SoilType::parse("\tloamy\n"), SoilType::Loamy);
        assert_eq!(SoilType::parse(" CLAY "), SoilType::Unrecognized);
    }

    #[test]
    fn parse_unrecognized_values() {
        assert_eq!(SoilType::parse("unknown-value"), SoilType::Unrecognized);
        assert_eq!(SoilType::parse("Loamy"), SoilType::Unrecognized);
        assert_eq!(SoilType::parse("loam"), SoilType::Unrecognized);
        assert!(!SoilType::parse("chalk").is_recognized());
    }

    #[test]
    fn form_values_round_trip() {
        for soil in SoilType::all() {
            assert_eq!(SoilType::parse(soil.as_str()), *soil);
        }
    }
}
