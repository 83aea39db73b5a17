use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkyCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Clear,
}

impl SkyCondition {
    pub fn all() -> &'static [SkyCondition] {
        &[
            SkyCondition::Sunny,
            SkyCondition::PartlyCloudy,
            SkyCondition::Cloudy,
            SkyCondition::Clear,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkyCondition::Sunny => "Sunny",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Cloudy => "Cloudy",
            SkyCondition::Clear => "Clear",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SkyCondition::Sunny => "☀",
            SkyCondition::PartlyCloudy => "⛅",
            SkyCondition::Cloudy => "☁",
            SkyCondition::Clear => "○",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reading of the demo weather widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub temperature_c: i32,
    pub humidity_percent: u32,
    pub wind_speed_kmh: u32,
    pub condition: SkyCondition,
    pub observed_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_names_match_widget_text() {
        for condition in SkyCondition::all() {
            assert_eq!(
                serde_json::to_value(condition).unwrap(),
                serde_json::Value::String(condition.as_str().to_string())
            );
        }
    }
}
