use crate::error::{AgroSmartError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default = "default_stats")]
    pub stats: Vec<StatConfig>,
    #[serde(default = "default_efficiency")]
    pub efficiency: Vec<EfficiencyConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_weather_refresh_secs")]
    pub weather_refresh_secs: u64,
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u64,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl DashboardConfig {
    pub fn weather_refresh(&self) -> Duration {
        Duration::from_secs(self.weather_refresh_secs)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            weather_refresh_secs: default_weather_refresh_secs(),
            counter_duration_ms: default_counter_duration_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

/// A headline number on the home screen, counted up when first shown.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatConfig {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

/// A labelled efficiency bar, filled to `percent` when first shown.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EfficiencyConfig {
    pub label: String,
    #[serde(deserialize_with = "deserialize_percent")]
    pub percent: u64,
}

fn deserialize_percent<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value = u64::deserialize(deserializer)?;
    if value > 100 {
        return Err(D::Error::custom(format!(
            "invalid percent {} - must be between 0 and 100",
            value
        )));
    }
    Ok(value)
}

fn default_weather_refresh_secs() -> u64 {
    10
}

fn default_counter_duration_ms() -> u64 {
    2000
}

fn default_frame_ms() -> u64 {
    16
}

fn default_stats() -> Vec<StatConfig> {
    vec![
        StatConfig {
            label: "Farmers Connected".into(),
            target: 12500,
            suffix: "+".into(),
        },
        StatConfig {
            label: "Acres Monitored".into(),
            target: 85000,
            suffix: String::new(),
        },
        StatConfig {
            label: "Water Saved (%)".into(),
            target: 40,
            suffix: "%".into(),
        },
        StatConfig {
            label: "Yield Increase (%)".into(),
            target: 35,
            suffix: "%".into(),
        },
    ]
}

fn default_efficiency() -> Vec<EfficiencyConfig> {
    vec![
        EfficiencyConfig {
            label: "Water Efficiency".into(),
            percent: 92,
        },
        EfficiencyConfig {
            label: "Fertilizer Optimization".into(),
            percent: 85,
        },
        EfficiencyConfig {
            label: "Pest Detection Accuracy".into(),
            percent: 95,
        },
        EfficiencyConfig {
            label: "Energy Savings".into(),
            percent: 78,
        },
    ]
}

impl Config {
    /// Loads config from the override path or the standard locations.
    ///
    /// An explicit override that does not exist is an error. When no file is
    /// found in the standard locations the built-in defaults are used.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AgroSmartError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => {
                let p = Self::find_config_path()?;
                if !p.exists() {
                    tracing::debug!("No config file at {:?}, using defaults", p);
                    return Ok(Self::default());
                }
                p
            }
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgroSmartError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Parses YAML after `${VAR}` environment substitution.
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| AgroSmartError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/agrosmart/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgroSmartError::Config("Cannot determine config directory".into()))?
            .join("agrosmart");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AgroSmart!");
        println!();

        let defaults = DashboardConfig::default();

        println!("Dashboard");
        let weather_refresh_secs: u64 = Input::new()
            .with_prompt("  Weather refresh interval (seconds)")
            .default(defaults.weather_refresh_secs)
            .interact_text()
            .map_err(|e| AgroSmartError::Config(format!("Input error: {}", e)))?;

        let counter_duration_ms: u64 = Input::new()
            .with_prompt("  Counter animation duration (ms)")
            .default(defaults.counter_duration_ms)
            .interact_text()
            .map_err(|e| AgroSmartError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            dashboard: DashboardConfig {
                weather_refresh_secs,
                counter_duration_ms,
                frame_ms: defaults.frame_ms,
            },
            stats: default_stats(),
            efficiency: default_efficiency(),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgroSmartError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# AgroSmart Configuration\n# Generated by `agrosmart init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    /// Checks values that serde alone cannot reject.
    pub fn validate(&self) -> Result<()> {
        if self.dashboard.weather_refresh_secs == 0 {
            return Err(AgroSmartError::Config(
                "dashboard.weather_refresh_secs must be at least 1".into(),
            ));
        }
        if self.dashboard.frame_ms == 0 {
            return Err(AgroSmartError::Config(
                "dashboard.frame_ms must be at least 1".into(),
            ));
        }
        if self.dashboard.counter_duration_ms < self.dashboard.frame_ms {
            return Err(AgroSmartError::Config(
                "dashboard.counter_duration_ms must be at least one frame".into(),
            ));
        }
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var("AGROSMART_DATA_DIR") {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| AgroSmartError::Config("Cannot determine data directory".into()))?
            .join("agrosmart");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn db_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("agrosmart.db"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            stats: default_stats(),
            efficiency: default_efficiency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.dashboard.weather_refresh_secs, 10);
        assert_eq!(config.dashboard.counter_duration_ms, 2000);
        assert_eq!(config.dashboard.frame_ms, 16);
        assert_eq!(config.stats.len(), 4);
        assert_eq!(config.efficiency.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_custom_sections() {
        let yaml = r#"
dashboard:
  weather_refresh_secs: 30
stats:
  - label: Villages
    target: 320
efficiency:
  - label: Drip Coverage
    percent: 64
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.dashboard.weather_refresh(), Duration::from_secs(30));
        assert_eq!(config.dashboard.frame_ms, 16);
        assert_eq!(
            config.stats,
            vec![StatConfig {
                label: "Villages".into(),
                target: 320,
                suffix: String::new(),
            }]
        );
        assert_eq!(config.efficiency[0].percent, 64);
    }

    #[test]
    fn rejects_percent_over_100() {
        let yaml = "efficiency:\n  - label: Bad\n    percent: 140\n";
        assert!(matches!(
            Config::parse(yaml),
            Err(AgroSmartError::Config(_))
        ));
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("AGROSMART_TEST_REFRESH", "42");
        let config =
            Config::parse("dashboard:\n  weather_refresh_secs: ${AGROSMART_TEST_REFRESH}\n")
                .unwrap();
        assert_eq!(config.dashboard.weather_refresh_secs, 42);
    }

    #[test]
    fn unset_variables_are_left_in_place() {
        let out = Config::substitute_env_vars("x: ${AGROSMART_DEFINITELY_UNSET_VAR}");
        assert_eq!(out, "x: ${AGROSMART_DEFINITELY_UNSET_VAR}");
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        let mut config = Config::default();
        config.dashboard.frame_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.dashboard.weather_refresh_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_override_is_an_error() {
        let path = PathBuf::from("/nonexistent/agrosmart/config.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
