use crate::models::{SkyCondition, WeatherSnapshot};
use chrono::Local;
use rand::Rng;
use std::time::{Duration, Instant};

/// Demo weather: uniform draws, no real data source behind it.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> WeatherSnapshot {
    let conditions = SkyCondition::all();

    WeatherSnapshot {
        temperature_c: rng.gen_range(20..35),
        humidity_percent: rng.gen_range(50..80),
        wind_speed_kmh: rng.gen_range(5..20),
        condition: conditions[rng.gen_range(0..conditions.len())],
        observed_at: Local::now(),
    }
}

/// Decides when the widget is due for a new reading.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    interval: Duration,
    last_refresh: Option<Instant>,
}

impl RefreshSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_refresh: None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_refresh = Some(now);
    }
}
