use crate::config::Config;
use crate::db::Database;
use crate::error::{AgroSmartError, Result};
use crate::logic::contact_validation;
use crate::logic::crop_advisor;
use crate::logic::weather_mock;
use crate::logic::{CounterAnimation, RefreshSchedule};
use crate::models::{
    ContactErrors, ContactField, ContactForm, CropRecommendation, GrowingConditions, SoilType,
    Subject, ThemeMode, WeatherSnapshot,
};
use rand::Rng;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Advisor,
    Insights,
    Contact,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Home),
            '2' => Some(Screen::Advisor),
            '3' => Some(Screen::Insights),
            '4' => Some(Screen::Contact),
            _ => None,
        }
    }
}

pub struct StatCounter {
    pub label: String,
    pub suffix: String,
    pub animation: CounterAnimation,
}

pub struct EfficiencyBar {
    pub label: String,
    pub animation: CounterAnimation,
}

pub struct DashboardState {
    pub weather: Option<WeatherSnapshot>,
    pub weather_schedule: RefreshSchedule,
    pub counters: Vec<StatCounter>,
    pub bars: Vec<EfficiencyBar>,
    pub revealed: bool,
    last_tick: Option<Instant>,
}

impl DashboardState {
    pub fn new(config: &Config) -> Self {
        let dash = &config.dashboard;

        let counters = config
            .stats
            .iter()
            .map(|s| StatCounter {
                label: s.label.clone(),
                suffix: s.suffix.clone(),
                animation: CounterAnimation::new(s.target, dash.counter_duration(), dash.frame()),
            })
            .collect();

        let bars = config
            .efficiency
            .iter()
            .map(|e| EfficiencyBar {
                label: e.label.clone(),
                animation: CounterAnimation::new(e.percent, dash.counter_duration(), dash.frame()),
            })
            .collect();

        Self {
            weather: None,
            weather_schedule: RefreshSchedule::new(dash.weather_refresh()),
            counters,
            bars,
            revealed: false,
            last_tick: None,
        }
    }

    /// Starts counters and bars the first time the dashboard is shown.
    pub fn reveal(&mut self) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        for counter in &mut self.counters {
            counter.animation.start();
        }
        for bar in &mut self.bars {
            bar.animation.start();
        }
        tracing::debug!("Dashboard revealed, animations started");
    }

    pub fn is_animating(&self) -> bool {
        self.counters.iter().any(|c| c.animation.is_running())
            || self.bars.iter().any(|b| b.animation.is_running())
    }

    pub fn refresh_weather<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) {
        let snapshot = weather_mock::sample(rng);
        tracing::debug!(
            temperature_c = snapshot.temperature_c,
            humidity = snapshot.humidity_percent,
            condition = snapshot.condition.as_str(),
            "Weather refreshed"
        );
        self.weather = Some(snapshot);
        self.weather_schedule.mark(now);
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) {
        if self.weather_schedule.is_due(now) {
            self.refresh_weather(rng, now);
        }

        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);

        for counter in &mut self.counters {
            counter.animation.advance(elapsed);
        }
        for bar in &mut self.bars {
            bar.animation.advance(elapsed);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorField {
    Soil,
    Rainfall,
    Temperature,
}

impl AdvisorField {
    pub fn all() -> &'static [AdvisorField] {
        &[
            AdvisorField::Soil,
            AdvisorField::Rainfall,
            AdvisorField::Temperature,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdvisorField::Soil => "Soil Type",
            AdvisorField::Rainfall => "Annual Rainfall (mm)",
            AdvisorField::Temperature => "Average Temperature (°C)",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, AdvisorField::Soil)
    }

    pub fn next(&self) -> Self {
        match self {
            AdvisorField::Soil => AdvisorField::Rainfall,
            AdvisorField::Rainfall => AdvisorField::Temperature,
            AdvisorField::Temperature => AdvisorField::Soil,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            AdvisorField::Soil => AdvisorField::Temperature,
            AdvisorField::Rainfall => AdvisorField::Soil,
            AdvisorField::Temperature => AdvisorField::Rainfall,
        }
    }
}

/// A suggestion together with the conditions it was made for.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorResult {
    pub conditions: GrowingConditions,
    pub recommendation: CropRecommendation,
}

pub struct AdvisorState {
    pub focused_field: AdvisorField,
    pub soil: Option<SoilType>,
    pub rainfall: String,
    pub temperature: String,
    pub editing: bool,
    pub result: Option<AdvisorResult>,
    pub alert: Option<String>,
}

impl AdvisorState {
    pub fn new() -> Self {
        Self {
            focused_field: AdvisorField::Soil,
            soil: None,
            rainfall: String::new(),
            temperature: String::new(),
            editing: false,
            result: None,
            alert: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Steps through the soil options; `None` is the unselected placeholder.
    pub fn cycle_soil(&mut self, forward: bool) {
        let options = SoilType::all();
        let current = self
            .soil
            .and_then(|s| options.iter().position(|o| *o == s));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(options.len() - 1),
            (Some(i), true) if i + 1 < options.len() => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        self.soil = next.map(|i| options[i]);
    }

    pub fn field_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            AdvisorField::Soil => None,
            AdvisorField::Rainfall => Some(&mut self.rainfall),
            AdvisorField::Temperature => Some(&mut self.temperature),
        }
    }

    pub fn submit(&mut self) -> Result<()> {
        let soil = self.soil.map(|s| s.as_str()).unwrap_or("");
        match GrowingConditions::from_form(soil, &self.rainfall, &self.temperature) {
            Ok(conditions) => {
                let recommendation = crop_advisor::recommend(&conditions);
                tracing::info!(
                    soil = conditions.soil.as_str(),
                    crops = recommendation.crops.len(),
                    "Crop suggestion made"
                );
                self.alert = None;
                self.result = Some(AdvisorResult {
                    conditions,
                    recommendation,
                });
                Ok(())
            }
            Err(e) => {
                if let AgroSmartError::InvalidInput(ref msg) = e {
                    self.alert = Some(msg.clone());
                }
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

pub struct ContactState {
    pub form: ContactForm,
    pub focused_field: ContactField,
    pub editing: bool,
    pub errors: ContactErrors,
    pub show_success: bool,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            focused_field: ContactField::Name,
            editing: false,
            errors: ContactErrors::default(),
            show_success: false,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn cycle_subject(&mut self, forward: bool) {
        let options = Subject::all();
        let current = self
            .form
            .subject
            .and_then(|s| options.iter().position(|o| *o == s));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(options.len() - 1),
            (Some(i), true) if i + 1 < options.len() => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        self.form.subject = next.map(|i| options[i]);
    }

    pub fn field_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            ContactField::Name => Some(&mut self.form.name),
            ContactField::Email => Some(&mut self.form.email),
            ContactField::Subject => None,
            ContactField::Message => Some(&mut self.form.message),
        }
    }

    /// Validates the form. On success the modal opens and the form is reset.
    pub fn submit(&mut self) -> bool {
        match contact_validation::validate(&self.form) {
            Ok(()) => {
                tracing::info!(
                    subject = self.form.subject.map(|s| s.as_str()).unwrap_or(""),
                    "Contact form submitted"
                );
                self.errors = ContactErrors::default();
                self.form.reset();
                self.focused_field = ContactField::Name;
                self.show_success = true;
                true
            }
            Err(errors) => {
                tracing::debug!("Contact form rejected with {} errors", errors.count());
                self.errors = errors;
                false
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.show_success = false;
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub db: Database,
    pub theme: ThemeMode,

    // Screen states
    pub dashboard: DashboardState,
    pub advisor: AdvisorState,
    pub contact: ContactState,

    // UI state
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let theme = db.get_theme()?;
        let dashboard = DashboardState::new(&config);

        let mut app = Self {
            screen: Screen::Home,
            should_quit: false,
            config,
            db,
            theme,
            dashboard,
            advisor: AdvisorState::new(),
            contact: ContactState::new(),
            status_message: None,
        };
        app.switch_screen(Screen::Home);
        Ok(app)
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if screen == Screen::Home {
            self.dashboard.reveal();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// True while a text field is capturing keystrokes.
    pub fn is_editing(&self) -> bool {
        match self.screen {
            Screen::Advisor => self.advisor.editing,
            Screen::Contact => self.contact.editing,
            _ => false,
        }
    }

    /// Flips light/dark and persists the choice.
    pub fn toggle_theme(&mut self) -> Result<()> {
        let next = self.theme.toggled();
        self.db.set_theme(next)?;
        self.theme = next;
        tracing::info!("Theme set to {}", next);
        Ok(())
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dashboard.tick(&mut rand::thread_rng(), now);
    }

    pub fn is_animating(&self) -> bool {
        self.dashboard.is_animating()
    }
}
