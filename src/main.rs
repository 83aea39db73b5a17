mod app;
mod cli;
mod config;
mod db;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use db::Database;
use error::Result;
use logic::crop_advisor;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;
use ui::screens::{AdvisorScreen, ContactScreen, HomeScreen, InsightsScreen};
use ui::Theme;

const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    init_logging(
        cli.verbose,
        logs_to_stderr(cli.command.is_none(), cli.verbose, rust_log_set),
    );

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// The TUI owns the terminal, so it only logs to stderr when asked to.
fn logs_to_stderr(is_tui: bool, verbose: u8, rust_log_set: bool) -> bool {
    !is_tui || verbose > 0 || rust_log_set
}

fn init_logging(verbose: u8, to_stderr: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(if to_stderr {
            BoxMakeWriter::new(io::stderr)
        } else {
            BoxMakeWriter::new(io::sink)
        })
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check) => run_check(&cli),
        Some(Commands::Suggest {
            ref soil,
            rainfall,
            temperature,
            json,
        }) => run_suggest(soil, rainfall, temperature, json),
        Some(Commands::Theme { toggle }) => {
            let db = Database::open(cli.data_dir.as_ref())?;
            let mut theme = db.get_theme()?;
            if toggle {
                theme = theme.toggled();
                db.set_theme(theme)?;
                tracing::info!("Theme set to {}", theme);
            }
            println!("{} {}", theme.icon(), theme);
            Ok(())
        }
        Some(Commands::Weather { json }) => {
            let reading = logic::weather_mock::sample(&mut rand::thread_rng());
            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                println!(
                    "{} {} | {}°C | humidity {}% | wind {} km/h",
                    reading.condition.symbol(),
                    reading.condition,
                    reading.temperature_c,
                    reading.humidity_percent,
                    reading.wind_speed_kmh
                );
            }
            Ok(())
        }
        None => {
            let config = Config::load(cli.config.as_ref())?;
            config.validate()?;
            let db = Database::open(cli.data_dir.as_ref())?;
            run_tui(App::new(config, db)?)
        }
    }
}

fn run_check(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_ref())?;
    config.validate()?;
    println!(
        "Config OK: weather every {}s, {} counters, {} efficiency bars",
        config.dashboard.weather_refresh_secs,
        config.stats.len(),
        config.efficiency.len()
    );

    let db = Database::open(cli.data_dir.as_ref())?;
    println!(
        "Database OK: {} (theme: {})",
        db.path().display(),
        db.get_theme()?
    );
    Ok(())
}

fn run_suggest(
    soil: &str,
    rainfall: Option<f64>,
    temperature: Option<f64>,
    json: bool,
) -> Result<()> {
    let rec = crop_advisor::suggest(soil, rainfall, temperature)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    if rec.is_empty() {
        println!("No crops matched these conditions.");
        return Ok(());
    }

    println!("Recommended crops:");
    for crop in &rec.crops {
        println!("  - {}", crop);
    }
    println!();
    println!("Analysis: {}", rec.rationale);
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.on_tick(Instant::now());

        terminal.draw(|f| {
            let area = f.area();
            let theme = Theme::for_mode(app.theme);

            match app.screen {
                Screen::Home => {
                    let screen = HomeScreen::new(
                        app.dashboard.weather.as_ref(),
                        &app.dashboard.counters,
                        &app.dashboard.bars,
                        theme,
                    )
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Advisor => {
                    f.render_widget(AdvisorScreen::new(&app.advisor, theme), area);
                }
                Screen::Insights => {
                    f.render_widget(InsightsScreen::new(theme), area);
                }
                Screen::Contact => {
                    f.render_widget(ContactScreen::new(&app.contact, theme), area);
                }
            }
        })?;

        let timeout = if app.is_animating() {
            app.config.dashboard.frame()
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.is_editing() || (app.screen == Screen::Contact && app.contact.show_success) {
        handle_screen_input(app, code, modifiers);
        return;
    }

    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.switch_screen(Screen::Home),
        KeyCode::Char('t') => match app.toggle_theme() {
            Ok(()) => app.set_status(&format!("Theme: {}", app.theme)),
            Err(e) => app.set_status(&format!("Theme save failed: {}", e)),
        },
        KeyCode::Char(c) => {
            if let Some(screen) = Screen::from_key(c) {
                app.clear_status();
                app.switch_screen(screen);
            } else {
                handle_screen_input(app, code, modifiers);
            }
        }
        _ => handle_screen_input(app, code, modifiers),
    }
}

fn handle_screen_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.screen {
        Screen::Home | Screen::Insights => {}
        Screen::Advisor => handle_advisor_input(app, code, modifiers),
        Screen::Contact => handle_contact_input(app, code, modifiers),
    }
}

fn handle_advisor_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let state = &mut app.advisor;

    if state.editing {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => state.editing = false,
            KeyCode::Backspace => {
                if let Some(buffer) = state.field_buffer_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                if let Some(buffer) = state.field_buffer_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Up | KeyCode::BackTab => state.prev_field(),
        KeyCode::Down | KeyCode::Tab => state.next_field(),
        KeyCode::Left if !state.focused_field.is_text() => state.cycle_soil(false),
        KeyCode::Right if !state.focused_field.is_text() => state.cycle_soil(true),
        KeyCode::Enter if state.focused_field.is_text() => state.editing = true,
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            // The alert is rendered on screen; nothing else to do on failure.
            let _ = state.submit();
        }
        KeyCode::Char('c') => state.clear(),
        _ => {}
    }
}

fn handle_contact_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let state = &mut app.contact;

    if state.show_success {
        if matches!(code, KeyCode::Esc | KeyCode::Enter) {
            state.close_modal();
        }
        return;
    }

    if state.editing {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => state.editing = false,
            KeyCode::Backspace => {
                if let Some(buffer) = state.field_buffer_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = state.field_buffer_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Up | KeyCode::BackTab => state.prev_field(),
        KeyCode::Down | KeyCode::Tab => state.next_field(),
        KeyCode::Left if state.focused_field == models::ContactField::Subject => {
            state.cycle_subject(false)
        }
        KeyCode::Right if state.focused_field == models::ContactField::Subject => {
            state.cycle_subject(true)
        }
        KeyCode::Enter if state.focused_field != models::ContactField::Subject => {
            state.editing = true
        }
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            if state.submit() {
                app.set_status("Message sent");
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_logs_are_silent_by_default() {
        assert!(!logs_to_stderr(true, 0, false));
    }

    #[test]
    fn tui_logs_when_requested() {
        assert!(logs_to_stderr(true, 1, false));
        assert!(logs_to_stderr(true, 0, true));
    }

    #[test]
    fn subcommands_always_log_to_stderr() {
        assert!(logs_to_stderr(false, 0, false));
    }
}
