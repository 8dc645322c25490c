pub mod catalog;
pub mod config;
pub mod inversion;
pub mod runtime;
pub mod selector;
pub mod session;
pub mod ui;

use crate::{
    catalog::ChordCategory,
    config::{FileSettingsStore, SettingsStore},
    inversion::InversionKind,
    runtime::{CrosstermEventSource, FixedTicker, PracticeEvent, Runner},
    session::{PracticeSession, SessionState, MAX_DURATION_SECS, MIN_DURATION_SECS},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;
const TOAST_SECS: f64 = 2.5;

/// chord practice flashcard tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A chord practice TUI: draws a random chord from your configured pool, shows its inversion and notes, and auto-advances on a timer. Settings persist across sessions."
)]
pub struct Cli {
    /// seconds each chord stays on screen (overrides the saved setting)
    #[clap(short = 'd', long)]
    duration: Option<u64>,

    /// chord types to practice (overrides the saved setting)
    #[clap(short = 't', long = "chord-type", value_enum)]
    chord_types: Vec<ChordCategory>,

    /// inversions to practice (overrides the saved setting)
    #[clap(short = 'i', long = "inversion", value_enum)]
    inversions: Vec<InversionKind>,

    /// alternate settings file
    #[clap(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Practice,
    Settings,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    secs_remaining: f64,
}

pub struct App {
    pub session: PracticeSession,
    pub screen: Screen,
    pub toast: Option<Toast>,
    store: FileSettingsStore,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let store = match &cli.config {
            Some(path) => FileSettingsStore::with_path(path),
            None => FileSettingsStore::new(),
        };

        let mut config = store.load().unwrap_or_default();
        if let Some(duration) = cli.duration {
            config.duration_secs = duration.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        }
        if !cli.chord_types.is_empty() {
            config.categories = cli.chord_types.iter().copied().collect();
        }
        if !cli.inversions.is_empty() {
            config.inversions = cli.inversions.iter().copied().collect();
        }

        Self {
            session: PracticeSession::new(config),
            screen: Screen::Practice,
            toast: None,
            store,
        }
    }

    /// Advance the countdown and decay the toast. Returns true when the
    /// screen needs a redraw.
    pub fn on_tick(&mut self, elapsed: f64) -> bool {
        let drew = self.session.on_tick(elapsed);

        let mut toast_changed = false;
        if let Some(toast) = &mut self.toast {
            toast.secs_remaining -= elapsed;
            if toast.secs_remaining <= 0.0 {
                self.toast = None;
                toast_changed = true;
            }
        }

        // the countdown display changes every tick while practicing
        drew || toast_changed || self.session.state() == SessionState::Practicing
    }

    fn notify(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            secs_remaining: TOAST_SECS,
        });
    }

    /// Persist the current config. Failures are advisory only: practice
    /// continues with the in-memory config.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.session.config()) {
            self.notify(format!("Failed to save settings: {err}"));
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&cli);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let res = run_app(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<CrosstermEventSource, FixedTicker>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        match runner.step() {
            PracticeEvent::Tick => {
                if app.on_tick(TICK_RATE_MS as f64 / 1000.0) {
                    terminal.draw(|f| ui::draw(app, f))?;
                }
            }
            PracticeEvent::Resize => {
                terminal.draw(|f| ui::draw(app, f))?;
            }
            PracticeEvent::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break;
                }
                if handle_key(app, key.code) {
                    break;
                }
                terminal.draw(|f| ui::draw(app, f))?;
            }
        }
    }

    Ok(())
}

/// Dispatch one key press. Returns true when the app should exit.
fn handle_key(app: &mut App, code: KeyCode) -> bool {
    match app.screen {
        Screen::Practice => match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Char(' ') => app.session.toggle(),
            KeyCode::Char('s') => app.screen = Screen::Settings,
            _ => {}
        },
        Screen::Settings => match code {
            KeyCode::Esc | KeyCode::Char('s') => app.screen = Screen::Practice,
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                app.session.toggle_category(ChordCategory::ALL[idx]);
                app.persist();
            }
            KeyCode::Up => {
                let secs = app.session.config().duration_secs.saturating_add(1);
                app.session.change_duration(secs);
                app.persist();
            }
            KeyCode::Down => {
                let secs = app.session.config().duration_secs.saturating_sub(1);
                app.session.change_duration(secs);
                app.persist();
            }
            KeyCode::Char(c) => {
                if let Some(&(_, kind)) =
                    ui::INVERSION_KEYS.iter().find(|(key, _)| *key == c)
                {
                    // refusing the last deselect is silent; the marker
                    // simply stays on
                    if app.session.toggle_inversion(kind) {
                        app.persist();
                    }
                }
            }
            _ => {}
        },
    }
    false
}
