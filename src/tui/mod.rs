//! Terminal front end.
//!
//! Owns the terminal, turns key presses into controller calls and feeds the
//! session clock with real elapsed time.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use prime_duel::{Controller, GameConfig, GameResult, GameSession, PhaseKind, Player};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, instrument, warn};

use app::App;

/// How long to wait for a key before redrawing.
const FRAME: Duration = Duration::from_millis(100);

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back in cooked mode on drop, whichever way `run` exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Runs the game until the user quits.
pub fn run(config: GameConfig) -> Result<()> {
    let columns = config.grid_columns;
    let session = GameSession::new(config).context("Failed to create game session")?;
    info!(seed = session.seed(), "Starting Prime Duel TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut controller = Controller::new(session, App::new(columns));
    let res = run_loop(&mut terminal, &mut controller);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut Term, controller: &mut Controller<App>) -> Result<()> {
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, controller.presenter()))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(controller, key.code);
                }
            }
        }

        let now = Instant::now();
        let result = controller.on_elapsed(now - last).map(|_| ());
        report(controller, result);
        last = now;

        if controller.presenter().should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}

/// Routes a key press according to the phase on screen.
#[instrument(skip(controller))]
fn handle_key(controller: &mut Controller<App>, key: KeyCode) {
    let phase = controller.presenter().view().phase;
    let result = match (phase, key) {
        (_, KeyCode::Esc) => {
            controller.presenter_mut().quit();
            Ok(())
        }

        (PhaseKind::Setup, KeyCode::Enter) => {
            let names = controller.presenter().name_inputs().clone();
            controller
                .on_start(&names[Player::One], &names[Player::Two])
                .map(|_| ())
        }
        (PhaseKind::Setup, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down) => {
            controller.presenter_mut().toggle_focus();
            Ok(())
        }
        (PhaseKind::Setup, KeyCode::Backspace) => {
            controller.presenter_mut().backspace();
            Ok(())
        }
        (PhaseKind::Setup, KeyCode::Char(c)) => {
            controller.presenter_mut().type_char(c);
            Ok(())
        }

        (PhaseKind::Playing, KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            let app = controller.presenter_mut();
            let next = input::move_cursor(app.cursor(), key, app.columns(), app.view().cells.len());
            app.set_cursor(next);
            Ok(())
        }
        (PhaseKind::Playing, KeyCode::Enter | KeyCode::Char(' ')) => {
            let index = controller.presenter().cursor();
            controller.on_select(index).map(|_| ())
        }
        (PhaseKind::Playing, KeyCode::Char('e')) => controller.on_end().map(|_| ()),

        (PhaseKind::Playing | PhaseKind::Over, KeyCode::Char('r')) => {
            controller.on_reset().map(|_| ())
        }
        (PhaseKind::Over, KeyCode::Enter) => controller.on_reset().map(|_| ()),
        (PhaseKind::Playing | PhaseKind::Over, KeyCode::Char('q')) => {
            controller.presenter_mut().quit();
            Ok(())
        }

        _ => Ok(()),
    };

    report(controller, result);
}

/// Shows a rejected action on the status line instead of aborting.
fn report(controller: &mut Controller<App>, result: GameResult<()>) {
    if let Err(err) = result {
        warn!(error = %err, "Action failed");
        controller.presenter_mut().set_status(err.kind.to_string());
    }
}
