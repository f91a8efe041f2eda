//! Presentation seam.
//!
//! The core never draws anything. A host implements `Presenter` and hands
//! it to a `Controller`; the controller applies actions to the session and
//! pushes a fresh `SessionView` to the presenter after every change.

use std::time::Duration;

use tracing::{debug, warn};

use super::events::{Events, SessionEvent};
use super::machine::GameSession;
use super::view::SessionView;
use crate::core::Action;
use crate::error::GameResult;
use crate::rules::FinalReport;

/// Something that can show a game to players.
pub trait Presenter {
    /// Show the current state.
    fn render(&mut self, view: &SessionView);

    /// React to the events of one operation, before `render`.
    ///
    /// Default does nothing.
    fn on_events(&mut self, _events: &[SessionEvent]) {}

    /// Show the winner banner and final scores.
    ///
    /// Default does nothing; `render` already carries the report.
    fn game_over(&mut self, _report: &FinalReport) {}
}

/// Drives a `GameSession` and keeps a `Presenter` in sync with it.
pub struct Controller<P: Presenter> {
    session: GameSession,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    /// Wrap a session, rendering its initial state.
    pub fn new(session: GameSession, mut presenter: P) -> Self {
        presenter.render(&session.view());
        Self { session, presenter }
    }

    /// The wrapped session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably (hosts keep UI-only state there).
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Unwrap into session and presenter.
    pub fn into_parts(self) -> (GameSession, P) {
        (self.session, self.presenter)
    }

    /// Apply an action and update the presenter if anything changed.
    pub fn dispatch(&mut self, action: Action) -> GameResult<Events> {
        let name = action.name();
        let events = match self.session.apply(action) {
            Ok(events) => events,
            Err(err) => {
                warn!(action = name, error = %err, "Action rejected");
                return Err(err);
            }
        };

        if events.is_empty() {
            return Ok(events);
        }
        debug!(action = name, count = events.len(), "Action produced events");

        self.presenter.on_events(&events);
        self.presenter.render(&self.session.view());
        for event in &events {
            if let SessionEvent::GameOver(report) = event {
                self.presenter.game_over(report);
            }
        }
        Ok(events)
    }

    /// Host entry point for the start button.
    pub fn on_start(&mut self, player_one: &str, player_two: &str) -> GameResult<Events> {
        self.dispatch(Action::start(player_one, player_two))
    }

    /// Host entry point for a cell click.
    pub fn on_select(&mut self, index: usize) -> GameResult<Events> {
        self.dispatch(Action::Select(index))
    }

    /// Host entry point for a once-per-second timer.
    pub fn on_tick(&mut self) -> GameResult<Events> {
        self.dispatch(Action::Tick)
    }

    /// Host entry point for a free-running clock.
    ///
    /// Does nothing while the timer is stopped.
    pub fn on_elapsed(&mut self, elapsed: Duration) -> GameResult<Events> {
        if !self.session.is_timer_running() {
            return Ok(Events::new());
        }
        self.dispatch(Action::Advance(elapsed))
    }

    /// Host entry point for an explicit "end game" control.
    pub fn on_end(&mut self) -> GameResult<Events> {
        self.dispatch(Action::End)
    }

    /// Host entry point for the reset button.
    pub fn on_reset(&mut self) -> GameResult<Events> {
        self.dispatch(Action::Reset)
    }
}
