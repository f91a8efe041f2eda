//! `GameSession`: the turn / timer / score state machine.

use std::time::Duration;

use tracing::{debug, info, instrument, trace, warn};

use super::clock::{ClockEvent, TurnClock};
use super::events::{Events, PassReason, SessionEvent};
use super::state::{normalize_name, Session};
use super::view::SessionView;
use super::PhaseKind;
use crate::core::{Action, GameConfig, GameRng, Player, PlayerPair};
use crate::error::{GameError, GameResult};
use crate::primes::generate_numbers;
use crate::rules::FinalReport;

#[derive(Clone, Debug)]
enum Phase {
    Setup,
    Playing(Session),
    Over { session: Session, report: FinalReport },
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Setup => PhaseKind::Setup,
            Phase::Playing(_) => PhaseKind::Playing,
            Phase::Over { .. } => PhaseKind::Over,
        }
    }
}

/// A two-player prime-picking game.
///
/// Owns the configuration, the RNG that grids are drawn from, the current
/// phase and the turn clock. Every operation returns the events it caused.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use prime_duel::core::{GameConfig, Player};
/// use prime_duel::session::{GameSession, PhaseKind};
///
/// let config = GameConfig::default()
///     .with_seed(7)
///     .with_feedback_delay(Duration::ZERO);
/// let mut game = GameSession::new(config).unwrap();
///
/// game.start("Ann", "");
/// assert_eq!(game.phase(), PhaseKind::Playing);
/// assert_eq!(game.session().unwrap().name(Player::Two), "Player 2");
///
/// game.select(0).unwrap();
/// assert_eq!(game.session().unwrap().current_player(), Player::Two);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    phase: Phase,
    clock: TurnClock,
}

impl GameSession {
    /// Create a session in `Setup`, validating the configuration.
    ///
    /// Seeds the RNG from `config.seed`, or from the OS when unset.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Created game session");
        Ok(Self {
            config,
            rng,
            phase: Phase::Setup,
            clock: TurnClock::new(),
        })
    }

    // === Queries ===

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session RNG, for reproducing a run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Live or finished session data; `None` during setup.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Setup => None,
            Phase::Playing(session) | Phase::Over { session, .. } => Some(session),
        }
    }

    /// Final report once the session is over.
    #[must_use]
    pub fn final_report(&self) -> Option<&FinalReport> {
        match &self.phase {
            Phase::Over { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Check if the turn timer is running.
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Check if a pick is waiting for its turn to pass.
    #[must_use]
    pub fn is_pass_pending(&self) -> bool {
        self.clock.is_pass_pending()
    }

    /// The turn clock.
    #[must_use]
    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    /// True iff every cell has been picked. Always false during setup.
    #[must_use]
    pub fn check_all_selected(&self) -> bool {
        self.session().is_some_and(Session::all_selected)
    }

    /// Snapshot for presentation.
    #[must_use]
    pub fn view(&self) -> SessionView {
        match &self.phase {
            Phase::Setup => SessionView::setup(self.config.turn_seconds),
            Phase::Playing(session) => SessionView::of_session(
                PhaseKind::Playing,
                session,
                self.clock.is_pass_pending(),
                None,
            ),
            Phase::Over { session, report } => {
                SessionView::of_session(PhaseKind::Over, session, false, Some(report))
            }
        }
    }

    // === Transitions ===

    /// Apply any action. This is the reducer-style entry point.
    pub fn apply(&mut self, action: Action) -> GameResult<Events> {
        match action {
            Action::Start {
                player_one,
                player_two,
            } => Ok(self.start(&player_one, &player_two)),
            Action::Select(index) => self.select(index),
            Action::Tick => self.tick(),
            Action::Advance(elapsed) => self.advance(elapsed),
            Action::End => self.end(),
            Action::Reset => Ok(self.reset()),
        }
    }

    /// Start a new session and (re)start the turn timer.
    ///
    /// Accepted in every phase: a live session is discarded.
    #[instrument(skip(self))]
    pub fn start(&mut self, player_one: &str, player_two: &str) -> Events {
        if matches!(self.phase, Phase::Playing(_)) {
            warn!("Starting over a live session");
        }

        let names = PlayerPair::new(
            normalize_name(player_one, Player::One),
            normalize_name(player_two, Player::Two),
        );

        let mut grid_rng = self.rng.fork();
        let grid = generate_numbers(&mut grid_rng, &self.config.ranges, self.config.grid_size);
        let (cells, primes) = (grid.len(), grid.primes.len());

        self.phase = Phase::Playing(Session::new(names.clone(), grid, self.config.turn_seconds));
        self.clock.start();

        info!(
            player_one = %names[Player::One],
            player_two = %names[Player::Two],
            cells,
            primes,
            grid_seed = grid_rng.seed(),
            "Session started"
        );

        let mut events = Events::new();
        events.push(SessionEvent::Started {
            names,
            cells,
            primes,
        });
        events
    }

    /// Pick the cell at `index` for the player to move.
    ///
    /// Picking an already-picked cell, or picking while the previous pick's
    /// pass is pending, does nothing.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> GameResult<Events> {
        let delay = self.config.feedback_delay();
        let end_on_last = self.config.end_on_last_selection;
        let turn_seconds = self.config.turn_seconds;

        let pass_pending = self.clock.is_pass_pending();

        let session = self.playing_mut("select")?;
        let len = session.cells().len();
        let Some(cell) = session.cell(index) else {
            return Err(GameError::invalid_index(index, len));
        };

        let mut events = Events::new();
        if cell.is_selected() {
            debug!(index, "Cell already picked; ignoring");
            return Ok(events);
        }
        if pass_pending {
            debug!(index, "Turn already used; ignoring");
            return Ok(events);
        }

        let record = session.record_pick(index);
        debug!(
            player = %record.player,
            value = record.value,
            correct = record.correct,
            score = session.score(record.player),
            "Cell picked"
        );
        events.push(SessionEvent::Picked(record));

        if delay.is_zero() {
            let to = session.pass_turn(turn_seconds);
            events.push(SessionEvent::TurnPassed {
                to,
                reason: PassReason::Picked,
            });
        } else {
            self.clock.schedule_pass(delay);
        }

        if end_on_last && self.check_all_selected() {
            info!("Last cell picked; ending session");
            events.push(self.finish()?);
        }
        Ok(events)
    }

    /// One second of turn time elapsed.
    ///
    /// Settles a pending pass first. When the clock reaches zero the turn
    /// passes, and if every cell is picked the session ends.
    #[instrument(level = "debug", skip(self))]
    pub fn tick(&mut self) -> GameResult<Events> {
        self.playing_mut("tick")?;
        let mut events = Events::new();
        self.settle_pass(&mut events)?;
        self.count_down(&mut events)?;
        Ok(events)
    }

    /// Report wall-clock time to the session clock.
    ///
    /// Resolves a pending pass at its deadline and fires `tick` at every
    /// whole-second boundary, in order. Stops early if the session ends.
    #[instrument(level = "trace", skip(self))]
    pub fn advance(&mut self, elapsed: Duration) -> GameResult<Events> {
        self.playing_mut("advance")?;
        let mut events = Events::new();

        for clock_event in self.clock.advance(elapsed) {
            if !matches!(self.phase, Phase::Playing(_)) {
                break;
            }
            trace!(?clock_event, "Clock event");
            match clock_event {
                ClockEvent::PassDue => self.pass_turn(PassReason::Picked, &mut events)?,
                ClockEvent::SecondElapsed => {
                    self.settle_pass(&mut events)?;
                    self.count_down(&mut events)?;
                }
            }
        }
        Ok(events)
    }

    /// Stop the timer and decide the winner.
    #[instrument(skip(self))]
    pub fn end(&mut self) -> GameResult<Events> {
        self.playing_mut("end")?;
        let mut events = Events::new();
        events.push(self.finish()?);
        Ok(events)
    }

    /// Stop the timer and discard the session, returning to a blank setup.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Events {
        self.clock.stop();
        self.phase = Phase::Setup;
        info!("Session reset");

        let mut events = Events::new();
        events.push(SessionEvent::Reset);
        events
    }

    // === Internals ===

    fn playing_mut(&mut self, operation: &'static str) -> GameResult<&mut Session> {
        match &mut self.phase {
            Phase::Playing(session) => Ok(session),
            other => Err(GameError::wrong_phase(operation, other.kind())),
        }
    }

    fn settle_pass(&mut self, events: &mut Events) -> GameResult<()> {
        if self.clock.take_pass() {
            self.pass_turn(PassReason::Picked, events)?;
        }
        Ok(())
    }

    fn pass_turn(&mut self, reason: PassReason, events: &mut Events) -> GameResult<()> {
        let turn_seconds = self.config.turn_seconds;
        let to = self.playing_mut("pass")?.pass_turn(turn_seconds);
        debug!(to = %to, ?reason, "Turn passed");
        events.push(SessionEvent::TurnPassed { to, reason });
        Ok(())
    }

    fn count_down(&mut self, events: &mut Events) -> GameResult<()> {
        let time_left = self.playing_mut("tick")?.count_down();
        events.push(SessionEvent::Ticked { time_left });

        if time_left == 0 {
            self.pass_turn(PassReason::TimeUp, events)?;
            if self.check_all_selected() {
                info!("Clock ran out with every cell picked; ending session");
                events.push(self.finish()?);
            }
        }
        Ok(())
    }

    /// Move `Playing` to `Over`.
    fn finish(&mut self) -> GameResult<SessionEvent> {
        let session = self.playing_mut("end")?.clone();
        self.clock.stop();

        let report = FinalReport::new(session.names().clone(), session.scores().clone());
        info!(
            announcement = %report.announcement(),
            score_one = report.scores[Player::One],
            score_two = report.scores[Player::Two],
            "Session over"
        );
        self.phase = Phase::Over {
            session,
            report: report.clone(),
        };
        Ok(SessionEvent::GameOver(report))
    }
}
