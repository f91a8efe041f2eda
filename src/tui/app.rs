//! Application state for the terminal front end.

use prime_duel::{
    FinalReport, PassReason, Player, PlayerPair, Presenter, SessionEvent, SessionView,
};
use tracing::debug;

/// Terminal app state: the latest view plus UI-only state.
pub struct App {
    view: SessionView,
    status: String,
    name_inputs: PlayerPair<String>,
    focus: Player,
    cursor: usize,
    columns: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application laying the grid out in `columns`.
    pub fn new(columns: usize) -> Self {
        Self {
            view: SessionView::setup(0),
            status: "Enter player names, then press Enter to start.".to_string(),
            name_inputs: PlayerPair::default(),
            focus: Player::One,
            cursor: 0,
            columns: columns.max(1),
            should_quit: false,
        }
    }

    /// Latest session view.
    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Text typed into the name fields.
    pub fn name_inputs(&self) -> &PlayerPair<String> {
        &self.name_inputs
    }

    /// Name field that receives typing.
    pub fn focus(&self) -> Player {
        self.focus
    }

    /// Moves typing focus to the other name field.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Appends a character to the focused name field.
    pub fn type_char(&mut self, c: char) {
        self.name_inputs[self.focus].push(c);
    }

    /// Deletes the last character of the focused name field.
    pub fn backspace(&mut self) {
        self.name_inputs[self.focus].pop();
    }

    /// Grid cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the grid cursor.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Cells per grid row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Asks the main loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Name for a player, looking at a `Started` event in the same batch
    /// first since the view is refreshed after events are handled.
    fn name_or(&self, player: Player, events: &[SessionEvent]) -> String {
        events
            .iter()
            .find_map(|e| match e {
                SessionEvent::Started { names, .. } => Some(names[player].clone()),
                _ => None,
            })
            .unwrap_or_else(|| self.view.names[player].clone())
    }
}

impl Presenter for App {
    fn render(&mut self, view: &SessionView) {
        self.view = view.clone();
    }

    fn on_events(&mut self, events: &[SessionEvent]) {
        for event in events {
            debug!(?event, "Handling session event");
            match event {
                SessionEvent::Started { names, primes, .. } => {
                    self.cursor = 0;
                    self.status = format!(
                        "{} vs {}: {} primes hidden in the grid. {} goes first.",
                        names[Player::One],
                        names[Player::Two],
                        primes,
                        names[Player::One]
                    );
                }
                SessionEvent::Picked(record) => {
                    let picker = record.player;
                    self.status = if record.correct {
                        format!("{} picked {}: prime! +1", self.name_or(picker, events), record.value)
                    } else {
                        format!("{} picked {}: not prime.", self.name_or(picker, events), record.value)
                    };
                }
                SessionEvent::TurnPassed {
                    to,
                    reason: PassReason::TimeUp,
                } => {
                    self.status = format!("Time's up! {}'s turn.", self.name_or(*to, events));
                }
                SessionEvent::Reset => {
                    self.name_inputs = PlayerPair::default();
                    self.focus = Player::One;
                    self.cursor = 0;
                    self.status = "Enter player names, then press Enter to start.".to_string();
                }
                SessionEvent::TurnPassed { .. } | SessionEvent::Ticked { .. } | SessionEvent::GameOver(_) => {}
            }
        }
    }

    fn game_over(&mut self, report: &FinalReport) {
        self.status = format!("{} Press 'r' to play again or 'q' to quit.", report.announcement());
    }
}
