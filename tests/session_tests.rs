//! Session integration tests: full games driven through the public API.

use std::time::Duration;

use prime_duel::{
    is_prime, Controller, GameConfig, GameSession, Outcome, PassReason, PhaseKind, Player,
    Presenter, SessionEvent, SessionView,
};

fn instant_game(seed: u64) -> GameSession {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_feedback_delay(Duration::ZERO);
    GameSession::new(config).unwrap()
}

/// Index of the first unpicked cell whose primality matches `prime`.
fn find_cell(game: &GameSession, prime: bool) -> Option<usize> {
    let session = game.session()?;
    session
        .cells()
        .iter()
        .position(|cell| !cell.is_selected() && is_prime(i64::from(cell.value)) == prime)
}

/// A started instant game whose grid holds at least one prime and one composite.
fn mixed_game() -> GameSession {
    for seed in 0..1_000 {
        let mut game = instant_game(seed);
        game.start("Ann", "Bo");
        if find_cell(&game, true).is_some() && find_cell(&game, false).is_some() {
            return game;
        }
    }
    panic!("no seed produced a mixed grid");
}

fn count_passes(events: &[SessionEvent], reason: PassReason) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::TurnPassed { reason: r, .. } if *r == reason))
        .count()
}

// =============================================================================
// Start
// =============================================================================

#[test]
fn test_start_state() {
    let mut game = instant_game(7);
    game.start("  Ann ", "Bo");

    let session = game.session().unwrap();
    assert_eq!(session.name(Player::One), "Ann");
    assert_eq!(session.name(Player::Two), "Bo");
    assert_eq!(session.score(Player::One), 0);
    assert_eq!(session.score(Player::Two), 0);
    assert_eq!(session.current_player(), Player::One);
    assert_eq!(session.time_left(), 30);
    assert_eq!(session.cells().len(), 25);
    assert_eq!(session.selected_count(), 0);
    assert!(game.is_timer_running());

    for value in session.numbers() {
        assert!((100..=500).contains(&value));
        assert_eq!(session.primes().contains(&value), is_prime(i64::from(value)));
    }
}

#[test]
fn test_oversized_grid_rejected_before_start() {
    let config = GameConfig::default().with_grid_size(usize::MAX);
    assert!(GameSession::new(config).is_err());
}

#[test]
fn test_blank_names_default() {
    let mut game = instant_game(7);
    game.start("", "   ");

    let session = game.session().unwrap();
    assert_eq!(session.name(Player::One), "Player 1");
    assert_eq!(session.name(Player::Two), "Player 2");
}

#[test]
fn test_same_seed_same_grids() {
    let mut a = instant_game(99);
    let mut b = instant_game(99);

    for _ in 0..3 {
        a.start("Ann", "Bo");
        b.start("Ann", "Bo");
        let left: Vec<u32> = a.session().unwrap().numbers().collect();
        let right: Vec<u32> = b.session().unwrap().numbers().collect();
        assert_eq!(left, right);
    }
}

#[test]
fn test_restart_draws_new_grid() {
    let mut game = instant_game(99);
    game.start("Ann", "Bo");
    let first: Vec<u32> = game.session().unwrap().numbers().collect();
    game.start("Ann", "Bo");
    let second: Vec<u32> = game.session().unwrap().numbers().collect();

    // 25 draws from 401 values; a repeat would mean the rng was not forked.
    assert_ne!(first, second);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_prime_pick_scores_one() {
    let mut game = mixed_game();
    let index = find_cell(&game, true).unwrap();

    game.select(index).unwrap();

    let session = game.session().unwrap();
    assert_eq!(session.score(Player::One), 1);
    assert_eq!(session.cell(index).unwrap().correct(), Some(true));
    assert_eq!(session.current_player(), Player::Two);
}

#[test]
fn test_composite_pick_scores_nothing() {
    let mut game = mixed_game();
    let index = find_cell(&game, false).unwrap();

    game.select(index).unwrap();

    let session = game.session().unwrap();
    assert_eq!(session.score(Player::One), 0);
    assert_eq!(session.cell(index).unwrap().correct(), Some(false));
    assert_eq!(session.current_player(), Player::Two);
}

#[test]
fn test_reselect_is_noop() {
    let mut game = mixed_game();
    let index = find_cell(&game, true).unwrap();
    game.select(index).unwrap();
    let before = game.session().unwrap().clone();

    let events = game.select(index).unwrap();

    assert!(events.is_empty());
    assert_eq!(game.session().unwrap(), &before);
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = instant_game(3);
    game.start("Ann", "Bo");
    assert!(game.select(25).is_err());
    assert_eq!(game.session().unwrap().selected_count(), 0);
}

#[test]
fn test_one_pick_per_turn_with_feedback_delay() {
    let mut game = GameSession::new(GameConfig::default().with_seed(5)).unwrap();
    game.start("Ann", "Bo");

    game.select(0).unwrap();
    assert!(game.is_pass_pending());
    let events = game.select(1).unwrap();
    assert!(events.is_empty());
    assert!(!game.session().unwrap().cell(1).unwrap().is_selected());

    let events = game.advance(Duration::from_millis(500)).unwrap();
    assert_eq!(count_passes(&events, PassReason::Picked), 1);
    assert_eq!(game.session().unwrap().current_player(), Player::Two);
    assert_eq!(game.session().unwrap().time_left(), 30);
}

// =============================================================================
// Timer
// =============================================================================

#[test]
fn test_thirty_ticks_switch_once() {
    let mut game = instant_game(11);
    game.start("Ann", "Bo");

    let mut events = Vec::new();
    for _ in 0..30 {
        events.extend(game.tick().unwrap());
    }

    assert_eq!(count_passes(&events, PassReason::TimeUp), 1);
    let session = game.session().unwrap();
    assert_eq!(session.current_player(), Player::Two);
    assert_eq!(session.time_left(), 30);
    assert_eq!(game.phase(), PhaseKind::Playing);
}

#[test]
fn test_advance_matches_ticks() {
    let mut ticked = instant_game(11);
    let mut advanced = instant_game(11);
    ticked.start("Ann", "Bo");
    advanced.start("Ann", "Bo");

    for _ in 0..45 {
        ticked.tick().unwrap();
    }
    advanced.advance(Duration::from_millis(45_300)).unwrap();

    assert_eq!(ticked.session(), advanced.session());
}

#[test]
fn test_timer_stopped_after_end() {
    let mut game = instant_game(2);
    game.start("Ann", "Bo");
    game.end().unwrap();

    assert!(!game.is_timer_running());
    assert!(game.tick().is_err());
    assert!(game.advance(Duration::from_secs(5)).is_err());
}

// =============================================================================
// Full Games
// =============================================================================

/// Ann never picks and times out; Bo picks every cell.
fn play_out(game: &mut GameSession) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    for _ in 0..10_000 {
        if game.phase() == PhaseKind::Over {
            return events;
        }
        let session = game.session().unwrap();
        let next = session.cells().iter().position(|c| !c.is_selected());
        match (session.current_player(), next) {
            (Player::Two, Some(index)) => events.extend(game.select(index).unwrap()),
            _ => events.extend(game.tick().unwrap()),
        }
    }
    panic!("game did not finish");
}

#[test]
fn test_end_to_end_bo_wins() {
    let mut game = mixed_game();
    let composite = find_cell(&game, false).unwrap();
    let prime = find_cell(&game, true).unwrap();

    game.select(composite).unwrap();
    assert_eq!(game.session().unwrap().current_player(), Player::Two);
    game.select(prime).unwrap();
    assert_eq!(game.session().unwrap().score(Player::One), 0);
    assert_eq!(game.session().unwrap().score(Player::Two), 1);

    let events = play_out(&mut game);

    assert_eq!(game.phase(), PhaseKind::Over);
    assert!(!game.is_timer_running());
    let report = game.final_report().unwrap();
    assert_eq!(report.scores[Player::One], 0);
    assert!(report.scores[Player::Two] >= 1);
    assert_eq!(report.outcome, Outcome::Winner(Player::Two));
    assert_eq!(report.announcement(), "Bo Wins!");

    let overs = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameOver(_)))
        .count();
    assert_eq!(overs, 1);
}

#[test]
fn test_last_pick_does_not_end_by_default() {
    let mut game = instant_game(4);
    game.start("Ann", "Bo");

    for index in 0..25 {
        game.select(index).unwrap();
    }

    assert!(game.check_all_selected());
    assert_eq!(game.phase(), PhaseKind::Playing);
    assert!(game.is_timer_running());

    for _ in 0..29 {
        game.tick().unwrap();
    }
    assert_eq!(game.phase(), PhaseKind::Playing);
    game.tick().unwrap();
    assert_eq!(game.phase(), PhaseKind::Over);
}

#[test]
fn test_end_on_last_selection_option() {
    let config = GameConfig::default()
        .with_seed(4)
        .with_feedback_delay(Duration::ZERO)
        .with_end_on_last_selection(true);
    let mut game = GameSession::new(config).unwrap();
    game.start("Ann", "Bo");

    for index in 0..24 {
        game.select(index).unwrap();
        assert_eq!(game.phase(), PhaseKind::Playing);
    }
    let events = game.select(24).unwrap();

    assert_eq!(game.phase(), PhaseKind::Over);
    assert!(matches!(events.last(), Some(SessionEvent::GameOver(_))));
    assert!(!game.is_timer_running());
}

#[test]
fn test_tie_announcement() {
    let mut game = instant_game(8);
    game.start("Ann", "Bo");
    game.end().unwrap();

    let report = game.final_report().unwrap();
    assert_eq!(report.outcome, Outcome::Tie);
    assert_eq!(report.announcement(), "It's a Tie!");
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_returns_to_blank_setup() {
    let mut game = mixed_game();
    game.select(0).unwrap();
    game.reset();

    assert_eq!(game.phase(), PhaseKind::Setup);
    assert!(!game.is_timer_running());
    assert!(game.session().is_none());
    assert!(game.tick().is_err());

    let view = game.view();
    assert_eq!(view, SessionView::setup(30));
}

#[test]
fn test_reset_after_game_over() {
    let mut game = instant_game(8);
    game.start("Ann", "Bo");
    game.end().unwrap();
    game.reset();

    assert_eq!(game.phase(), PhaseKind::Setup);
    assert!(game.final_report().is_none());
}

// =============================================================================
// Controller
// =============================================================================

#[derive(Default)]
struct Screen {
    banner: String,
    announcement: Option<String>,
}

impl Presenter for Screen {
    fn render(&mut self, view: &SessionView) {
        if view.phase == PhaseKind::Playing {
            self.banner = view.turn_banner();
        }
    }

    fn game_over(&mut self, report: &prime_duel::FinalReport) {
        self.announcement = Some(report.announcement());
    }
}

#[test]
fn test_controller_drives_presenter() {
    let mut controller = Controller::new(instant_game(6), Screen::default());

    controller.on_start("Ann", "Bo").unwrap();
    assert_eq!(controller.presenter().banner, "Ann's Turn");

    controller.on_select(0).unwrap();
    assert_eq!(controller.presenter().banner, "Bo's Turn");

    controller.on_end().unwrap();
    assert!(controller.presenter().announcement.is_some());
}
