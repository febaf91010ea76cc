//! Session controller - screen state machine
//!
//! ```text
//! Menu ──click difficulty──▶ Playing ──all placed──▶ Won ──┬─ Restart ─▶ Playing (same difficulty)
//!                               │                         └─ Menu ────▶ Menu
//!                               └──countdown expired──▶ TimedOut ─ (same two buttons)
//! ```
//!
//! Quit is accepted on every screen. Restarting builds a fresh [`PlaySession`]
//! with a new shuffle; it never nests.

use std::mem;

use tracing::{debug, info};

use crate::layout::{self, EndKind};
use crate::puzzle::PuzzleState;
use crate::rng::SimpleRng;
use crate::timer::Countdown;
use crate::types::{Difficulty, InputEvent, Outcome, PuzzleConfig, CANVAS_SIZE, MENU_CANVAS_SIZE};

/// Whether the frame loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State of an active play session.
#[derive(Debug, Clone)]
pub struct PlaySession {
    difficulty: Difficulty,
    puzzle: PuzzleState,
    timer: Countdown,
}

impl PlaySession {
    pub fn new(difficulty: Difficulty, config: &PuzzleConfig, rng: &mut SimpleRng) -> Self {
        Self {
            difficulty,
            puzzle: PuzzleState::new(difficulty.rows(), difficulty.cols(), config, rng),
            timer: Countdown::new(difficulty.duration_seconds(), config.ticks_per_second),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn puzzle_mut(&mut self) -> &mut PuzzleState {
        &mut self.puzzle
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn outcome(&self) -> Outcome {
        self.puzzle.outcome()
    }

    /// Advance the countdown one frame; expiry ends an unfinished puzzle.
    pub fn tick(&mut self) {
        if self.outcome().is_terminal() {
            return;
        }
        self.timer.tick();
        if self.timer.expired() {
            self.puzzle.time_out();
        }
    }
}

/// The screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu,
    Playing(PlaySession),
    Won {
        difficulty: Difficulty,
        seconds_taken: u32,
    },
    TimedOut {
        difficulty: Difficulty,
    },
}

impl Screen {
    /// Canvas side for this screen, in logical units.
    pub fn canvas_size(&self) -> i32 {
        match self {
            Screen::Menu => MENU_CANVAS_SIZE,
            _ => CANVAS_SIZE,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => layout::MENU_TITLE,
            _ => layout::PUZZLE_TITLE,
        }
    }

    fn end_kind(&self) -> Option<(EndKind, Difficulty)> {
        match self {
            Screen::Won { difficulty, .. } => Some((EndKind::Won, *difficulty)),
            Screen::TimedOut { difficulty } => Some((EndKind::TimedOut, *difficulty)),
            _ => None,
        }
    }
}

/// Top-level game: owns the current screen and the shuffle RNG.
#[derive(Debug, Clone)]
pub struct Game {
    screen: Screen,
    rng: SimpleRng,
    config: PuzzleConfig,
    sessions_started: u32,
}

impl Game {
    /// Create a game showing the difficulty menu.
    pub fn new(seed: u32, config: PuzzleConfig) -> Self {
        Self {
            screen: Screen::Menu,
            rng: SimpleRng::new(seed),
            config,
            sessions_started: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&PlaySession> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut PlaySession> {
        match &mut self.screen {
            Screen::Playing(session) => Some(session),
            _ => None,
        }
    }

    /// Number of play sessions started so far (restarts included).
    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Canvas side of the current screen.
    pub fn canvas_size(&self) -> i32 {
        self.screen.canvas_size()
    }

    /// Begin a fresh session with a new shuffle.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.sessions_started += 1;
        info!(
            difficulty = difficulty.as_str(),
            rng_state = self.rng.state(),
            session = self.sessions_started,
            "puzzle session started"
        );
        self.screen = Screen::Playing(PlaySession::new(difficulty, &self.config, &mut self.rng));
    }

    /// Replay the difficulty of the finished session.
    pub fn restart(&mut self) {
        match self.screen.end_kind() {
            Some((_, difficulty)) => self.start(difficulty),
            None => debug!("restart ignored outside an end screen"),
        }
    }

    pub fn return_to_menu(&mut self) {
        info!("returned to menu");
        self.screen = Screen::Menu;
    }

    /// Apply one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        if event == InputEvent::Quit {
            info!("quit requested");
            return Flow::Quit;
        }

        match &mut self.screen {
            Screen::Menu => {
                if let InputEvent::PointerDown(p) = event {
                    if let Some(difficulty) = layout::menu_hit(p) {
                        self.start(difficulty);
                    }
                }
            }
            Screen::Playing(session) => {
                session.puzzle_mut().apply(event);
                self.finish_if_over();
            }
            Screen::Won { .. } | Screen::TimedOut { .. } => {
                if let (InputEvent::PointerDown(p), Some((kind, _))) = (event, self.screen.end_kind()) {
                    if layout::restart_button(kind).contains(p) {
                        self.restart();
                    } else if layout::menu_button(kind).contains(p) {
                        self.return_to_menu();
                    }
                }
            }
        }
        Flow::Continue
    }

    /// Advance the countdown one frame.
    pub fn tick(&mut self) {
        if let Screen::Playing(session) = &mut self.screen {
            session.tick();
            self.finish_if_over();
        }
    }

    /// Run one frame: apply the queued events in order, then tick.
    ///
    /// A frame's pointer events were mapped onto the canvas that was drawn.
    /// Once an event switches the screen, the rest of them no longer line up
    /// with what is shown, so they are dropped. Quit still goes through.
    pub fn frame<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let drawn = mem::discriminant(&self.screen);
        let mut switched = false;
        let mut discarded = 0usize;
        for event in events {
            switched |= mem::discriminant(&self.screen) != drawn;
            if switched && event != InputEvent::Quit {
                discarded += 1;
                continue;
            }
            if self.handle_event(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        if discarded > 0 {
            debug!(discarded, "dropped input received after the screen changed");
        }
        self.tick();
        Flow::Continue
    }

    fn finish_if_over(&mut self) {
        let Screen::Playing(session) = &self.screen else {
            return;
        };
        match session.outcome() {
            Outcome::InProgress => {}
            Outcome::Won => {
                let difficulty = session.difficulty();
                let seconds_taken = session.timer().elapsed_seconds();
                info!(difficulty = difficulty.as_str(), seconds_taken, "puzzle solved");
                self.screen = Screen::Won {
                    difficulty,
                    seconds_taken,
                };
            }
            Outcome::TimedOut => {
                let difficulty = session.difficulty();
                info!(difficulty = difficulty.as_str(), "time ran out");
                self.screen = Screen::TimedOut { difficulty };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    const NO_EVENTS: [InputEvent; 0] = [];

    fn click(p: Point) -> InputEvent {
        InputEvent::PointerDown(p)
    }

    #[test]
    fn starts_on_menu() {
        let game = Game::new(1, PuzzleConfig::default());
        assert!(matches!(game.screen(), Screen::Menu));
        assert_eq!(game.canvas_size(), 300);
        assert_eq!(game.screen().title(), "Select Difficulty");
    }

    #[test]
    fn menu_click_starts_matching_difficulty() {
        let mut game = Game::new(1, PuzzleConfig::default());
        assert_eq!(game.handle_event(click(Point::new(150, 205))), Flow::Continue);
        let session = game.session().unwrap();
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.puzzle().tiles().len(), 25);
        assert_eq!(session.timer().remaining_ticks(), 3600);
        assert_eq!(game.canvas_size(), 600);
    }

    #[test]
    fn menu_ignores_clicks_outside_buttons_and_does_not_tick() {
        let mut game = Game::new(1, PuzzleConfig::default());
        game.handle_event(click(Point::new(5, 5)));
        game.tick();
        assert!(matches!(game.screen(), Screen::Menu));
        assert_eq!(game.sessions_started(), 0);
    }

    #[test]
    fn quit_from_every_screen() {
        let mut game = Game::new(1, PuzzleConfig::default());
        assert_eq!(game.handle_event(InputEvent::Quit), Flow::Quit);
        game.start(Difficulty::Easy);
        assert_eq!(game.handle_event(InputEvent::Quit), Flow::Quit);
        game.screen = Screen::TimedOut {
            difficulty: Difficulty::Easy,
        };
        assert_eq!(game.handle_event(InputEvent::Quit), Flow::Quit);
    }

    #[test]
    fn end_screen_restart_keeps_difficulty() {
        let mut game = Game::new(1, PuzzleConfig::default());
        game.screen = Screen::TimedOut {
            difficulty: Difficulty::Medium,
        };
        game.handle_event(click(Point::new(200, 370)));
        assert_eq!(game.session().unwrap().difficulty(), Difficulty::Medium);
        assert_eq!(game.sessions_started(), 1);
    }

    #[test]
    fn win_screen_menu_button_returns_to_menu() {
        let mut game = Game::new(1, PuzzleConfig::default());
        game.screen = Screen::Won {
            difficulty: Difficulty::Hard,
            seconds_taken: 12,
        };
        // The timed-out button row is not active on the win screen.
        game.handle_event(click(Point::new(400, 370)));
        assert!(matches!(game.screen(), Screen::Won { .. }));
        game.handle_event(click(Point::new(400, 440)));
        assert!(matches!(game.screen(), Screen::Menu));
    }

    #[test]
    fn restart_outside_end_screen_is_ignored() {
        let mut game = Game::new(1, PuzzleConfig::default());
        game.restart();
        assert!(matches!(game.screen(), Screen::Menu));
    }

    #[test]
    fn countdown_expiry_moves_to_timed_out() {
        let config = PuzzleConfig::default().with_ticks_per_second(2);
        let mut game = Game::new(1, config);
        game.start(Difficulty::Easy);
        for _ in 0..59 {
            assert_eq!(game.frame(NO_EVENTS), Flow::Continue);
        }
        assert!(matches!(game.screen(), Screen::Playing(_)));
        game.frame(NO_EVENTS);
        assert!(matches!(
            game.screen(),
            Screen::TimedOut {
                difficulty: Difficulty::Easy
            }
        ));
    }

    #[test]
    fn restart_reshuffles() {
        let mut game = Game::new(77, PuzzleConfig::default());
        game.start(Difficulty::Hard);
        let first: Vec<Point> = game
            .session()
            .unwrap()
            .puzzle()
            .tiles()
            .iter()
            .map(|t| t.position)
            .collect();
        game.screen = Screen::TimedOut {
            difficulty: Difficulty::Hard,
        };
        game.restart();
        let second: Vec<Point> = game
            .session()
            .unwrap()
            .puzzle()
            .tiles()
            .iter()
            .map(|t| t.position)
            .collect();
        assert_ne!(first, second);
    }
}
