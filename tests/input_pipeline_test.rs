//! Terminal events through mapping and the per-frame queue into the game.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use picture_puzzle::core::{Flow, Game, Screen};
use picture_puzzle::input::{map_event, FrameEvents};
use picture_puzzle::term::{GameView, Viewport};
use picture_puzzle::types::{Difficulty, PuzzleConfig};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_mouse_click_on_menu_label_starts_that_difficulty() {
    let mut game = Game::new(11, PuzzleConfig::default());
    let view = GameView::default();
    let vp = Viewport::new(60, 30);
    let m = view.mapping(&game, vp);

    // "Hard" is centered on (150, 205): column 30, row 20 of a 60x30 menu.
    let (col, row) = m.canvas_to_cell(picture_puzzle::types::Point::new(150, 205)).unwrap();
    let mut events = FrameEvents::new();
    for ev in [
        mouse(MouseEventKind::Moved, 3, 3),
        mouse(MouseEventKind::Down(MouseButton::Left), col, row),
        mouse(MouseEventKind::Up(MouseButton::Left), col, row),
    ] {
        if let Some(input) = map_event(&ev, &m) {
            events.push(input);
        }
    }
    assert_eq!(events.len(), 3);

    assert_eq!(game.frame(events.drain()), Flow::Continue);
    assert_eq!(game.session().map(|s| s.difficulty()), Some(Difficulty::Hard));
}

#[test]
fn test_quit_key_ends_the_frame_loop() {
    let mut game = Game::new(11, PuzzleConfig::default());
    let m = GameView::default().mapping(&game, Viewport::new(80, 24));
    let mut events = FrameEvents::new();

    for ev in [
        Event::Key(KeyEvent::from(KeyCode::Char('x'))),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        mouse(MouseEventKind::ScrollDown, 0, 0),
    ] {
        if let Some(input) = map_event(&ev, &m) {
            events.push(input);
        }
    }

    assert!(events.quit_requested());
    assert_eq!(game.frame(events.drain()), Flow::Quit);
    assert!(matches!(game.screen(), Screen::Menu));
}
