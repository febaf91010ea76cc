//! Mapping from terminal events to canvas-space input events.

use crate::types::{CanvasMapping, InputEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map a terminal event to a game input event.
///
/// Mouse positions are converted through `mapping`. Resize, focus and paste
/// events are not input for the game and map to `None`.
pub fn map_event(event: &Event, mapping: &CanvasMapping) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            should_quit(*key).then_some(InputEvent::Quit)
        }
        Event::Mouse(mouse) => map_mouse(*mouse, mapping),
        _ => None,
    }
}

/// Map a mouse event. Only the left button grabs tiles.
pub fn map_mouse(mouse: MouseEvent, mapping: &CanvasMapping) -> Option<InputEvent> {
    let p = mapping.cell_to_canvas(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown(p)),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp(p)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(InputEvent::PointerMove(p))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
