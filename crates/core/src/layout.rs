//! Screen layout - text anchors and button hit boxes in canvas units.
//!
//! The terminal view draws labels at these anchors and the session
//! controller hit-tests clicks against the same boxes, so the two never
//! drift apart.

use crate::types::{Difficulty, Point, Rect, LABEL_CHAR_WIDTH, LABEL_HEIGHT};

/// Window title while a puzzle or end screen is shown.
pub const PUZZLE_TITLE: &str = "MoveFaster Puzzle";

/// Window title on the difficulty menu.
pub const MENU_TITLE: &str = "Select Difficulty";

pub const RESTART_LABEL: &str = "Restart";
pub const MENU_LABEL: &str = "Menu";
pub const CONGRATULATIONS_TEXT: &str = "Congratulations!";
pub const TIMES_UP_TEXT: &str = "Time's Up!";

/// Countdown line while playing: prefix, seconds left, [`SECONDS_SUFFIX`].
pub const TIME_LEFT_PREFIX: &str = "Time Left: ";

/// Win screen line: prefix, seconds taken, [`SECONDS_SUFFIX`].
pub const TIME_TAKEN_PREFIX: &str = "Time: ";

pub const SECONDS_SUFFIX: &str = " seconds";

/// Top-left anchor of the countdown text.
pub const TIMER_ANCHOR: Point = Point::new(10, 10);

/// Which end screen a layout belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndKind {
    Won,
    TimedOut,
}

/// A clickable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
}

impl Button {
    /// Button sized to its label, centered on `center`.
    pub fn centered(label: &'static str, center: Point) -> Self {
        let w = label.chars().count() as i32 * LABEL_CHAR_WIDTH;
        Self {
            label,
            rect: Rect::centered(center, w, LABEL_HEIGHT),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

/// Difficulty buttons, top to bottom.
pub fn menu_buttons() -> [(Difficulty, Button); 3] {
    Difficulty::ALL.map(|d| {
        let y = match d {
            Difficulty::Easy => 155,
            Difficulty::Medium => 180,
            Difficulty::Hard => 205,
        };
        (d, Button::centered(d.label(), Point::new(150, y)))
    })
}

/// Difficulty whose button contains `p`.
pub fn menu_hit(p: Point) -> Option<Difficulty> {
    menu_buttons()
        .into_iter()
        .find(|(_, b)| b.contains(p))
        .map(|(d, _)| d)
}

/// Center of the headline text on an end screen.
pub fn headline_anchor() -> Point {
    Point::new(300, 300)
}

/// Center of the "Time: N seconds" line on the win screen.
pub fn time_taken_anchor() -> Point {
    Point::new(300, 370)
}

fn end_buttons_y(kind: EndKind) -> i32 {
    match kind {
        EndKind::Won => 440,
        EndKind::TimedOut => 370,
    }
}

pub fn restart_button(kind: EndKind) -> Button {
    Button::centered(RESTART_LABEL, Point::new(200, end_buttons_y(kind)))
}

pub fn menu_button(kind: EndKind) -> Button {
    Button::centered(MENU_LABEL, Point::new(400, end_buttons_y(kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_buttons_hit_their_own_difficulty() {
        assert_eq!(menu_hit(Point::new(150, 155)), Some(Difficulty::Easy));
        assert_eq!(menu_hit(Point::new(150, 180)), Some(Difficulty::Medium));
        assert_eq!(menu_hit(Point::new(150, 205)), Some(Difficulty::Hard));
        assert_eq!(menu_hit(Point::new(20, 20)), None);
    }

    #[test]
    fn menu_buttons_do_not_overlap() {
        let buttons = menu_buttons();
        for (i, (_, a)) in buttons.iter().enumerate() {
            for (_, b) in buttons.iter().skip(i + 1) {
                assert!(a.rect.y + a.rect.h <= b.rect.y || b.rect.y + b.rect.h <= a.rect.y);
            }
        }
    }

    #[test]
    fn button_width_follows_label() {
        let b = Button::centered("Menu", Point::new(400, 440));
        assert_eq!(b.rect.w, 4 * LABEL_CHAR_WIDTH);
        assert_eq!(b.rect.center(), Point::new(400, 440));
    }

    #[test]
    fn end_screen_buttons_move_with_kind() {
        assert_eq!(restart_button(EndKind::Won).rect.center(), Point::new(200, 440));
        assert_eq!(menu_button(EndKind::Won).rect.center(), Point::new(400, 440));
        assert_eq!(restart_button(EndKind::TimedOut).rect.center(), Point::new(200, 370));
        assert_eq!(menu_button(EndKind::TimedOut).rect.center(), Point::new(400, 370));
    }
}
