//! Bounded per-frame event queue.
//!
//! Events read from the terminal between two frames are collected here and
//! then applied in arrival order. Capacity is fixed, so a burst of mouse
//! motion can never grow the queue: consecutive moves collapse into the
//! latest one and anything past capacity is dropped (and counted). Quit is
//! latched separately so it can never be lost.

use arrayvec::ArrayVec;

use crate::types::{InputEvent, MAX_EVENTS_PER_FRAME};

#[derive(Debug, Clone, Default)]
pub struct FrameEvents {
    events: ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>,
    quit: bool,
    dropped: u32,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::PointerMove(_) => {
                if let Some(last) = self.events.last_mut() {
                    if matches!(last, InputEvent::PointerMove(_)) {
                        *last = event;
                        return;
                    }
                }
                self.try_push(event);
            }
            _ => self.try_push(event),
        }
    }

    fn try_push(&mut self, event: InputEvent) {
        if self.events.try_push(event).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && !self.quit
    }

    /// Events dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Take this frame's events in order, with Quit (if any) last.
    ///
    /// Leaves the queue empty for the next frame.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        let quit = std::mem::take(&mut self.quit);
        self.dropped = 0;
        self.events
            .drain(..)
            .chain(quit.then_some(InputEvent::Quit))
    }
}
