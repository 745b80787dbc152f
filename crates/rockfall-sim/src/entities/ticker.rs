//! Ticker-tape text for the pause menu.

use std::any::Any;

use glam::Vec2;

use rockfall_core::constants::{
    TEXT_CHAR_WIDTH, TEXT_HEIGHT, TEXT_Z, TICKER_ERASE_DELAY_TICKS, TICKER_KEYPRESS_TICKS,
};
use rockfall_core::enums::EntityKind;

use super::{Body, Entity, TickContext};
use crate::timer::Timer;

/// Typing progress through the message rotation.
#[derive(Debug, Default)]
struct Tape {
    messages: Vec<String>,
    /// Index of the message typed after the current one is erased.
    next: usize,
    current: String,
    /// Characters of `current` already typed. `None` between messages.
    cursor: Option<usize>,
    shown: String,
}

impl Tape {
    /// One keypress: start a message, type its next character, or hold the
    /// finished message for the erase delay.
    fn keypress(&mut self) -> Option<u32> {
        match self.cursor {
            None => {
                self.current = self.messages.get(self.next)?.clone();
                self.shown.clear();
                self.cursor = Some(0);
                Some(TICKER_KEYPRESS_TICKS)
            }
            Some(typed) if typed <= self.current.chars().count() => {
                self.shown = self.current.chars().take(typed).collect();
                self.cursor = Some(typed + 1);
                None
            }
            Some(_) => {
                self.cursor = None;
                self.next = (self.next + 1) % self.messages.len();
                Some(TICKER_ERASE_DELAY_TICKS)
            }
        }
    }
}

/// Types a rotation of messages one character at a time, horizontally
/// centred on its anchor. Never collides, never wraps.
#[derive(Debug)]
pub struct TickerText {
    body: Body,
    anchor: Vec2,
    tape: Tape,
    keypress: Timer<Tape>,
    visible: bool,
}

impl TickerText {
    pub fn new<S: Into<String>>(anchor: Vec2, messages: impl IntoIterator<Item = S>) -> Self {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        let longest = messages.iter().map(|m| m.chars().count()).max().unwrap_or(0);
        let body = Body::new(longest as f32 * TEXT_CHAR_WIDTH, TEXT_HEIGHT)
            .at(anchor)
            .with_z(TEXT_Z)
            .without_screen_wrap();

        // The tape picks the pace: fast while typing, slow once a message is done.
        let keypress = Timer::new(TICKER_KEYPRESS_TICKS, |timer, tape: &mut Tape| {
            if let Some(interval) = tape.keypress() {
                timer.set_interval(interval);
            }
        });

        Self {
            body,
            anchor,
            tape: Tape {
                messages,
                ..Tape::default()
            },
            keypress,
            visible: true,
        }
    }

    /// Start out hidden and idle, waiting for [`TickerText::set_enabled`].
    pub fn hidden(mut self) -> Self {
        self.set_enabled(false);
        self
    }

    /// Show and resume typing, or hide and freeze where it stands.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.visible = enabled;
        self.keypress.set_enabled(enabled);
    }

    /// Message being typed or shown.
    pub fn current_message(&self) -> &str {
        &self.tape.current
    }
}

impl Entity for TickerText {
    fn kind(&self) -> EntityKind {
        EntityKind::Text
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        self.keypress.tick(&mut self.tape);

        let half = self.tape.current.chars().count() as f32 * TEXT_CHAR_WIDTH / 2.0;
        self.body
            .set_position(Vec2::new(self.anchor.x - half, self.anchor.y));
    }

    fn text(&self) -> Option<&str> {
        Some(&self.tape.shown)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
