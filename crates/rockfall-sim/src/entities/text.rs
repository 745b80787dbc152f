//! HUD text overlays.

use std::any::Any;

use glam::Vec2;

use rockfall_core::constants::{TEXT_CHAR_WIDTH, TEXT_HEIGHT, TEXT_Z};
use rockfall_core::enums::EntityKind;

use super::{Body, Entity, TickContext};
use crate::timer::Timer;

/// A line of text drawn over the field. Never collides, never wraps.
#[derive(Debug)]
pub struct TextDisplay {
    body: Body,
    text: String,
    visible: bool,
    expiry: Option<Timer<Body>>,
}

impl TextDisplay {
    /// Text whose box has its top-left corner at `position`.
    pub fn new(text: impl Into<String>, position: Vec2) -> Self {
        let text = text.into();
        let width = text.chars().count() as f32 * TEXT_CHAR_WIDTH;
        let body = Body::new(width, TEXT_HEIGHT)
            .at(position)
            .with_z(TEXT_Z)
            .without_screen_wrap();
        Self {
            body,
            text,
            visible: true,
            expiry: None,
        }
    }

    /// Text horizontally centred on `anchor`.
    pub fn centered(text: impl Into<String>, anchor: Vec2) -> Self {
        let mut display = Self::new(text, anchor);
        let offset = Vec2::new(display.body.width() / 2.0, 0.0);
        display.body.translate(-offset);
        display
    }

    /// Kill the text once `ticks` have passed.
    pub fn expires_after(mut self, ticks: u32) -> Self {
        self.expiry = Some(Timer::new(ticks, |timer, body: &mut Body| {
            timer.stop();
            body.kill();
        }));
        self
    }

    /// Replace the text. The box keeps the extent it was built with.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Start out hidden, waiting for [`TextDisplay::set_visible`].
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Entity for TextDisplay {
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
        if let Some(expiry) = self.expiry.as_mut() {
            expiry.tick(&mut self.body);
        }
    }

    fn text(&self) -> Option<&str> {
        Some(&self.text)
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
