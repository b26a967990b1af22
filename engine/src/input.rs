use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::keyboard::Key;

/// Latest pointer position and key, as seen by the event loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pointer: Vec2,
    last_key: Option<char>,
}

impl InputState {
    /// Pointer position in logical pixels, origin top-left.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn last_key(&self) -> Option<char> {
        self.last_key
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    pub fn set_last_key(&mut self, key: char) {
        self.last_key = Some(key);
    }

    pub(crate) fn cursor_moved(&mut self, position: PhysicalPosition<f64>, scale_factor: f64) {
        let logical = position.to_logical::<f32>(scale_factor);
        self.pointer = Vec2::new(logical.x, logical.y);
    }
}

/// The character a logical key produces, if it produces exactly one.
pub fn key_char(key: &Key) -> Option<char> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
        _ => None,
    }
}
