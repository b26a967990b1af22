use std::ops::Range;

use glam::Vec2;

use crate::assets::{AssetLoader, SpriteId};
use crate::error::EngineError;
use crate::input::InputState;

/// Callbacks the host drives. All of them run on the event-loop thread.
pub trait Game {
    /// Called once before the window opens. An error aborts startup.
    fn init(&mut self, assets: &mut dyn AssetLoader) -> Result<(), EngineError>;

    /// Called once per redraw.
    fn frame(&mut self, ctx: &FrameContext<'_>, canvas: &mut dyn Canvas);

    fn key_down(&mut self, key: char);

    fn mouse_down(&mut self, point: Vec2);

    fn mouse_up(&mut self);
}

/// Per-frame information handed to [`Game::frame`].
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Seconds since the previous frame.
    pub delta_time: f32,
    pub input: &'a InputState,
}

/// Sink for sprite draws. Positions are sprite centres in logical pixels.
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: SpriteId, position: Vec2);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub position: Vec2,
}

/// Draw commands recorded during one frame, in painter's order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Runs of consecutive commands that share a sprite.
    ///
    /// Each run can be drawn as one instanced call without changing the
    /// painter's order.
    pub fn batches(&self) -> Vec<(SpriteId, Range<u32>)> {
        let mut out: Vec<(SpriteId, Range<u32>)> = Vec::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            let i = i as u32;
            match out.last_mut() {
                Some((sprite, range)) if *sprite == cmd.sprite => range.end = i + 1,
                _ => out.push((cmd.sprite, i..i + 1)),
            }
        }
        out
    }
}

impl Canvas for DrawList {
    fn draw_sprite(&mut self, sprite: SpriteId, position: Vec2) {
        self.commands.push(DrawCommand { sprite, position });
    }
}
