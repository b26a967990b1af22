//! Windowing, input and sprite rendering host.
//!
//! A [`Game`] is driven by [`EngineContext::run`]: it is initialised once with
//! an [`AssetLoader`], then receives one [`Game::frame`] per redraw plus the
//! keyboard and mouse callbacks in between.

pub mod assets;
pub mod config;
pub mod context;
pub mod error;
pub mod game;
pub mod input;
pub mod render;

pub use assets::{AssetLoader, Assets, Sprite, SpriteId};
pub use config::EngineConfig;
pub use context::EngineContext;
pub use error::EngineError;
pub use game::{Canvas, DrawCommand, DrawList, FrameContext, Game};
pub use input::InputState;

pub use glam::Vec2;

/// Installs the global logger.
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice is harmless.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}
