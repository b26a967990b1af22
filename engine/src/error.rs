use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the engine from starting or keep running.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// A [`Game`](crate::Game) refused to start for reasons of its own.
    #[error("game init failed: {0}")]
    GameInit(#[source] Box<dyn std::error::Error + Send + Sync>),
}
