use std::path::PathBuf;

use engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Slot 0 always holds the first crewmate, and slots past the roster
    /// capacity don't exist.
    #[error("slot {0} cannot hold the impostor")]
    ImpostorSlot(usize),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<StationError> for EngineError {
    fn from(err: StationError) -> Self {
        match err {
            StationError::Engine(inner) => inner,
            other => EngineError::GameInit(Box::new(other)),
        }
    }
}
