use std::path::{Path, PathBuf};

use engine::EngineConfig;
use glam::Vec2;
use serde::Deserialize;

use crate::error::StationError;

/// Everything read from `station.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub window: EngineConfig,
    pub session: SessionConfig,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            window: EngineConfig {
                title: "Space Station".to_owned(),
                ..EngineConfig::default()
            },
            session: SessionConfig::default(),
        }
    }
}

impl StationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| StationError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed seed for reproducible runs; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub spawn: SpawnRules,
    /// Where the first crewmate stands.
    pub default_position: [f32; 2],
    pub background: PathBuf,
    pub background_position: [f32; 2],
    /// One image per skin. The first also sets the collision footprint.
    pub skins: [PathBuf; 3],
}

impl SessionConfig {
    pub fn default_position(&self) -> Vec2 {
        Vec2::from_array(self.default_position)
    }

    pub fn background_position(&self) -> Vec2 {
        Vec2::from_array(self.background_position)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            spawn: SpawnRules::default(),
            default_position: [600.0, 500.0],
            background: PathBuf::from("background.jpeg"),
            background_position: [600.0, 500.0],
            skins: [
                PathBuf::from("sprite1.png"),
                PathBuf::from("sprite2.png"),
                PathBuf::from("sprite3.png"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnRules {
    /// Key that drops a new actor.
    pub key: char,
    pub area: SpawnArea,
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            key: 'a',
            area: SpawnArea::default(),
        }
    }
}

/// Inclusive upper bounds for spawn coordinates; the lower bound is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpawnArea {
    pub max_x: u32,
    pub max_y: u32,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self { max_x: 1200, max_y: 800 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: StationConfig = toml::from_str("").unwrap();
        assert_eq!(config, StationConfig::default());
        assert_eq!(config.window.title, "Space Station");
        assert_eq!(config.session.spawn.key, 'a');
        assert_eq!(config.session.default_position(), Vec2::new(600.0, 500.0));
    }

    #[test]
    fn overrides_are_picked_up() {
        let text = r#"
            [window]
            title = "test deck"
            asset_root = "assets/sprites"

            [session]
            seed = 99
            default_position = [10.0, 20.0]

            [session.spawn]
            key = "s"

            [session.spawn.area]
            max_x = 300
        "#;
        let config: StationConfig = toml::from_str(text).unwrap();
        assert_eq!(config.window.title, "test deck");
        assert_eq!(config.window.asset_root, PathBuf::from("assets/sprites"));
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.session.seed, Some(99));
        assert_eq!(config.session.spawn.key, 's');
        assert_eq!(config.session.spawn.area, SpawnArea { max_x: 300, max_y: 800 });
        assert_eq!(config.session.default_position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn multi_character_spawn_key_is_rejected() {
        let err = toml::from_str::<StationConfig>("[session.spawn]\nkey = \"ab\"").unwrap_err();
        assert!(err.to_string().contains("a character"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = StationConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, StationError::ConfigRead { .. }));
    }
}
