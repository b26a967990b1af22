use std::path::PathBuf;

use serde::Deserialize;

/// Window and asset settings for the host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub title: String,
    /// Logical width of the window and of the drawing coordinate space.
    pub width: u32,
    /// Logical height of the window and of the drawing coordinate space.
    pub height: u32,
    /// Directory that relative asset paths are joined onto.
    pub asset_root: PathBuf,
    pub clear_color: [f64; 3],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "engine".to_owned(),
            width: 1200,
            height: 1000,
            asset_root: PathBuf::from("images"),
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let config: EngineConfig = toml::from_str("title = \"demo\"\nwidth = 640").unwrap();
        assert_eq!(config.title, "demo");
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 1000);
        assert_eq!(config.asset_root, PathBuf::from("images"));
    }
}
