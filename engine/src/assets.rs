use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Handle to a decoded image owned by [`Assets`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(u32);

impl SpriteId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A loaded image: its handle plus pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub id: SpriteId,
    pub width: u32,
    pub height: u32,
}

/// Loads images by path relative to some asset root.
pub trait AssetLoader {
    fn load_image(&mut self, path: &Path) -> Result<Sprite, EngineError>;
}

/// Decoded RGBA8 pixels kept on the CPU until the renderer uploads them.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// CPU-side image store.
///
/// Images are decoded at load time so dimensions are known before any GPU
/// exists; textures are created lazily by the renderer.
#[derive(Debug)]
pub struct Assets {
    root: PathBuf,
    images: Vec<ImageData>,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            images: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `relative` onto the asset root with the platform separator.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    pub fn get(&self, id: SpriteId) -> Option<&ImageData> {
        self.images.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Registers already-decoded pixels.
    pub fn insert(&mut self, image: ImageData) -> Sprite {
        let id = SpriteId::new(self.images.len() as u32);
        let sprite = Sprite {
            id,
            width: image.width,
            height: image.height,
        };
        self.images.push(image);
        sprite
    }
}

impl AssetLoader for Assets {
    fn load_image(&mut self, path: &Path) -> Result<Sprite, EngineError> {
        let full = self.resolve(path);
        let decoded = image::open(&full).map_err(|source| EngineError::Image {
            path: full.clone(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("loaded {} ({width}x{height})", full.display());
        Ok(self.insert(ImageData {
            width,
            height,
            rgba: rgba.into_raw(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("engine-assets-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_image_reports_dimensions() {
        let dir = scratch_dir("dims");
        image::RgbaImage::new(6, 4).save(dir.join("probe.png")).unwrap();

        let mut assets = Assets::new(&dir);
        let sprite = assets.load_image(Path::new("probe.png")).unwrap();

        assert_eq!((sprite.width, sprite.height), (6, 4));
        assert_eq!(sprite.id, SpriteId::new(0));
        assert_eq!(assets.get(sprite.id).unwrap().rgba.len(), 6 * 4 * 4);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_image_names_the_resolved_path() {
        let dir = scratch_dir("missing");
        let mut assets = Assets::new(&dir);

        let err = assets.load_image(Path::new("nope.png")).unwrap_err();
        match err {
            EngineError::Image { path, .. } => assert_eq!(path, dir.join("nope.png")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(assets.is_empty());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut assets = Assets::new("unused");
        let blank = |w, h| ImageData {
            width: w,
            height: h,
            rgba: vec![0; (w * h * 4) as usize],
        };
        let a = assets.insert(blank(1, 1));
        let b = assets.insert(blank(2, 3));
        assert_eq!(a.id.index(), 0);
        assert_eq!(b.id.index(), 1);
        assert_eq!((b.width, b.height), (2, 3));
        assert_eq!(assets.len(), 2);
    }
}
