//! Texture cache resource.
//!
//! [`TextureStore`] is the single owner of loaded sheets, keyed by filename.
//! Clips never own pixels; they keep the texture key and the frame rectangles
//! computed from the texture size at construction time.
//!
//! Loading goes through a [`TextureLoader`] supplied by the host backend, so
//! the store itself has no graphics dependency. Loading the same filename
//! twice returns the same [`Texture`] instance without touching the loader.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

use crate::error::AnimError;

/// Pixel dimensions reported by a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

/// Immutable description of a loaded texture.
#[derive(Debug, PartialEq, Eq)]
pub struct TextureInfo {
    /// Store key; also the key the backend resolves when drawing.
    pub key: Arc<str>,
    pub width: u32,
    pub height: u32,
}

/// Shared, read-only handle to a loaded texture.
pub type Texture = Arc<TextureInfo>;

/// Backend hook that turns a filename into a resident texture.
pub trait TextureLoader {
    /// Load `filename`, blocking until it is ready, and report its size.
    fn load_texture(&mut self, filename: &str) -> Result<TextureSize, String>;

    /// Free the backend copy of `filename`.
    fn unload_texture(&mut self, _filename: &str) {}
}

#[derive(Resource, Default, Debug)]
pub struct TextureStore {
    map: FxHashMap<String, Texture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load-or-fetch. The loader is only called the first time a filename is
    /// seen.
    pub fn load(
        &mut self,
        filename: &str,
        loader: &mut impl TextureLoader,
    ) -> Result<Texture, AnimError> {
        if let Some(texture) = self.map.get(filename) {
            return Ok(Arc::clone(texture));
        }
        let size = loader
            .load_texture(filename)
            .map_err(|reason| AnimError::TextureLoad {
                filename: filename.to_string(),
                reason,
            })?;
        let texture = Arc::new(TextureInfo {
            key: Arc::from(filename),
            width: size.width,
            height: size.height,
        });
        debug!(
            "Loaded texture '{}' ({}x{})",
            filename, size.width, size.height
        );
        self.map.insert(filename.to_string(), Arc::clone(&texture));
        Ok(texture)
    }

    /// Load several files, stopping at the first failure.
    pub fn load_all<'a>(
        &mut self,
        filenames: impl IntoIterator<Item = &'a str>,
        loader: &mut impl TextureLoader,
    ) -> Result<(), AnimError> {
        for filename in filenames {
            self.load(filename, loader)?;
        }
        Ok(())
    }

    pub fn get(&self, filename: &str) -> Result<Texture, AnimError> {
        self.map
            .get(filename)
            .cloned()
            .ok_or_else(|| AnimError::TextureNotLoaded(filename.to_string()))
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.map.contains_key(filename)
    }

    /// Drop `filename` from the store and free the backend copy. Clips built
    /// from it keep their frame data but can no longer be drawn.
    pub fn release(&mut self, filename: &str, loader: &mut impl TextureLoader) -> bool {
        if self.map.remove(filename).is_some() {
            loader.unload_texture(filename);
            debug!("Released texture '{}'", filename);
            true
        } else {
            false
        }
    }

    /// Release every texture. Called once when the host shuts down.
    pub fn clear(&mut self, loader: &mut impl TextureLoader) {
        for (filename, _) in self.map.drain() {
            loader.unload_texture(&filename);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingLoader {
        loads: usize,
        unloads: Vec<String>,
    }

    impl TextureLoader for CountingLoader {
        fn load_texture(&mut self, filename: &str) -> Result<TextureSize, String> {
            if filename.ends_with(".missing") {
                return Err("no such file".to_string());
            }
            self.loads += 1;
            Ok(TextureSize {
                width: 288,
                height: 128,
            })
        }

        fn unload_texture(&mut self, filename: &str) {
            self.unloads.push(filename.to_string());
        }
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut store = TextureStore::new();
        let mut loader = CountingLoader::default();
        let a = store.load("body.png", &mut loader).unwrap();
        let b = store.load("body.png", &mut loader).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loader.loads, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(a.width, 288);
        assert_eq!(&*a.key, "body.png");
    }

    #[test]
    fn test_get_unloaded_fails() {
        let store = TextureStore::new();
        assert_eq!(
            store.get("hair.png"),
            Err(AnimError::TextureNotLoaded("hair.png".to_string()))
        );
    }

    #[test]
    fn test_loader_failure_is_reported() {
        let mut store = TextureStore::new();
        let mut loader = CountingLoader::default();
        let err = store.load("gone.missing", &mut loader).unwrap_err();
        assert!(matches!(err, AnimError::TextureLoad { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_release_and_clear() {
        let mut store = TextureStore::new();
        let mut loader = CountingLoader::default();
        store
            .load_all(["body.png", "hair.png", "shirt.png"], &mut loader)
            .unwrap();
        assert!(store.release("hair.png", &mut loader));
        assert!(!store.release("hair.png", &mut loader));
        assert!(!store.contains("hair.png"));
        store.clear(&mut loader);
        assert!(store.is_empty());
        assert_eq!(loader.unloads.len(), 3);
    }
}
