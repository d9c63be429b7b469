//! Texture storage with identity-based handles

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{new_key_type, SlotMap};

use super::{AlphaSource, AssetError, ImageData};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(0);

new_key_type! {
    /// Slot of a texture inside one store
    struct TextureKey;
}

/// Identity of a texture, unique across every [`TextureStore`]
///
/// Two textures with identical pixels still get distinct handles, and the
/// same slot in two stores never yields equal handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    store: u64,
    key: TextureKey,
}

/// A decoded texture and the handle it was stored under
#[derive(Debug)]
pub struct Texture {
    handle: TextureHandle,
    image: ImageData,
}

impl Texture {
    /// Handle identifying this texture
    pub const fn handle(&self) -> TextureHandle {
        self.handle
    }

    /// Decoded pixel data
    pub const fn image(&self) -> &ImageData {
        &self.image
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.image.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.image.height
    }
}

impl AlphaSource for Texture {
    fn size(&self) -> (u32, u32) {
        self.image.size()
    }

    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.image.alpha_at(x, y)
    }
}

/// Owns textures and hands out stable handles
#[derive(Debug)]
pub struct TextureStore {
    id: u64,
    textures: SlotMap<TextureKey, Texture>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            id: NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed),
            textures: SlotMap::with_key(),
        }
    }

    /// Store decoded image data under a fresh handle
    pub fn insert(&mut self, image: ImageData) -> TextureHandle {
        let store = self.id;
        let key = self
            .textures
            .insert_with_key(|key| Texture { handle: TextureHandle { store, key }, image });
        TextureHandle { store, key }
    }

    /// Load an image file and store it
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<TextureHandle, AssetError> {
        let image = ImageData::from_file(path)?;
        Ok(self.insert(image))
    }

    /// Look up a texture
    ///
    /// Handles issued by another store are never found here.
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        if handle.store != self.id {
            return None;
        }
        self.textures.get(handle.key)
    }

    /// Number of stored textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
