//! Texture assets consumed by the collision tests
//!
//! The collision engine never decodes images itself. It needs three things
//! from a texture: a stable identity to key its bitmask cache on, the pixel
//! size, and per-pixel alpha access. [`AlphaSource`] covers the latter two;
//! [`TextureStore`] hands out a fresh [`TextureHandle`] per inserted texture.

pub mod image_loader;
pub mod texture;

pub use image_loader::ImageData;
pub use texture::{Texture, TextureHandle, TextureStore};

use thiserror::Error;

/// Per-pixel alpha access to a texture
pub trait AlphaSource {
    /// Size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Alpha value of the pixel at (x, y); 0 outside the texture
    fn alpha_at(&self, x: u32, y: u32) -> u8;
}

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset failed to load
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
