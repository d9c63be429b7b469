//! Image loading utilities for texture data
//!
//! Decodes PNG images into RGBA8 buffers whose alpha channel feeds the
//! pixel perfect collision test.

use std::path::Path;
use crate::assets::{AlphaSource, AssetError};

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Number of bytes per pixel
    pub const CHANNELS: usize = 4;

    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path_ref.display(), e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Load an image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * Self::CHANNELS);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self { data, width, height }
    }

    /// Create a white image whose alpha is computed per pixel
    pub fn from_alpha_fn(width: u32, height: u32, alpha: impl Fn(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * Self::CHANNELS);

        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[255, 255, 255, alpha(x, y)]);
            }
        }

        Self { data, width, height }
    }

    /// RGBA value of a pixel, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        self.data
            .get(offset..offset + Self::CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

impl AlphaSource for ImageData {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).map_or(0, |px| px[3])
    }
}
