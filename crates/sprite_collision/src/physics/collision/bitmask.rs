//! Alpha bitmasks for pixel perfect collision tests
//!
//! Reading texture pixels is the expensive part of a pixel test, so each
//! texture's alpha channel is copied once into an [`AlphaMask`] and kept
//! in a [`BitmaskCache`] for the lifetime of the cache. Textures are
//! assumed static; masks are never rebuilt or evicted, so the cache grows
//! with the number of distinct textures tested.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::assets::{AlphaSource, TextureHandle};

/// Row-major copy of a texture's alpha channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Read every pixel's alpha from `source`
    pub fn from_source(source: &dyn AlphaSource) -> Self {
        let (width, height) = source.size();
        let mut data = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            for x in 0..width {
                data.push(source.alpha_at(x, y));
            }
        }

        Self { width, height, data }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw alpha values, `width * height` entries
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True for zero-sized textures
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Alpha at (x, y), or 0 outside `[0, width) x [0, height)`
    pub fn get(&self, x: i32, y: i32) -> u8 {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return 0;
        };
        if x >= self.width || y >= self.height {
            return 0;
        }

        let index = x as usize + y as usize * self.width as usize;
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Number of pixels whose alpha exceeds `threshold`
    pub fn count_above(&self, threshold: u8) -> usize {
        self.data.iter().filter(|&&alpha| alpha > threshold).count()
    }
}

/// Thread-safe cache of alpha masks keyed by texture identity
#[derive(Debug, Default)]
pub struct BitmaskCache {
    masks: RwLock<HashMap<TextureHandle, Arc<AlphaMask>>>,
}

impl BitmaskCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the mask for `handle`, building it from `source` if absent
    ///
    /// The mask is built while holding the write lock, so concurrent
    /// callers never read the same texture twice.
    pub fn ensure(&self, handle: TextureHandle, source: &dyn AlphaSource) -> Arc<AlphaMask> {
        if let Some(mask) = self.get_cached(handle) {
            return mask;
        }

        let mut masks = self.write();
        let mask = masks.entry(handle).or_insert_with(|| {
            let mask = AlphaMask::from_source(source);
            log::debug!(
                "Built alpha mask {}x{} for {:?} ({} non-transparent pixels)",
                mask.width(),
                mask.height(),
                handle,
                mask.count_above(0),
            );
            Arc::new(mask)
        });
        Arc::clone(mask)
    }

    /// Alpha at (x, y) of the texture, building its mask if needed
    pub fn sample(&self, handle: TextureHandle, source: &dyn AlphaSource, x: i32, y: i32) -> u8 {
        self.ensure(handle, source).get(x, y)
    }

    /// Get a mask without building it
    pub fn get_cached(&self, handle: TextureHandle) -> Option<Arc<AlphaMask>> {
        self.read().get(&handle).map(Arc::clone)
    }

    /// Check if a mask exists for `handle`
    pub fn contains(&self, handle: TextureHandle) -> bool {
        self.read().contains_key(&handle)
    }

    /// Number of cached masks
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Masks are immutable once inserted, so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TextureHandle, Arc<AlphaMask>>> {
        self.masks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TextureHandle, Arc<AlphaMask>>> {
        self.masks.write().unwrap_or_else(PoisonError::into_inner)
    }
}
