//! Scene description loaded from TOML or RON

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sprite_collision::prelude::*;

use crate::DemoError;

/// A texture to load, referenced by name from sprites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureEntry {
    pub name: String,
    pub path: String,
}

/// A sprite placed in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteEntry {
    pub name: String,
    pub texture: String,
    pub position: [f32; 2],
    pub rotation: f32,
    pub scale: [f32; 2],
    /// Local origin; the texture rect centre when absent
    pub origin: Option<[f32; 2]>,
    /// left, top, width, height; the whole texture when absent
    pub texture_rect: Option<[i32; 4]>,
}

impl Default for SpriteEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            texture: String::new(),
            position: [0.0, 0.0],
            rotation: 0.0,
            scale: [1.0, 1.0],
            origin: None,
            texture_rect: None,
        }
    }
}

/// Everything the demo needs to run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub collision: CollisionConfig,
    pub textures: Vec<TextureEntry>,
    pub sprites: Vec<SpriteEntry>,
}

impl Config for SceneConfig {}

/// Texture names resolved to store handles
pub struct LoadedTextures {
    pub store: TextureStore,
    pub by_name: HashMap<String, TextureHandle>,
}

impl LoadedTextures {
    /// Load every texture listed in the scene, relative to `base_dir`
    pub fn load(entries: &[TextureEntry], base_dir: &Path) -> Result<Self, DemoError> {
        let mut loaded = Self {
            store: TextureStore::new(),
            by_name: HashMap::new(),
        };

        for entry in entries {
            let handle = loaded.store.load(base_dir.join(&entry.path))?;
            loaded.by_name.insert(entry.name.clone(), handle);
        }

        Ok(loaded)
    }

    /// Store generated images under the given names
    pub fn from_images(images: Vec<(&str, ImageData)>) -> Self {
        let mut store = TextureStore::new();
        let by_name = images
            .into_iter()
            .map(|(name, image)| (name.to_string(), store.insert(image)))
            .collect();
        Self { store, by_name }
    }

    /// Build the sprites described by `entries`
    pub fn sprites(&self, entries: &[SpriteEntry]) -> Result<Vec<(String, Sprite<'_>)>, DemoError> {
        entries
            .iter()
            .map(|entry| {
                let texture = self
                    .by_name
                    .get(&entry.texture)
                    .and_then(|handle| self.store.get(*handle))
                    .ok_or_else(|| DemoError::UnknownTexture {
                        sprite: entry.name.clone(),
                        texture: entry.texture.clone(),
                    })?;

                let mut sprite = match entry.texture_rect {
                    Some([left, top, width, height]) => {
                        Sprite::with_rect(texture, IntRect::new(left, top, width, height))
                    }
                    None => Sprite::new(texture),
                };

                match entry.origin {
                    Some([x, y]) => sprite.set_origin(Vec2::new(x, y)),
                    None => sprite.center_origin(),
                }
                sprite.set_position(Vec2::new(entry.position[0], entry.position[1]));
                sprite.set_rotation(entry.rotation);
                sprite.set_scale(Vec2::new(entry.scale[0], entry.scale[1]));

                Ok((entry.name.clone(), sprite))
            })
            .collect()
    }
}
