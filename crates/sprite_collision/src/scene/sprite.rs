//! Sprite: a texture region drawn with a transform

use crate::assets::{AlphaSource, Texture, TextureHandle};
use crate::foundation::math::{IntRect, Transform2D, Transformable, Vec2};
use super::Renderable;

/// Textured quad borrowing its texture
#[derive(Debug, Clone)]
pub struct Sprite<'t> {
    texture: &'t Texture,
    texture_rect: IntRect,
    transformable: Transformable,
}

impl<'t> Sprite<'t> {
    /// Create a sprite displaying the whole texture
    pub fn new(texture: &'t Texture) -> Self {
        let texture_rect = IntRect::new(0, 0, texture.width() as i32, texture.height() as i32);
        Self {
            texture,
            texture_rect,
            transformable: Transformable::new(),
        }
    }

    /// Create a sprite displaying part of the texture
    pub fn with_rect(texture: &'t Texture, texture_rect: IntRect) -> Self {
        Self {
            texture,
            texture_rect,
            transformable: Transformable::new(),
        }
    }

    /// Change the displayed texture region
    pub fn set_texture_rect(&mut self, rect: IntRect) {
        self.texture_rect = rect;
    }

    /// Position, rotation, scale and origin
    pub const fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    /// World position
    pub const fn position(&self) -> Vec2 {
        self.transformable.position()
    }

    /// Rotation in degrees
    pub const fn rotation(&self) -> f32 {
        self.transformable.rotation()
    }

    /// Set the world position
    pub fn set_position(&mut self, position: Vec2) {
        self.transformable.set_position(position);
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        self.transformable.set_rotation(degrees);
    }

    /// Set the scale factors
    pub fn set_scale(&mut self, scale: Vec2) {
        self.transformable.set_scale(scale);
    }

    /// Set the local origin
    pub fn set_origin(&mut self, origin: Vec2) {
        self.transformable.set_origin(origin);
    }

    /// Put the origin at the centre of the texture rect
    pub fn center_origin(&mut self) {
        let size = self.texture_rect.size();
        self.transformable.set_origin(size / 2.0);
    }
}

impl Renderable for Sprite<'_> {
    fn texture_handle(&self) -> TextureHandle {
        self.texture.handle()
    }

    fn texture(&self) -> &dyn AlphaSource {
        self.texture
    }

    fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    fn scale(&self) -> Vec2 {
        self.transformable.scale()
    }

    fn transform(&self) -> Transform2D {
        self.transformable.transform()
    }

    fn inverse_transform(&self) -> Transform2D {
        self.transformable.inverse_transform()
    }
}
