//! Renderable objects the collision tests operate on
//!
//! - [`Renderable`] - What a drawable object must expose to be collision tested
//! - [`Sprite`] - Textured quad with a transform, the default implementation

pub mod sprite;

pub use sprite::Sprite;

use crate::assets::{AlphaSource, TextureHandle};
use crate::foundation::math::{FloatRect, IntRect, Transform2D, Vec2};

/// A textured 2D object placed in the world
///
/// Local space spans `(0, 0)` to the texture rect's size; `transform` maps it
/// into world space.
pub trait Renderable {
    /// Identity of the texture being displayed
    fn texture_handle(&self) -> TextureHandle;

    /// Alpha access to the texture being displayed
    fn texture(&self) -> &dyn AlphaSource;

    /// Sub-rectangle of the texture currently displayed, in pixels
    fn texture_rect(&self) -> IntRect;

    /// Scale factors applied by the transform
    fn scale(&self) -> Vec2;

    /// Local-to-world transform
    fn transform(&self) -> Transform2D;

    /// World-to-local transform
    fn inverse_transform(&self) -> Transform2D {
        self.transform().inverse()
    }

    /// World-space axis-aligned bounds
    fn global_bounds(&self) -> FloatRect {
        let rect = self.texture_rect();
        let local = FloatRect::new(0.0, 0.0, rect.width as f32, rect.height as f32);
        self.transform().transform_rect(&local)
    }
}
