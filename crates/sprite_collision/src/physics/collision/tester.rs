//! Collision tests between pairs of renderable objects
//!
//! [`CollisionTester`] owns the only persistent state, a [`BitmaskCache`];
//! every test is otherwise a pure read of the two objects. The tester is
//! `Sync`, so one instance can serve several threads.

use crate::assets::Texture;
use crate::config::{CollisionConfig, CollisionMethod};
use crate::foundation::math::{IntRect, Point2, Vec2};
use crate::scene::Renderable;
use super::bitmask::BitmaskCache;
use super::obb::OrientedBoundingBox;

/// Circle, bounding box and pixel perfect collision tests
#[derive(Debug, Default)]
pub struct CollisionTester {
    bitmasks: BitmaskCache,
}

impl CollisionTester {
    /// Create a tester with an empty mask cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tester around an existing mask cache
    pub const fn with_cache(bitmasks: BitmaskCache) -> Self {
        Self { bitmasks }
    }

    /// Cached alpha masks
    pub const fn bitmasks(&self) -> &BitmaskCache {
        &self.bitmasks
    }

    /// Build a texture's alpha mask ahead of the first pixel test
    pub fn register_texture(&self, texture: &Texture) {
        self.bitmasks.ensure(texture.handle(), texture);
    }

    /// Run the test selected by `config`
    pub fn test<A, B>(&self, a: &A, b: &B, config: &CollisionConfig) -> bool
    where
        A: Renderable + ?Sized,
        B: Renderable + ?Sized,
    {
        match config.method {
            CollisionMethod::Circle => self.circle_test(a, b),
            CollisionMethod::BoundingBox => self.bounding_box_test(a, b),
            CollisionMethod::PixelPerfect => self.pixel_perfect_test(a, b, config.alpha_threshold),
        }
    }

    /// Approximate test treating each object as a circle
    ///
    /// The radius is the mean of the half extents of the scaled texture rect;
    /// the centre is the centre of the world bounds. Touching circles collide.
    #[allow(clippy::unused_self)]
    pub fn circle_test<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: Renderable + ?Sized,
        B: Renderable + ?Sized,
    {
        let size_a = Self::sprite_size(a).abs();
        let size_b = Self::sprite_size(b).abs();

        let radius_a = (size_a.x + size_a.y) / 4.0;
        let radius_b = (size_b.x + size_b.y) / 4.0;
        let radius_sum = radius_a + radius_b;

        let distance = Self::sprite_center(a) - Self::sprite_center(b);
        distance.norm_squared() <= radius_sum * radius_sum
    }

    /// Separating axis test on the two oriented rectangles
    ///
    /// Objects whose world bounds do not intersect are rejected first; the
    /// two edge directions of each box are then tested as candidate axes.
    #[allow(clippy::unused_self)]
    pub fn bounding_box_test<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: Renderable + ?Sized,
        B: Renderable + ?Sized,
    {
        if !a.global_bounds().intersects(&b.global_bounds()) {
            return false;
        }

        let obb_a = OrientedBoundingBox::new(a);
        let obb_b = OrientedBoundingBox::new(b);

        let [a_top, a_side] = obb_a.edge_axes();
        let [b_top, b_side] = obb_b.edge_axes();

        [a_top, a_side, b_top, b_side].iter().all(|axis| {
            obb_a
                .project_onto_axis(axis)
                .overlaps(&obb_b.project_onto_axis(axis))
        })
    }

    /// Exact test: some pixel covered by both objects is solid in both
    ///
    /// Scans integer world coordinates inside the intersection of the world
    /// bounds and maps each into both objects' local space. A pixel counts
    /// only when both alpha values are strictly greater than
    /// `alpha_threshold`. Returns on the first such pixel.
    pub fn pixel_perfect_test<A, B>(&self, a: &A, b: &B, alpha_threshold: u8) -> bool
    where
        A: Renderable + ?Sized,
        B: Renderable + ?Sized,
    {
        let Some(intersection) = a.global_bounds().intersection(&b.global_bounds()) else {
            return false;
        };

        let rect_a = a.texture_rect();
        let rect_b = b.texture_rect();
        let inverse_a = a.inverse_transform();
        let inverse_b = b.inverse_transform();
        let mask_a = self.bitmasks.ensure(a.texture_handle(), a.texture());
        let mask_b = self.bitmasks.ensure(b.texture_handle(), b.texture());

        let x_start = intersection.left as i32;
        let x_end = (intersection.left + intersection.width).ceil() as i32;
        let y_start = intersection.top as i32;
        let y_end = (intersection.top + intersection.height).ceil() as i32;

        for i in x_start..x_end {
            for j in y_start..y_end {
                let world = Point2::new(i as f32, j as f32);
                let local_a = inverse_a.transform_point(world);
                let local_b = inverse_b.transform_point(world);

                if !strictly_inside(local_a, rect_a) || !strictly_inside(local_b, rect_b) {
                    continue;
                }

                let alpha_a = mask_a.get(
                    (local_a.x + rect_a.left as f32) as i32,
                    (local_a.y + rect_a.top as f32) as i32,
                );
                if alpha_a <= alpha_threshold {
                    continue;
                }

                let alpha_b = mask_b.get(
                    (local_b.x + rect_b.left as f32) as i32,
                    (local_b.y + rect_b.top as f32) as i32,
                );
                if alpha_b > alpha_threshold {
                    log::trace!("Pixel hit at ({}, {}): alpha {} / {}", i, j, alpha_a, alpha_b);
                    return true;
                }
            }
        }

        false
    }

    /// Centre of an object's world bounds
    pub fn sprite_center<R: Renderable + ?Sized>(obj: &R) -> Vec2 {
        obj.global_bounds().center()
    }

    /// Texture rect size multiplied by the object's scale
    pub fn sprite_size<R: Renderable + ?Sized>(obj: &R) -> Vec2 {
        obj.texture_rect().size().component_mul(&obj.scale())
    }
}

// The lower bound is exclusive: local row 0 and column 0 never register a hit.
fn strictly_inside(local: Point2, rect: IntRect) -> bool {
    local.x > 0.0
        && local.y > 0.0
        && local.x < rect.width as f32
        && local.y < rect.height as f32
}
