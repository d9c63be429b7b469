//! Oriented bounding boxes for separating axis tests

use crate::foundation::math::{Point2, Vec2};
use crate::scene::Renderable;

/// Scalar interval covered by a shape projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Smallest projected value
    pub min: f32,
    /// Largest projected value
    pub max: f32,
}

impl Projection {
    /// Check if two intervals overlap (touching counts as overlapping)
    pub fn overlaps(&self, other: &Self) -> bool {
        other.min <= self.max && other.max >= self.min
    }
}

/// World-space corners of an object's displayed texture rect
///
/// Corners are ordered top-left, top-right, bottom-right, bottom-left in
/// local space, so consecutive points share an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBoundingBox {
    points: [Point2; 4],
}

impl OrientedBoundingBox {
    /// Transform the corners of `obj`'s local rect into world space
    pub fn new<R: Renderable + ?Sized>(obj: &R) -> Self {
        let transform = obj.transform();
        let rect = obj.texture_rect();
        let (width, height) = (rect.width as f32, rect.height as f32);

        Self {
            points: [
                transform.transform_point(Point2::new(0.0, 0.0)),
                transform.transform_point(Point2::new(width, 0.0)),
                transform.transform_point(Point2::new(width, height)),
                transform.transform_point(Point2::new(0.0, height)),
            ],
        }
    }

    /// Build from corners already in world space
    pub const fn from_points(points: [Point2; 4]) -> Self {
        Self { points }
    }

    /// The four corners
    pub const fn points(&self) -> &[Point2; 4] {
        &self.points
    }

    /// The two distinct edge directions (not normalised)
    pub fn edge_axes(&self) -> [Vec2; 2] {
        let [p0, p1, p2, _] = self.points;
        [p1 - p0, p1 - p2]
    }

    /// Project all corners onto `axis`
    ///
    /// The axis need not be unit length; only projections onto the same
    /// axis are comparable.
    pub fn project_onto_axis(&self, axis: &Vec2) -> Projection {
        let first = self.points[0].coords.dot(axis);
        self.points[1..].iter().fold(
            Projection { min: first, max: first },
            |interval, point| {
                let projection = point.coords.dot(axis);
                Projection {
                    min: interval.min.min(projection),
                    max: interval.max.max(projection),
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square_at(x: f32, y: f32) -> OrientedBoundingBox {
        OrientedBoundingBox::from_points([
            Point2::new(x, y),
            Point2::new(x + 1.0, y),
            Point2::new(x + 1.0, y + 1.0),
            Point2::new(x, y + 1.0),
        ])
    }

    #[test]
    fn test_projection_onto_x_axis() {
        let obb = unit_square_at(3.0, 7.0);
        let interval = obb.project_onto_axis(&Vec2::new(1.0, 0.0));
        assert_relative_eq!(interval.min, 3.0);
        assert_relative_eq!(interval.max, 4.0);
    }

    #[test]
    fn test_projection_uses_every_corner() {
        // Only the last corner reaches the extreme on this axis
        let obb = OrientedBoundingBox::from_points([
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 5.0),
        ]);
        let interval = obb.project_onto_axis(&Vec2::new(0.0, 1.0));
        assert_relative_eq!(interval.min, 0.0);
        assert_relative_eq!(interval.max, 5.0);
    }

    #[test]
    fn test_unnormalised_axis_scales_projection() {
        let obb = unit_square_at(1.0, 0.0);
        let interval = obb.project_onto_axis(&Vec2::new(2.0, 0.0));
        assert_relative_eq!(interval.min, 2.0);
        assert_relative_eq!(interval.max, 4.0);
    }

    #[test]
    fn test_edge_axes_follow_corners() {
        let obb = unit_square_at(0.0, 0.0);
        let [horizontal, vertical] = obb.edge_axes();
        assert_relative_eq!(horizontal, Vec2::new(1.0, 0.0));
        assert_relative_eq!(vertical, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_overlap_includes_touching() {
        let a = Projection { min: 0.0, max: 1.0 };
        let touching = Projection { min: 1.0, max: 2.0 };
        let apart = Projection { min: 1.5, max: 2.0 };

        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert!(!a.overlaps(&apart));
        assert!(!apart.overlaps(&a));
    }
}
