//! Math utilities and types
//!
//! Provides the 2D affine transform and rectangle types shared by the
//! collision tests. Coordinates follow screen conventions: +X right, +Y down,
//! positive rotation turns clockwise on screen.

use std::ops::Mul;

pub use nalgebra::{Vector2, Matrix3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 homogeneous matrix type
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Affine transform in 2D, stored as a homogeneous 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Mat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Create the identity transform
    pub fn identity() -> Self {
        Self { matrix: Mat3::identity() }
    }

    /// Wrap an existing homogeneous matrix
    pub const fn from_matrix(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Translation by `offset`
    pub fn translation(offset: Vec2) -> Self {
        Self::from_matrix(Mat3::new_translation(&offset))
    }

    /// Rotation by `degrees` around the origin
    pub fn rotation(degrees: f32) -> Self {
        Self::from_matrix(Mat3::new_rotation(degrees.to_radians()))
    }

    /// Non-uniform scaling around the origin
    pub fn scaling(factors: Vec2) -> Self {
        Self::from_matrix(Mat3::new_nonuniform_scaling(&factors))
    }

    /// Underlying matrix
    pub const fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Combine with another transform; `other` is applied first
    pub fn combine(&self, other: &Self) -> Self {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Map a point through this transform
    pub fn transform_point(&self, point: Point2) -> Point2 {
        let m = &self.matrix;
        Point2::new(
            m.m11 * point.x + m.m12 * point.y + m.m13,
            m.m21 * point.x + m.m22 * point.y + m.m23,
        )
    }

    /// Inverse transform
    ///
    /// A singular matrix (zero scale) has no inverse; identity is returned
    /// instead so inverse mapping never fails.
    pub fn inverse(&self) -> Self {
        self.matrix
            .try_inverse()
            .map_or_else(Self::identity, Self::from_matrix)
    }

    /// Axis-aligned bounds of a rectangle after transformation
    pub fn transform_rect(&self, rect: &FloatRect) -> FloatRect {
        let corners = rect.corners().map(|corner| self.transform_point(corner));

        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min.x = min.x.min(corner.x);
            min.y = min.y.min(corner.y);
            max.x = max.x.max(corner.x);
            max.y = max.y.max(corner.y);
        }

        FloatRect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

impl Mul for Transform2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

/// Position, rotation, scale and origin of a 2D object
///
/// The origin is the local point that sits at `position` and around which
/// rotation and scaling happen.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformable {
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    origin: Vec2,
}

impl Default for Transformable {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            origin: Vec2::zeros(),
        }
    }
}

impl Transformable {
    /// Create an untransformed object
    pub fn new() -> Self {
        Self::default()
    }

    /// World position of the origin
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in degrees, within [0, 360)
    pub const fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Scale factors
    pub const fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Local origin
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Set the world position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Set the rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees.rem_euclid(360.0);
    }

    /// Set the scale factors
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Set the local origin
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Offset the position
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Add to the current rotation
    pub fn rotate_by(&mut self, degrees: f32) {
        self.set_rotation(self.rotation + degrees);
    }

    /// Local-to-world transform
    pub fn transform(&self) -> Transform2D {
        Transform2D::translation(self.position)
            * Transform2D::rotation(self.rotation)
            * Transform2D::scaling(self.scale)
            * Transform2D::translation(-self.origin)
    }

    /// World-to-local transform
    pub fn inverse_transform(&self) -> Transform2D {
        self.transform().inverse()
    }
}

/// Floating point rectangle (left, top, width, height)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatRect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl FloatRect {
    /// Create a rectangle
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Point2; 4] {
        let right = self.left + self.width;
        let bottom = self.top + self.height;
        [
            Point2::new(self.left, self.top),
            Point2::new(right, self.top),
            Point2::new(right, bottom),
            Point2::new(self.left, bottom),
        ]
    }

    /// Centre point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Check whether a point lies inside (left/top inclusive)
    pub fn contains(&self, point: Point2) -> bool {
        let (min_x, max_x) = min_max(self.left, self.left + self.width);
        let (min_y, max_y) = min_max(self.top, self.top + self.height);
        point.x >= min_x && point.x < max_x && point.y >= min_y && point.y < max_y
    }

    /// Overlapping area of two rectangles
    ///
    /// Negative sizes are normalised first. Rectangles that only share an
    /// edge or a corner do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (a_min_x, a_max_x) = min_max(self.left, self.left + self.width);
        let (a_min_y, a_max_y) = min_max(self.top, self.top + self.height);
        let (b_min_x, b_max_x) = min_max(other.left, other.left + other.width);
        let (b_min_y, b_max_y) = min_max(other.top, other.top + other.height);

        let left = a_min_x.max(b_min_x);
        let top = a_min_y.max(b_min_y);
        let right = a_max_x.min(b_max_x);
        let bottom = a_max_y.min(b_max_y);

        if left < right && top < bottom {
            Some(Self::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Check whether two rectangles overlap
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }
}

/// Integer rectangle, used for texture sub-rectangles in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl IntRect {
    /// Create a rectangle
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Convert to a float rectangle
    pub fn to_float(self) -> FloatRect {
        FloatRect::new(
            self.left as f32,
            self.top as f32,
            self.width as f32,
            self.height as f32,
        )
    }

    /// Size as a float vector
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
