//! Collision detection between pairs of sprites
//!
//! Three tests of increasing precision and cost:
//! - **Circle**: radius derived from the displayed size, compared against
//!   the distance between bounding-box centres
//! - **Bounding box**: separating axis test on the two oriented rectangles
//! - **Pixel perfect**: alpha overlap inside the world-bounds intersection
//!
//! # Module Organization
//!
//! - [`bitmask`] - Per-texture alpha masks, built once and cached
//! - [`obb`] - Oriented bounding boxes and axis projection
//! - [`tester`] - The [`CollisionTester`] facade running the three tests

pub mod bitmask;
pub mod obb;
pub mod tester;

pub use bitmask::{AlphaMask, BitmaskCache};
pub use obb::{OrientedBoundingBox, Projection};
pub use tester::CollisionTester;
