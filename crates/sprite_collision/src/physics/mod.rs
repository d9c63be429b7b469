//! Physics module for 2D sprite collision detection
//!
//! Boolean intersection queries only; there is no collision response.

pub mod collision;

pub use collision::{
    AlphaMask,
    BitmaskCache,
    CollisionTester,
    OrientedBoundingBox,
    Projection,
};
