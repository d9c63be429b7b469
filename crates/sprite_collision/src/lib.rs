//! # Sprite Collision
//!
//! Collision tests between pairs of 2D sprites, from cheap to exact.
//!
//! ## Features
//!
//! - **Circle Test**: Radius approximation from the displayed texture size
//! - **Bounding Box Test**: Separating axis test on oriented rectangles
//! - **Pixel Perfect Test**: Alpha channel overlap with cached bitmasks
//! - **Config Files**: Collision settings loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_collision::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut textures = TextureStore::new();
//!     let ship = textures.load("assets/ship.png")?;
//!     let rock = textures.load("assets/rock.png")?;
//!
//!     let mut tester = CollisionTester::new();
//!     let ship_texture = textures.get(ship).ok_or("missing ship")?;
//!     let rock_texture = textures.get(rock).ok_or("missing rock")?;
//!     tester.register_texture(ship_texture);
//!
//!     let mut a = Sprite::new(ship_texture);
//!     let mut b = Sprite::new(rock_texture);
//!     a.set_position(Vec2::new(10.0, 10.0));
//!     b.set_rotation(45.0);
//!
//!     if tester.circle_test(&a, &b) && tester.pixel_perfect_test(&a, &b, 128) {
//!         log::info!("ship hit a rock");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod assets;
pub mod scene;
pub mod physics;
pub mod config;

/// Common imports for collision users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec2, Point2, Transform2D, Transformable, FloatRect, IntRect},
        assets::{AlphaSource, ImageData, Texture, TextureHandle, TextureStore, AssetError},
        scene::{Renderable, Sprite},
        physics::collision::{
            AlphaMask, BitmaskCache, OrientedBoundingBox, Projection, CollisionTester,
        },
        config::{Config, ConfigError, CollisionConfig, CollisionMethod},
    };
}
