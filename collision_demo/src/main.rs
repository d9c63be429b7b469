//! Headless collision demo
//!
//! Loads a scene (or builds one), runs the circle, bounding box and pixel
//! perfect tests on every sprite pair and logs the results.
//!
//! ```text
//! collision_demo [scene.toml | scene.ron] [--random N]
//! ```

mod scene;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::Rng;
use sprite_collision::prelude::*;
use thiserror::Error;

use scene::{LoadedTextures, SceneConfig, SpriteEntry};

const RANDOM_FIELD_SIZE: f32 = 400.0;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Sprite '{sprite}' uses unknown texture '{texture}'")]
    UnknownTexture { sprite: String, texture: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

struct Args {
    scene_path: Option<PathBuf>,
    random: Option<usize>,
}

fn parse_args() -> Result<Args, DemoError> {
    let mut args = Args { scene_path: None, random: None };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        if arg == "--random" {
            let count = iter
                .next()
                .ok_or_else(|| DemoError::InvalidArgument("--random needs a count".to_string()))?;
            let count = count
                .parse()
                .map_err(|_| DemoError::InvalidArgument(format!("not a sprite count: {}", count)))?;
            args.random = Some(count);
        } else {
            args.scene_path = Some(PathBuf::from(arg));
        }
    }

    Ok(args)
}

/// Textures generated in memory when no scene file is given
fn builtin_textures() -> LoadedTextures {
    let disc = ImageData::from_alpha_fn(32, 32, |x, y| {
        let dx = x as f32 - 15.5;
        let dy = y as f32 - 15.5;
        if dx * dx + dy * dy <= 16.0 * 16.0 { 255 } else { 0 }
    });
    let crate_box = ImageData::solid_color(24, 24, [160, 110, 60, 255]);
    let beam = ImageData::solid_color(64, 6, [255, 80, 80, 200]);

    LoadedTextures::from_images(vec![("disc", disc), ("crate", crate_box), ("beam", beam)])
}

fn builtin_sprites() -> Vec<SpriteEntry> {
    let sprite = |name: &str, texture: &str, position: [f32; 2], rotation: f32| SpriteEntry {
        name: name.to_string(),
        texture: texture.to_string(),
        position,
        rotation,
        ..SpriteEntry::default()
    };

    vec![
        sprite("disc_a", "disc", [50.0, 50.0], 0.0),
        // Bounds overlap the disc's corner but no opaque pixels meet
        sprite("crate_a", "crate", [74.0, 74.0], 0.0),
        sprite("crate_b", "crate", [90.0, 60.0], 45.0),
        sprite("beam_a", "beam", [200.0, 200.0], 45.0),
        sprite("beam_b", "beam", [210.0, 190.0], 45.0),
        sprite("beam_c", "beam", [200.0, 200.0], 135.0),
    ]
}

fn random_sprites(count: usize, textures: &LoadedTextures) -> Vec<SpriteEntry> {
    let mut rng = rand::thread_rng();
    let mut names: Vec<&String> = textures.by_name.keys().collect();
    names.sort();

    (0..count)
        .map(|index| SpriteEntry {
            name: format!("random_{}", index),
            texture: names[rng.gen_range(0..names.len())].clone(),
            position: [rng.gen_range(0.0..RANDOM_FIELD_SIZE), rng.gen_range(0.0..RANDOM_FIELD_SIZE)],
            rotation: rng.gen_range(0.0..360.0),
            scale: [rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0)],
            ..SpriteEntry::default()
        })
        .collect()
}

#[derive(Default)]
struct MethodStats {
    hits: usize,
    elapsed: Duration,
}

impl MethodStats {
    fn record(&mut self, hit: bool, started: Instant) -> bool {
        self.elapsed += started.elapsed();
        if hit {
            self.hits += 1;
        }
        hit
    }
}

fn run_scene(collision: &CollisionConfig, textures: &LoadedTextures, entries: &[SpriteEntry]) -> Result<(), DemoError> {
    let sprites = textures.sprites(entries)?;
    let tester = CollisionTester::new();

    if collision.preload_textures {
        let started = Instant::now();
        for handle in textures.by_name.values() {
            if let Some(texture) = textures.store.get(*handle) {
                tester.register_texture(texture);
            }
        }
        log::info!(
            "Preloaded {} alpha masks in {:.3} ms",
            tester.bitmasks().len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
    }

    let mut circle = MethodStats::default();
    let mut bounding_box = MethodStats::default();
    let mut pixel = MethodStats::default();
    let mut configured_hits = 0;

    for (index, (name_a, a)) in sprites.iter().enumerate() {
        for (name_b, b) in &sprites[index + 1..] {
            let started = Instant::now();
            let circle_hit = circle.record(tester.circle_test(a, b), started);

            let started = Instant::now();
            let box_hit = bounding_box.record(tester.bounding_box_test(a, b), started);

            let started = Instant::now();
            let pixel_hit = pixel.record(tester.pixel_perfect_test(a, b, collision.alpha_threshold), started);

            if tester.test(a, b, collision) {
                configured_hits += 1;
            }

            if circle_hit || box_hit || pixel_hit {
                log::info!(
                    "{} <-> {}: circle={} box={} pixel={}",
                    name_a, name_b, circle_hit, box_hit, pixel_hit
                );
            } else {
                log::debug!("{} <-> {}: no contact", name_a, name_b);
            }
        }
    }

    let pairs = sprites.len() * sprites.len().saturating_sub(1) / 2;
    log::info!("Tested {} pairs across {} sprites", pairs, sprites.len());
    for (label, stats) in [("circle", &circle), ("bounding box", &bounding_box), ("pixel perfect", &pixel)] {
        log::info!(
            "{:>13}: {} hits in {:.3} ms",
            label,
            stats.hits,
            stats.elapsed.as_secs_f64() * 1000.0
        );
    }
    log::info!("Configured method {:?}: {} hits", collision.method, configured_hits);

    Ok(())
}

fn run() -> Result<(), DemoError> {
    let args = parse_args()?;

    let (collision, textures, mut entries) = if let Some(path) = &args.scene_path {
        log::info!("Loading scene from {}", path.display());
        let scene = SceneConfig::load_from_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let textures = LoadedTextures::load(&scene.textures, base_dir)?;
        (scene.collision, textures, scene.sprites)
    } else {
        log::info!("No scene given, using built-in scene");
        (CollisionConfig::default(), builtin_textures(), builtin_sprites())
    };

    if let Some(count) = args.random {
        if textures.by_name.is_empty() {
            return Err(DemoError::InvalidArgument("--random needs at least one texture".to_string()));
        }
        entries.extend(random_sprites(count, &textures));
    }

    run_scene(&collision, &textures, &entries)
}

fn main() {
    sprite_collision::foundation::logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting sprite collision demo");

    if let Err(e) = run() {
        log::error!("Collision demo failed: {}", e);
        std::process::exit(1);
    }
}
