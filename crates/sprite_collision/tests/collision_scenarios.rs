//! End-to-end collision scenarios using instrumented textures

use std::cell::Cell;

use sprite_collision::prelude::*;

/// Texture whose alpha reads are counted
struct CountingTexture {
    width: u32,
    height: u32,
    alpha: u8,
    reads: Cell<usize>,
}

impl CountingTexture {
    fn new(width: u32, height: u32, alpha: u8) -> Self {
        Self { width, height, alpha, reads: Cell::new(0) }
    }
}

impl AlphaSource for CountingTexture {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn alpha_at(&self, _x: u32, _y: u32) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.alpha
    }
}

/// Renderable backed by a counting texture
struct Instrumented<'a> {
    handle: TextureHandle,
    texture: &'a CountingTexture,
    rect: IntRect,
    transformable: Transformable,
}

impl<'a> Instrumented<'a> {
    fn new(handle: TextureHandle, texture: &'a CountingTexture) -> Self {
        Self {
            handle,
            texture,
            rect: IntRect::new(0, 0, texture.width as i32, texture.height as i32),
            transformable: Transformable::new(),
        }
    }

    fn at(mut self, x: f32, y: f32) -> Self {
        self.transformable.set_position(Vec2::new(x, y));
        self
    }
}

impl Renderable for Instrumented<'_> {
    fn texture_handle(&self) -> TextureHandle {
        self.handle
    }

    fn texture(&self) -> &dyn AlphaSource {
        self.texture
    }

    fn texture_rect(&self) -> IntRect {
        self.rect
    }

    fn scale(&self) -> Vec2 {
        self.transformable.scale()
    }

    fn transform(&self) -> Transform2D {
        self.transformable.transform()
    }
}

fn handles(count: usize) -> (TextureStore, Vec<TextureHandle>) {
    let mut store = TextureStore::new();
    let handles = (0..count)
        .map(|_| store.insert(ImageData::solid_color(1, 1, [0; 4])))
        .collect();
    (store, handles)
}

fn bar<'t>(texture: &'t Texture, x: f32, y: f32, degrees: f32) -> Sprite<'t> {
    let mut sprite = Sprite::new(texture);
    sprite.center_origin();
    sprite.set_position(Vec2::new(x, y));
    sprite.set_rotation(degrees);
    sprite
}

#[test]
fn coincident_opaque_squares_collide_in_every_test() {
    let mut store = TextureStore::new();
    let handle = store.insert(ImageData::solid_color(10, 10, [255, 255, 255, 255]));
    let texture = store.get(handle).expect("texture stored");
    let tester = CollisionTester::new();

    let a = Sprite::new(texture);
    let b = Sprite::new(texture);

    assert!(tester.pixel_perfect_test(&a, &b, 0));
    assert!(tester.circle_test(&a, &b));
    assert!(tester.bounding_box_test(&a, &b));
}

#[test]
fn distant_squares_never_collide() {
    let mut store = TextureStore::new();
    let handle = store.insert(ImageData::solid_color(10, 10, [255, 255, 255, 255]));
    let texture = store.get(handle).expect("texture stored");
    let tester = CollisionTester::new();

    let a = Sprite::new(texture);
    let mut b = Sprite::new(texture);
    b.set_position(Vec2::new(100.0, 0.0));

    assert!(!tester.pixel_perfect_test(&a, &b, 0));
    assert!(!tester.circle_test(&a, &b));
    assert!(!tester.bounding_box_test(&a, &b));
}

#[test]
fn alpha_must_exceed_threshold() {
    let mut store = TextureStore::new();
    let clear = store.insert(ImageData::solid_color(10, 10, [255, 255, 255, 0]));
    let faint = store.insert(ImageData::solid_color(10, 10, [255, 255, 255, 1]));
    let tester = CollisionTester::new();

    let clear_a = Sprite::new(store.get(clear).expect("texture stored"));
    let clear_b = Sprite::new(store.get(clear).expect("texture stored"));
    assert!(!tester.pixel_perfect_test(&clear_a, &clear_b, 0));

    let faint_a = Sprite::new(store.get(faint).expect("texture stored"));
    let faint_b = Sprite::new(store.get(faint).expect("texture stored"));
    assert!(tester.pixel_perfect_test(&faint_a, &faint_b, 0));
    assert!(!tester.pixel_perfect_test(&faint_a, &faint_b, 1));
}

#[test]
fn rotated_bars_with_overlapping_bounds_are_separated() {
    let mut store = TextureStore::new();
    let handle = store.insert(ImageData::solid_color(100, 10, [255, 255, 255, 255]));
    let texture = store.get(handle).expect("texture stored");
    let tester = CollisionTester::new();

    // Parallel diagonal bars about 14 units apart across their thin axis
    let a = bar(texture, 0.0, 0.0, 45.0);
    let b = bar(texture, 20.0, 0.0, 45.0);

    assert!(a.global_bounds().intersects(&b.global_bounds()));
    assert!(!tester.bounding_box_test(&a, &b));
    assert!(!tester.bounding_box_test(&b, &a));
    assert!(!tester.pixel_perfect_test(&a, &b, 0));
}

#[test]
fn crossing_bars_overlap() {
    let mut store = TextureStore::new();
    let handle = store.insert(ImageData::solid_color(100, 10, [255, 255, 255, 255]));
    let texture = store.get(handle).expect("texture stored");
    let tester = CollisionTester::new();

    let a = bar(texture, 50.0, 50.0, 30.0);
    let b = bar(texture, 50.0, 50.0, 120.0);

    assert!(tester.bounding_box_test(&a, &b));
    assert!(tester.pixel_perfect_test(&a, &b, 0));
}

#[test]
fn disjoint_bounds_skip_alpha_sampling() {
    let (_store, ids) = handles(2);
    let left = CountingTexture::new(10, 10, 255);
    let right = CountingTexture::new(10, 10, 255);
    let tester = CollisionTester::new();

    let a = Instrumented::new(ids[0], &left);
    let b = Instrumented::new(ids[1], &right).at(50.0, 0.0);

    assert!(!tester.pixel_perfect_test(&a, &b, 0));
    assert_eq!(left.reads.get(), 0);
    assert_eq!(right.reads.get(), 0);
    assert!(tester.bitmasks().is_empty());
}

#[test]
fn masks_are_read_once_across_tests() {
    let (_store, ids) = handles(2);
    let left = CountingTexture::new(8, 8, 255);
    let right = CountingTexture::new(8, 8, 255);
    let tester = CollisionTester::new();

    let a = Instrumented::new(ids[0], &left);
    let b = Instrumented::new(ids[1], &right).at(4.0, 4.0);

    tester.bitmasks().ensure(ids[0], &left);
    for _ in 0..5 {
        assert!(tester.pixel_perfect_test(&a, &b, 0));
    }

    assert_eq!(left.reads.get(), 64);
    assert_eq!(right.reads.get(), 64);
    assert_eq!(tester.bitmasks().len(), 2);
}

#[test]
fn first_row_and_column_never_hit() {
    let mut store = TextureStore::new();
    let corner = store.insert(ImageData::from_alpha_fn(10, 10, |x, y| {
        if x == 0 || y == 0 { 255 } else { 0 }
    }));
    let solid = store.insert(ImageData::solid_color(10, 10, [255, 255, 255, 255]));
    let tester = CollisionTester::new();

    let a = Sprite::new(store.get(corner).expect("texture stored"));
    let b = Sprite::new(store.get(solid).expect("texture stored"));

    assert!(!tester.pixel_perfect_test(&a, &b, 0));
}

#[test]
fn degenerate_texture_does_not_panic() {
    let (_store, ids) = handles(2);
    let empty = CountingTexture::new(0, 0, 255);
    let solid = CountingTexture::new(10, 10, 255);
    let tester = CollisionTester::new();

    // Claims a 10x10 region of a texture that has no pixels
    let mut a = Instrumented::new(ids[0], &empty);
    a.rect = IntRect::new(0, 0, 10, 10);
    let b = Instrumented::new(ids[1], &solid);

    assert!(!tester.pixel_perfect_test(&a, &b, 0));
    assert!(tester.bitmasks().get_cached(ids[0]).is_some_and(|mask| mask.is_empty()));
}

#[test]
fn tests_are_symmetric_and_bounded_by_world_bounds() {
    let mut store = TextureStore::new();
    let long = store.insert(ImageData::solid_color(40, 8, [255, 255, 255, 255]));
    let square = store.insert(ImageData::solid_color(16, 16, [255, 255, 255, 255]));
    let long = store.get(long).expect("texture stored");
    let square = store.get(square).expect("texture stored");
    let tester = CollisionTester::new();

    for step in 0..24 {
        let offset = step as f32 * 2.5;
        let a = bar(long, 0.0, 0.0, step as f32 * 15.0);
        let mut b = bar(square, offset, offset * 0.5, step as f32 * 7.0);
        b.set_scale(Vec2::new(1.0 + step as f32 * 0.1, 1.0));

        assert_eq!(tester.circle_test(&a, &b), tester.circle_test(&b, &a));
        assert_eq!(tester.bounding_box_test(&a, &b), tester.bounding_box_test(&b, &a));

        if !a.global_bounds().intersects(&b.global_bounds()) {
            assert!(!tester.bounding_box_test(&a, &b));
            assert!(!tester.pixel_perfect_test(&a, &b, 0));
        }
    }
}

#[test]
fn tester_can_be_shared_between_threads() {
    let mut store = TextureStore::new();
    let handle = store.insert(ImageData::solid_color(32, 32, [255, 255, 255, 255]));
    let texture = store.get(handle).expect("texture stored");
    let tester = CollisionTester::new();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let tester = &tester;
            scope.spawn(move || {
                let a = Sprite::new(texture);
                let mut b = Sprite::new(texture);
                b.set_position(Vec2::new(worker as f32 * 4.0, 0.0));
                assert!(tester.pixel_perfect_test(&a, &b, 0));
            });
        }
    });

    assert_eq!(tester.bitmasks().len(), 1);
}

#[test]
fn textures_from_separate_stores_keep_their_own_masks() {
    let mut first = TextureStore::new();
    let mut second = TextureStore::new();
    let opaque = first.insert(ImageData::solid_color(10, 10, [255, 255, 255, 255]));
    let clear = second.insert(ImageData::solid_color(10, 10, [255, 255, 255, 0]));
    assert_ne!(opaque, clear);

    let tester = CollisionTester::new();
    let a = Sprite::new(first.get(opaque).expect("texture stored"));
    let a_copy = Sprite::new(first.get(opaque).expect("texture stored"));
    let b = Sprite::new(second.get(clear).expect("texture stored"));

    assert!(tester.pixel_perfect_test(&a, &a_copy, 0));
    assert!(!tester.pixel_perfect_test(&a, &b, 0));
    assert_eq!(tester.bitmasks().len(), 2);
}

#[test]
fn squares_sharing_an_edge_do_not_collide_by_box() {
    let mut store = TextureStore::new();
    let handle = store.insert(ImageData::solid_color(10, 10, [255, 255, 255, 255]));
    let texture = store.get(handle).expect("texture stored");
    let tester = CollisionTester::new();

    let a = Sprite::new(texture);
    let mut b = Sprite::new(texture);
    b.set_position(Vec2::new(10.0, 0.0));

    // World bounds touching along x = 10 do not intersect
    assert!(!a.global_bounds().intersects(&b.global_bounds()));
    assert!(!tester.bounding_box_test(&a, &b));
    assert!(!tester.bounding_box_test(&b, &a));
    assert!(!tester.pixel_perfect_test(&a, &b, 0));
    // Touching circles still count
    assert!(tester.circle_test(&a, &b));
}
