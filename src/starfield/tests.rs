//! Starfield domain: tests for layout, resize, flicker, and perturbation.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{ResizeOutcome, Star, StarField, star_count};
use crate::canvas::Canvas;
use crate::content::StarTuning;
use crate::core::Viewport;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn field_800x600() -> StarField {
    StarField::initialize(Viewport::new(800.0, 600.0), &StarTuning::default(), &mut rng())
}

fn star_at(x: f32, y: f32) -> Star {
    Star::random(Vec2::new(x, y), 0, &mut rng())
}

// -----------------------------------------------------------------------------
// Initialization tests
// -----------------------------------------------------------------------------

#[test]
fn test_star_count_scales_with_area() {
    let tuning = StarTuning::default();
    assert_eq!(star_count(Viewport::new(800.0, 600.0), &tuning), 540);
    assert_eq!(star_count(Viewport::new(1600.0, 600.0), &tuning), 1080);
}

#[test]
fn test_initialize_places_stars_inside_bounds() {
    let field = field_800x600();
    assert_eq!(field.len(), 540);
    assert_eq!(field.constellations().len(), 3);

    for star in field.stars() {
        assert!(star.position.x >= 0.0 && star.position.x <= 800.0);
        assert!(star.position.y >= 0.0 && star.position.y <= 600.0);
        assert!(star.constellation < 3);
        assert!(star.visible);
    }
}

#[test]
fn test_initialize_with_degenerate_viewport_clamps() {
    let field = StarField::initialize(
        Viewport::new(0.0, -5.0),
        &StarTuning::default(),
        &mut rng(),
    );
    assert_eq!(field.bounds(), Viewport::new(1.0, 1.0));
    assert!(field.is_empty());
}

// -----------------------------------------------------------------------------
// Resize tests
// -----------------------------------------------------------------------------

#[test]
fn test_resize_beyond_threshold_rescales_coordinates() {
    let mut field = field_800x600();
    let before: Vec<Vec2> = field.stars().iter().map(|s| s.position).collect();

    let outcome = field.resize(
        Viewport::new(1000.0, 600.0),
        &StarTuning::default(),
        &mut rng(),
    );

    assert_eq!(outcome, ResizeOutcome::Rescaled);
    assert_eq!(field.len(), before.len());
    for (star, old) in field.stars().iter().zip(&before) {
        assert_eq!(star.position.x, old.x * 1.25);
        assert_eq!(star.position.y, old.y);
    }
    assert_eq!(field.bounds(), Viewport::new(1000.0, 600.0));
}

#[test]
fn test_resize_within_threshold_is_noop() {
    let mut field = field_800x600();
    let before: Vec<Vec2> = field.stars().iter().map(|s| s.position).collect();

    let outcome = field.resize(
        Viewport::new(820.0, 600.0),
        &StarTuning::default(),
        &mut rng(),
    );

    assert_eq!(outcome, ResizeOutcome::Ignored);
    let after: Vec<Vec2> = field.stars().iter().map(|s| s.position).collect();
    assert_eq!(after, before);
    assert_eq!(field.bounds(), Viewport::new(800.0, 600.0));
}

#[test]
fn test_resize_height_only_rescales_y() {
    let mut field = field_800x600();
    let before: Vec<Vec2> = field.stars().iter().map(|s| s.position).collect();

    field.resize(
        Viewport::new(800.0, 300.0),
        &StarTuning::default(),
        &mut rng(),
    );

    for (star, old) in field.stars().iter().zip(&before) {
        assert_eq!(star.position.x, old.x);
        assert_eq!(star.position.y, old.y * 0.5);
    }
}

#[test]
fn test_resize_empty_field_populates() {
    let mut field = StarField::default();
    let outcome = field.resize(
        Viewport::new(800.0, 600.0),
        &StarTuning::default(),
        &mut rng(),
    );

    assert_eq!(outcome, ResizeOutcome::Populated);
    assert_eq!(field.len(), 540);
}

// -----------------------------------------------------------------------------
// Tick tests
// -----------------------------------------------------------------------------

#[test]
fn test_tick_keeps_star_count_stable() {
    let mut field = field_800x600();
    let mut rng = rng();

    for frame in 0..2000u64 {
        field.tick(frame * 16, &mut rng);
    }

    assert_eq!(field.len(), 540);
}

#[test]
fn test_boost_decays_geometrically_then_expires() {
    let mut field = StarField::from_stars(vec![star_at(10.0, 10.0)], Viewport::new(100.0, 100.0));
    field.boost_within(Vec2::new(10.0, 10.0), 5.0, 1.0, 10_000);
    let mut rng = rng();

    field.tick(16, &mut rng);
    assert!((field.stars()[0].boost - 0.99).abs() < 1e-6);
    field.tick(32, &mut rng);
    assert!((field.stars()[0].boost - 0.9801).abs() < 1e-5);

    field.tick(10_000, &mut rng);
    assert_eq!(field.stars()[0].boost, 0.0);
}

#[test]
fn test_boost_reaches_zero_without_deadline() {
    let mut field = StarField::from_stars(vec![star_at(10.0, 10.0)], Viewport::new(100.0, 100.0));
    field.boost_within(Vec2::new(10.0, 10.0), 5.0, 1.0, u64::MAX);
    let mut rng = rng();

    for frame in 0..1000u64 {
        field.tick(frame, &mut rng);
    }

    assert_eq!(field.stars()[0].boost, 0.0);
}

#[test]
fn test_twinkle_alpha_is_bounded() {
    let mut star = star_at(0.0, 0.0);
    for now in (0..100_000).step_by(777) {
        let alpha = star.twinkle_alpha(now);
        assert!((0.0..=1.0).contains(&alpha));
    }

    star.boost = 5.0;
    assert!(star.twinkle_alpha(1234) <= 1.0);
}

// -----------------------------------------------------------------------------
// Perturbation tests
// -----------------------------------------------------------------------------

#[test]
fn test_quantum_marks_expire_and_restore_visibility() {
    let mut field = StarField::from_stars(
        vec![star_at(100.0, 100.0), star_at(500.0, 500.0)],
        Viewport::new(800.0, 600.0),
    );
    let mut rng = rng();

    let marked = field.mark_quantum_within(Vec2::new(100.0, 100.0), 60.0, 500, 0.0, &mut rng);
    assert_eq!(marked, 1);
    assert!(!field.stars()[0].visible);
    assert!(field.stars()[0].is_quantum());
    assert!(!field.stars()[1].is_quantum());

    field.tick(500, &mut rng);
    assert!(!field.stars()[0].is_quantum());
    assert!(field.stars()[0].visible);
}

#[test]
fn test_restore_quantum_clears_all_marks() {
    let mut field = StarField::from_stars(
        vec![star_at(100.0, 100.0), star_at(110.0, 100.0), star_at(700.0, 500.0)],
        Viewport::new(800.0, 600.0),
    );
    field.mark_quantum_within(Vec2::new(105.0, 100.0), 60.0, 10_000, 0.0, &mut rng());

    assert_eq!(field.restore_quantum(), 2);
    assert!(field.stars().iter().all(|s| s.visible && !s.is_quantum()));
}

#[test]
fn test_dimming_floors_brightness_and_expires() {
    let mut star = star_at(400.0, 300.0);
    star.brightness = 0.15;
    let mut field = StarField::from_stars(vec![star], Viewport::new(800.0, 600.0));

    field.dim_within(Vec2::new(400.0, 300.0), 50.0, 0.5, 100);
    assert!(field.stars()[0].is_dimmed());
    assert_eq!(field.stars()[0].effective_brightness(), 0.1);

    field.tick(100, &mut rng());
    assert!(!field.stars()[0].is_dimmed());
    assert_eq!(field.stars()[0].effective_brightness(), 0.15);
}

#[test]
fn test_visit_within_is_strict_radius() {
    let field = StarField::from_stars(
        vec![star_at(0.0, 0.0), star_at(40.0, 0.0), star_at(39.0, 0.0)],
        Viewport::new(800.0, 600.0),
    );

    let mut seen = Vec::new();
    field.visit_within(Vec2::ZERO, 40.0, |star, _| seen.push(star.position.x));

    assert_eq!(seen, vec![0.0, 39.0]);
}

#[test]
fn test_ignite_adds_bright_star() {
    let mut field = StarField::from_stars(Vec::new(), Viewport::new(800.0, 600.0));
    field.ignite(Vec2::new(400.0, 300.0), &mut rng());

    assert_eq!(field.len(), 1);
    assert_eq!(field.stars()[0].brightness, 1.0);
    assert_eq!(field.stars()[0].position, Vec2::new(400.0, 300.0));
}

#[test]
fn test_render_skips_hidden_stars() {
    let mut hidden = star_at(10.0, 10.0);
    hidden.visible = false;
    let mut faint = star_at(20.0, 20.0);
    faint.size = 1.0;
    let field = StarField::from_stars(vec![hidden, faint], Viewport::new(100.0, 100.0));

    let mut canvas = Canvas::default();
    field.render(0, &mut canvas);

    assert_eq!(canvas.shapes().len(), 1);
}
