//! Starfield domain: the star field simulation and its perturbation capability.
//!
//! The field exclusively owns star storage. Phenomena never hold references to
//! stars; they go through the narrow `*_within` methods below, which are safe
//! to call from several instances in one frame (last writer wins).

use bevy::prelude::*;
use rand::Rng;

use crate::canvas::Canvas;
use crate::content::StarTuning;
use crate::core::Viewport;
use crate::starfield::star::{Constellation, Dimming, Star, default_constellations};

/// Result of a resize request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Change below the relative threshold, nothing moved
    Ignored,
    /// Existing stars were scaled to the new bounds
    Rescaled,
    /// The field was empty and has been populated
    Populated,
}

/// Chance per flash roll that a star is kept visible regardless of intensity
const FLASH_OVERRIDE_CHANCE: f32 = 0.1;
/// Chance that a star going dark is replaced by a nearby clone
const RESPAWN_CHANCE: f32 = 0.05;
const RESPAWN_JITTER: f32 = 20.0;
const BOOST_DECAY: f32 = 0.99;
const BOOST_FLOOR: f32 = 0.01;

#[derive(Resource, Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    constellations: Vec<Constellation>,
    bounds: Viewport,
}

impl StarField {
    /// Populate a field sized to `bounds`, star count proportional to area.
    pub fn initialize(bounds: Viewport, tuning: &StarTuning, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            constellations: default_constellations(),
            bounds,
        };
        field.populate(tuning, rng);
        field
    }

    fn populate(&mut self, tuning: &StarTuning, rng: &mut impl Rng) {
        let count = star_count(self.bounds, tuning);
        let groups = self.constellations.len();
        self.stars = (0..count)
            .map(|_| {
                let position = self.bounds.random_point(rng);
                let constellation = rng.random_range(0..groups);
                Star::random(position, constellation, rng)
            })
            .collect();
    }

    /// Apply a settled viewport size.
    ///
    /// Changes at or below `tuning.resize_threshold` on both axes are ignored.
    /// Larger changes rescale existing coordinates by the width/height ratios.
    pub fn resize(
        &mut self,
        bounds: Viewport,
        tuning: &StarTuning,
        rng: &mut impl Rng,
    ) -> ResizeOutcome {
        let width_change = (bounds.width - self.bounds.width).abs() / self.bounds.width;
        let height_change = (bounds.height - self.bounds.height).abs() / self.bounds.height;

        if self.stars.is_empty() {
            self.bounds = bounds;
            self.populate(tuning, rng);
            return ResizeOutcome::Populated;
        }

        if width_change <= tuning.resize_threshold && height_change <= tuning.resize_threshold {
            return ResizeOutcome::Ignored;
        }

        let ratio = Vec2::new(
            bounds.width / self.bounds.width,
            bounds.height / self.bounds.height,
        );
        for star in &mut self.stars {
            star.position *= ratio;
        }
        self.bounds = bounds;
        ResizeOutcome::Rescaled
    }

    /// Advance flicker, replacement, boost decay, and transient modifier expiry.
    pub fn tick(&mut self, now_ms: u64, rng: &mut impl Rng) {
        let constellations = &self.constellations;

        for star in &mut self.stars {
            let group = &constellations[star.constellation];
            let flash_chance = group.flash_rate * 0.5;

            if rng.random::<f32>() < flash_chance {
                let phase = now_ms as f64 * star.twinkle_speed as f64 * 0.8
                    + star.flash_phase as f64
                    + group.phase_offset as f64;
                let intensity = 0.5 + 0.5 * phase.sin() as f32;
                star.visible = intensity > 0.3 || rng.random::<f32>() < FLASH_OVERRIDE_CHANCE;

                if !star.visible && rng.random::<f32>() < RESPAWN_CHANCE {
                    let mut clone = star.clone();
                    clone.position += Vec2::new(
                        (rng.random::<f32>() - 0.5) * RESPAWN_JITTER,
                        (rng.random::<f32>() - 0.5) * RESPAWN_JITTER,
                    );
                    clone.flash_phase = rng.random::<f32>() * std::f32::consts::TAU;
                    clone.visible = true;
                    *star = clone;
                }
            }

            if star.boost > 0.0 {
                if now_ms < star.boost_until_ms {
                    star.boost *= BOOST_DECAY;
                    if star.boost < BOOST_FLOOR {
                        star.boost = 0.0;
                    }
                } else {
                    star.boost = 0.0;
                }
            }

            if star.quantum_until_ms.is_some_and(|until| now_ms >= until) {
                star.quantum_until_ms = None;
                star.visible = true;
            }

            if star.dimming.is_some_and(|dim| now_ms >= dim.until_ms) {
                star.dimming = None;
            }
        }
    }

    /// Draw every visible star with its twinkle alpha and a halo for larger classes.
    pub fn render(&self, now_ms: u64, canvas: &mut Canvas) {
        for star in self.stars.iter().filter(|s| s.visible) {
            let alpha = star.twinkle_alpha(now_ms);
            let brightness = star.effective_brightness();

            canvas.dot(
                star.position,
                star.size,
                star.color.with_alpha(alpha * brightness * 0.8),
            );
            if star.size > 1.0 {
                canvas.dot(
                    star.position - Vec2::ONE,
                    star.size + 2.0,
                    star.color.with_alpha(alpha * brightness * 0.3),
                );
            }
        }
    }

    // ------------------------------------------------------------------------
    // Perturbation capability
    // ------------------------------------------------------------------------

    /// Read-only visit of stars strictly within `radius` of `center`.
    pub fn visit_within(&self, center: Vec2, radius: f32, mut visit: impl FnMut(&Star, f32)) {
        for star in &self.stars {
            let dist = star.position.distance(center);
            if dist < radius {
                visit(star, dist);
            }
        }
    }

    /// Mark stars within `radius` as quantum-affected until `until_ms`,
    /// leaving each visible with probability `keep_visible`.
    pub fn mark_quantum_within(
        &mut self,
        center: Vec2,
        radius: f32,
        until_ms: u64,
        keep_visible: f32,
        rng: &mut impl Rng,
    ) -> usize {
        let mut marked = 0;
        for star in &mut self.stars {
            if star.position.distance(center) < radius {
                star.visible = rng.random::<f32>() < keep_visible;
                star.quantum_until_ms = Some(until_ms);
                marked += 1;
            }
        }
        marked
    }

    /// Make every quantum-affected star visible again and clear the mark.
    pub fn restore_quantum(&mut self) -> usize {
        let mut restored = 0;
        for star in self.stars.iter_mut().filter(|s| s.is_quantum()) {
            star.visible = true;
            star.quantum_until_ms = None;
            restored += 1;
        }
        restored
    }

    /// Dim stars within `radius` by `factor` until `until_ms`.
    pub fn dim_within(&mut self, center: Vec2, radius: f32, factor: f32, until_ms: u64) -> usize {
        let mut dimmed = 0;
        for star in &mut self.stars {
            if star.position.distance(center) < radius {
                star.dimming = Some(Dimming { factor, until_ms });
                dimmed += 1;
            }
        }
        dimmed
    }

    /// Start a decaying twinkle boost on stars within `radius`.
    pub fn boost_within(&mut self, center: Vec2, radius: f32, intensity: f32, until_ms: u64) {
        for star in &mut self.stars {
            if star.position.distance(center) < radius {
                star.boost = star.boost.max(intensity);
                star.boost_until_ms = star.boost_until_ms.max(until_ms);
            }
        }
    }

    /// Add a permanent newborn star.
    pub fn ignite(&mut self, position: Vec2, rng: &mut impl Rng) {
        let constellation = rng.random_range(0..self.constellations.len());
        self.stars.push(Star::newborn(position, constellation, rng));
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.stars.iter().filter(|s| s.visible).count()
    }

    #[cfg(test)]
    pub(crate) fn from_stars(stars: Vec<Star>, bounds: Viewport) -> Self {
        Self {
            stars,
            constellations: default_constellations(),
            bounds,
        }
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            stars: Vec::new(),
            constellations: default_constellations(),
            bounds: Viewport::default(),
        }
    }
}

/// Stars for a viewport: `floor(area / area_per_star * density_factor)`.
pub fn star_count(bounds: Viewport, tuning: &StarTuning) -> usize {
    (bounds.area() / tuning.area_per_star.max(1.0) * tuning.density_factor).floor() as usize
}
