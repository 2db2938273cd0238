//! Starfield domain: star particles and constellation groups.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

/// Size class of a background star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarClass {
    /// Most stars: small and dim
    Faint,
    Bright,
    Giant,
}

impl StarClass {
    /// 70% faint, 20% bright, 10% giant
    pub fn roll(rng: &mut impl Rng) -> Self {
        let roll: f32 = rng.random();
        if roll < 0.7 {
            StarClass::Faint
        } else if roll < 0.9 {
            StarClass::Bright
        } else {
            StarClass::Giant
        }
    }

    pub fn size(self) -> f32 {
        match self {
            StarClass::Faint => 1.0,
            StarClass::Bright => 1.5,
            StarClass::Giant => 2.0,
        }
    }

    fn roll_brightness(self, rng: &mut impl Rng) -> f32 {
        let r: f32 = rng.random();
        match self {
            StarClass::Faint => 0.2 + r * 0.3,
            StarClass::Bright => 0.6 + r * 0.3,
            StarClass::Giant => 0.8 + r * 0.2,
        }
    }

    /// Twinkle angular speed in radians per ms
    fn roll_twinkle_speed(self, rng: &mut impl Rng) -> f32 {
        let r: f32 = rng.random();
        match self {
            StarClass::Faint => r * 0.0015 + 0.0005,
            StarClass::Bright => r * 0.003 + 0.001,
            StarClass::Giant => r * 0.004 + 0.002,
        }
    }
}

const STAR_TINTS: [Color; 4] = [
    Color::srgb(0.616, 0.710, 1.0),
    Color::srgb(1.0, 0.875, 0.569),
    Color::srgb(1.0, 0.678, 0.678),
    Color::srgb(0.776, 0.659, 1.0),
];

fn roll_tint(brightness: f32, rng: &mut impl Rng) -> Color {
    if brightness < 0.4 {
        return Color::WHITE;
    }
    STAR_TINTS[rng.random_range(0..STAR_TINTS.len())]
}

/// A named subset of stars flashing at a shared rate and phase offset
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    pub id: &'static str,
    /// Per-frame flash probability before the 0.5 damping
    pub flash_rate: f32,
    pub phase_offset: f32,
}

pub fn default_constellations() -> Vec<Constellation> {
    vec![
        Constellation {
            id: "ursa_major",
            flash_rate: 0.003,
            phase_offset: 0.0,
        },
        Constellation {
            id: "orion",
            flash_rate: 0.002,
            phase_offset: PI,
        },
        Constellation {
            id: "cassiopeia",
            flash_rate: 0.004,
            phase_offset: PI / 2.0,
        },
    ]
}

/// Temporary dimming applied by a dark matter cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimming {
    pub factor: f32,
    pub until_ms: u64,
}

/// One background star. Owned by the StarField.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub class: StarClass,
    pub size: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
    pub color: Color,
    pub visible: bool,
    /// Index into the field's constellation list
    pub constellation: usize,
    pub flash_phase: f32,
    /// Extra twinkle from a click, decays each frame
    pub boost: f32,
    pub boost_until_ms: u64,
    /// Set while a quantum fluctuation holds this star
    pub quantum_until_ms: Option<u64>,
    pub dimming: Option<Dimming>,
}

impl Star {
    pub fn random(position: Vec2, constellation: usize, rng: &mut impl Rng) -> Self {
        let class = StarClass::roll(rng);
        let brightness = class.roll_brightness(rng);
        Self {
            position,
            class,
            size: class.size(),
            brightness,
            twinkle_speed: class.roll_twinkle_speed(rng),
            twinkle_phase: rng.random::<f32>() * PI * 4.0,
            color: roll_tint(brightness, rng),
            visible: true,
            constellation,
            flash_phase: rng.random::<f32>() * PI * 2.0,
            boost: 0.0,
            boost_until_ms: 0,
            quantum_until_ms: None,
            dimming: None,
        }
    }

    /// Fully bright white star ignited by a star-birth event.
    pub fn newborn(position: Vec2, constellation: usize, rng: &mut impl Rng) -> Self {
        Self {
            position,
            class: StarClass::Giant,
            size: 2.0,
            brightness: 1.0,
            twinkle_speed: 0.002,
            twinkle_phase: rng.random::<f32>() * PI * 4.0,
            color: Color::WHITE,
            visible: true,
            constellation,
            flash_phase: rng.random::<f32>() * PI * 2.0,
            boost: 0.0,
            boost_until_ms: 0,
            quantum_until_ms: None,
            dimming: None,
        }
    }

    pub fn is_quantum(&self) -> bool {
        self.quantum_until_ms.is_some()
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimming.is_some()
    }

    /// Brightness after any dark matter dimming
    pub fn effective_brightness(&self) -> f32 {
        match self.dimming {
            Some(dim) => (self.brightness * dim.factor).max(0.1),
            None => self.brightness,
        }
    }

    /// Smooth twinkle in 0..=1, brightened by any active boost.
    pub fn twinkle_alpha(&self, now_ms: u64) -> f32 {
        let phase = now_ms as f64 * self.twinkle_speed as f64 * 0.8 + self.twinkle_phase as f64;
        let alpha = 0.5 + 0.5 * phase.sin() as f32;
        if self.boost > 0.0 {
            (alpha * (1.0 + self.boost)).min(1.0)
        } else {
            alpha
        }
    }
}
