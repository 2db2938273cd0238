//! Data definitions for the phenomenon catalog and sky tuning.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The EventCatalog provides lookup by kind.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Event kinds (phenomena.ron)
// ============================================================================

/// Closed set of astronomical phenomenon types. Declaration order is registration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Reflect,
)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Supernova,
    Blackhole,
    Pulsar,
    Comet,
    Nebula,
    Planet,
    InterstellarDust,
    GravitationalWave,
    QuantumFluctuation,
    Spaceship,
    DarkMatter,
    PlasmaStorm,
    StarBirth,
    FtlNeutrinos,
}

/// Where a freshly spawned instance is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Uniformly random inside the viewport
    Random,
    /// Centre of the viewport
    Center,
}

impl EventKind {
    pub const ALL: [EventKind; 14] = [
        EventKind::Supernova,
        EventKind::Blackhole,
        EventKind::Pulsar,
        EventKind::Comet,
        EventKind::Nebula,
        EventKind::Planet,
        EventKind::InterstellarDust,
        EventKind::GravitationalWave,
        EventKind::QuantumFluctuation,
        EventKind::Spaceship,
        EventKind::DarkMatter,
        EventKind::PlasmaStorm,
        EventKind::StarBirth,
        EventKind::FtlNeutrinos,
    ];

    /// Stable string identifier (matches the RON spelling)
    pub fn id(self) -> &'static str {
        match self {
            EventKind::Supernova => "supernova",
            EventKind::Blackhole => "blackhole",
            EventKind::Pulsar => "pulsar",
            EventKind::Comet => "comet",
            EventKind::Nebula => "nebula",
            EventKind::Planet => "planet",
            EventKind::InterstellarDust => "interstellar_dust",
            EventKind::GravitationalWave => "gravitational_wave",
            EventKind::QuantumFluctuation => "quantum_fluctuation",
            EventKind::Spaceship => "spaceship",
            EventKind::DarkMatter => "dark_matter",
            EventKind::PlasmaStorm => "plasma_storm",
            EventKind::StarBirth => "star_birth",
            EventKind::FtlNeutrinos => "ftl_neutrinos",
        }
    }

    pub fn from_id(id: &str) -> Option<EventKind> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn anchor(self) -> Anchor {
        match self {
            EventKind::QuantumFluctuation
            | EventKind::DarkMatter
            | EventKind::PlasmaStorm
            | EventKind::StarBirth => Anchor::Center,
            _ => Anchor::Random,
        }
    }

    /// Effective lifetime for a new instance given the catalog's base duration.
    pub fn effective_duration_ms(self, base_ms: u64) -> u64 {
        match self {
            // Fixed lifetime regardless of catalog tuning
            EventKind::QuantumFluctuation => 6000,
            // Tail keeps drawing for a fifth past the nominal crossing
            EventKind::Comet => base_ms + base_ms / 5,
            _ => base_ms,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Immutable catalog entry shared by every instance of a kind.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct EventTypeDescriptor {
    pub kind: EventKind,
    pub name: String,
    pub description: String,
    /// `#rrggbb` hex
    pub color: String,
    pub duration_ms: u64,
    /// Glyph shown in the collection panel
    pub icon: String,
}

impl EventTypeDescriptor {
    pub fn color(&self) -> Color {
        Srgba::hex(&self.color)
            .map(Color::from)
            .unwrap_or(Color::WHITE)
    }

    pub fn color_with_alpha(&self, alpha: f32) -> Color {
        self.color().with_alpha(alpha.clamp(0.0, 1.0))
    }
}

// ============================================================================
// Sky tuning (sky_tuning.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
#[serde(default)]
pub struct SkyTuning {
    pub schema_version: u32,
    /// Fixed RNG seed; random per session when absent
    pub seed: Option<u64>,
    pub spawn: SpawnTuning,
    pub clicks: ClickTuning,
    pub stars: StarTuning,
    pub ui: UiTuning,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SpawnTuning {
    /// Minimum gap between any two spawns
    pub cooldown_ms: u64,
    /// Chance per frame of an autonomous spawn attempt
    pub auto_spawn_chance: f32,
    /// Chance to restrict the draw to uncollected kinds when any remain
    pub uncollected_bias: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ClickTuning {
    pub significant_window_ms: u64,
    pub streak_idle_ms: u64,
    pub cutscene_threshold: u32,
    /// Every Nth normal click may request a spawn
    pub spawn_cadence: u32,
    pub spawn_chance: f32,
    pub stabilize_radius: f32,
    pub stabilize_chance: f32,
    pub boost_radius: f32,
    pub boost_intensity: f32,
    pub boost_duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct StarTuning {
    /// Viewport area per star before the density factor
    pub area_per_star: f32,
    pub density_factor: f32,
    /// Relative dimension change below which a resize is ignored
    pub resize_threshold: f32,
    pub resize_debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct UiTuning {
    pub notification_ms: u64,
    pub click_marker_ms: u64,
    pub cutscene_ms: u64,
}

impl Default for SkyTuning {
    fn default() -> Self {
        Self {
            schema_version: 1,
            seed: None,
            spawn: SpawnTuning::default(),
            clicks: ClickTuning::default(),
            stars: StarTuning::default(),
            ui: UiTuning::default(),
        }
    }
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            cooldown_ms: 8000,
            auto_spawn_chance: 0.002,
            uncollected_bias: 0.7,
        }
    }
}

impl Default for ClickTuning {
    fn default() -> Self {
        Self {
            significant_window_ms: 5000,
            streak_idle_ms: 5000,
            cutscene_threshold: 99,
            spawn_cadence: 20,
            spawn_chance: 0.5,
            stabilize_radius: 40.0,
            stabilize_chance: 0.3,
            boost_radius: 60.0,
            boost_intensity: 1.0,
            boost_duration_ms: 1500,
        }
    }
}

impl Default for StarTuning {
    fn default() -> Self {
        Self {
            area_per_star: 800.0,
            density_factor: 0.9,
            resize_threshold: 0.05,
            resize_debounce_ms: 500,
        }
    }
}

impl Default for UiTuning {
    fn default() -> Self {
        Self {
            notification_ms: 2000,
            click_marker_ms: 600,
            cutscene_ms: 10_000,
        }
    }
}
