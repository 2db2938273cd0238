//! Built-in phenomenon descriptors used when no catalog data file is present.

use super::data::{EventKind, EventTypeDescriptor};
use super::registry::EventCatalog;

fn descriptor(
    kind: EventKind,
    name: &str,
    description: &str,
    color: &str,
    duration_ms: u64,
    icon: &str,
) -> EventTypeDescriptor {
    EventTypeDescriptor {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        duration_ms,
        icon: icon.to_string(),
    }
}

pub fn builtin_catalog() -> EventCatalog {
    EventCatalog::from_descriptors([
        descriptor(
            EventKind::Supernova,
            "Supernova",
            "The violent death of a massive star, and the forge of most heavy elements.",
            "#ff00ff",
            1500,
            "💥",
        ),
        descriptor(
            EventKind::Blackhole,
            "Black Hole",
            "A region so dense that not even light escapes its gravity.",
            "#ff9900",
            3000,
            "⚫",
        ),
        descriptor(
            EventKind::Pulsar,
            "Pulsar",
            "A rapidly spinning neutron star sweeping beams across space like a lighthouse.",
            "#00ff00",
            1000,
            "⭐",
        ),
        descriptor(
            EventKind::Comet,
            "Comet",
            "A wanderer of ice and dust whose tail glows as it nears a star.",
            "#88ff88",
            3500,
            "🌠",
        ),
        descriptor(
            EventKind::Nebula,
            "Nebula",
            "A vast cloud of gas and dust where stars are born and buried.",
            "#9d65ff",
            8000,
            "🌌",
        ),
        descriptor(
            EventKind::Planet,
            "Planet",
            "A world orbiting its star, perhaps a home for life.",
            "#55aaff",
            5000,
            "🪐",
        ),
        descriptor(
            EventKind::InterstellarDust,
            "Interstellar Dust",
            "Tiny drifting grains that seed the formation of stars and planets.",
            "#cccccc",
            6000,
            "✨",
        ),
        descriptor(
            EventKind::GravitationalWave,
            "Gravitational Wave",
            "Ripples in spacetime from colliding giants, as general relativity foretold.",
            "#00ffcc",
            3000,
            "🌀",
        ),
        descriptor(
            EventKind::QuantumFluctuation,
            "Quantum Fluctuation",
            "Random jitter of a quantum field, the uncertainty principle made visible.",
            "#0099ff",
            6000,
            "⚛",
        ),
        descriptor(
            EventKind::Spaceship,
            "Starship",
            "A vessel of explorers carrying the longing for the unknown.",
            "#ff5555",
            5000,
            "🚀",
        ),
        descriptor(
            EventKind::DarkMatter,
            "Dark Matter Cloud",
            "Invisible matter revealed only by the way it bends and dims the stars.",
            "#330066",
            8000,
            "⬛",
        ),
        descriptor(
            EventKind::PlasmaStorm,
            "Plasma Storm",
            "A torrent of charged particles, the most violent weather in the cosmos.",
            "#ff3300",
            5000,
            "⚡",
        ),
        descriptor(
            EventKind::StarBirth,
            "Star Birth",
            "Interstellar matter collapsing under its own gravity until a new star ignites.",
            "#ffff66",
            7000,
            "🌟",
        ),
        descriptor(
            EventKind::FtlNeutrinos,
            "FTL Neutrinos",
            "Mysterious particles outrunning light, leaving blue trails through spacetime.",
            "#00ccff",
            1000,
            "☄",
        ),
    ])
}
