//! Content domain: phenomenon catalog, tuning data, and RON loading.

mod builtin;
mod data;
mod error;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use builtin::builtin_catalog;
pub use data::{
    Anchor, ClickTuning, EventKind, EventTypeDescriptor, SkyTuning, SpawnTuning, StarTuning,
    UiTuning,
};
pub use error::{ContentLoadError, SkyError};
pub use loader::{load_catalog, load_tuning};
pub use registry::EventCatalog;
pub use validation::{ValidationError, validate_catalog};

use bevy::prelude::*;
use std::path::Path;

use crate::core::SkyRng;

pub const DATA_DIR: &str = "assets/data";

/// Loads tuning and the catalog synchronously so every Startup system sees them.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let base_path = Path::new(DATA_DIR);

        let tuning = resolve_tuning(base_path);
        let catalog = resolve_catalog(base_path);
        info!("{}", catalog.summary());

        if let Some(seed) = tuning.seed {
            info!("Using fixed sky seed {}", seed);
            app.insert_resource(SkyRng::from_seed(seed));
        }

        app.register_type::<SkyTuning>()
            .register_type::<EventKind>()
            .insert_resource(tuning)
            .insert_resource(catalog);
    }
}

fn resolve_tuning(base_path: &Path) -> SkyTuning {
    match load_tuning(base_path) {
        Ok(tuning) => tuning,
        Err(e) if e.is_missing() => SkyTuning::default(),
        Err(e) => {
            warn!("{}; using default tuning", e);
            SkyTuning::default()
        }
    }
}

fn resolve_catalog(base_path: &Path) -> EventCatalog {
    let loaded = match load_catalog(base_path) {
        Ok(catalog) => catalog,
        Err(e) if e.is_missing() => return builtin_catalog(),
        Err(e) => {
            warn!("{}; using built-in catalog", e);
            return builtin_catalog();
        }
    };

    let errors = validate_catalog(&loaded);
    if errors.is_empty() {
        return loaded;
    }

    for error in &errors {
        warn!("Catalog validation: {}", error);
    }
    warn!("Falling back to built-in catalog");
    builtin_catalog()
}
