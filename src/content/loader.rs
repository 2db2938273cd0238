//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::error::ContentLoadError;
use super::registry::EventCatalog;

pub const CATALOG_FILE: &str = "phenomena.ron";
pub const TUNING_FILE: &str = "sky_tuning.ron";

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: path.to_path_buf(),
        source,
    })
}

/// Parse a RON string containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(contents: &str, path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(data.items)
}

/// Parse a single RON struct (not wrapped in DataFile).
pub fn parse_single<T>(contents: &str, path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load the phenomenon catalog from `base_path/phenomena.ron`.
pub fn load_catalog(base_path: &Path) -> Result<EventCatalog, ContentLoadError> {
    let path = base_path.join(CATALOG_FILE);
    let contents = read(&path)?;
    let items = parse_data_file::<EventTypeDescriptor>(&contents, &path)?;
    Ok(EventCatalog::from_descriptors(items))
}

/// Load tuning overrides from `base_path/sky_tuning.ron`.
pub fn load_tuning(base_path: &Path) -> Result<SkyTuning, ContentLoadError> {
    let path = base_path.join(TUNING_FILE);
    let contents = read(&path)?;
    parse_single::<SkyTuning>(&contents, &path)
}
