//! ds-config: unit-system document format and validation.

pub mod resolve;
pub mod schema;
pub mod validate;

pub use resolve::{build_system, tagged_scales};
pub use schema::*;
pub use validate::{ValidationError, validate_document, validate_system};

use ds_core::ScaleError;
use ds_scales::AnyScaleSystem;

pub const LATEST_VERSION: u32 = 1;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Scale error: {0}")]
    Scale(#[from] ScaleError),

    #[error("Unknown unit system: {id}")]
    UnknownSystem { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScaleDocument {
    /// Build the named system.
    pub fn build(&self, id: &str) -> ConfigResult<AnyScaleSystem> {
        let def = self.system(id).ok_or_else(|| ConfigError::UnknownSystem {
            id: id.to_string(),
        })?;
        Ok(build_system(def)?)
    }
}

pub fn from_yaml_str(content: &str) -> ConfigResult<ScaleDocument> {
    let document: ScaleDocument = serde_yaml::from_str(content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn from_json_str(content: &str) -> ConfigResult<ScaleDocument> {
    let document: ScaleDocument = serde_json::from_str(content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn load_yaml(path: &std::path::Path) -> ConfigResult<ScaleDocument> {
    let content = std::fs::read_to_string(path)?;
    let document = from_yaml_str(&content)?;
    tracing::debug!(path = %path.display(), systems = document.systems.len(), "loaded scale document");
    Ok(document)
}

pub fn save_yaml(path: &std::path::Path, document: &ScaleDocument) -> ConfigResult<()> {
    validate_document(document)?;
    let content = serde_yaml::to_string(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ConfigResult<ScaleDocument> {
    let content = std::fs::read_to_string(path)?;
    let document = from_json_str(&content)?;
    tracing::debug!(path = %path.display(), systems = document.systems.len(), "loaded scale document");
    Ok(document)
}

pub fn save_json(path: &std::path::Path, document: &ScaleDocument) -> ConfigResult<()> {
    validate_document(document)?;
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> ConfigResult<ScaleDocument> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
