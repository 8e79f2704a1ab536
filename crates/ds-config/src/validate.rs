//! Document validation logic.

use std::collections::HashSet;

use ds_core::ScaleError;

use crate::resolve::build_system;
use crate::schema::{ScaleDocument, UnitSystemDef, VariantDef};
use crate::LATEST_VERSION;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Conflicting settings in system '{id}': {reason}")]
    Conflict { id: String, reason: String },

    #[error("Invalid unit system '{id}': {source}")]
    InvalidSystem {
        id: String,
        #[source]
        source: ScaleError,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(document: &ScaleDocument) -> Result<(), ValidationError> {
    if document.version == 0 || document.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: document.version,
        });
    }

    let mut system_ids = HashSet::new();
    for system in &document.systems {
        if system.id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                context: format!("system '{}'", system.name),
            });
        }
        if !system_ids.insert(&system.id) {
            return Err(ValidationError::DuplicateId {
                id: system.id.clone(),
                context: "systems".to_string(),
            });
        }
        validate_system(system)?;
    }

    Ok(())
}

pub fn validate_system(system: &UnitSystemDef) -> Result<(), ValidationError> {
    if system.variant == VariantDef::Mechanical && system.temperature.is_some() {
        return Err(ValidationError::Conflict {
            id: system.id.clone(),
            reason: "mechanical systems derive no temperature; use the general variant or remove 'temperature'"
                .to_string(),
        });
    }

    build_system(system).map_err(|source| ValidationError::InvalidSystem {
        id: system.id.clone(),
        source,
    })?;
    Ok(())
}
