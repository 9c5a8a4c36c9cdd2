//! TOML persistence for [`PromptModel`] files.
//!
//! The model file is the CLI analog of the original form: users edit it by
//! hand between invocations. Nothing is persisted implicitly.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, PromptModel};

/// Load a model from a TOML file.
pub fn load_model(path: &Path) -> Result<PromptModel, AppError> {
    if !path.exists() {
        return Err(AppError::ModelFileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Save a model to a TOML file.
pub fn save_model(path: &Path, model: &PromptModel) -> Result<(), AppError> {
    let serialized = toml::to_string_pretty(model)?;
    fs::write(path, serialized)?;
    Ok(())
}
