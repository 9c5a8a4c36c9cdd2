//! isoprompt: assemble symbolic isometric infographic prompts from an editable
//! model, with optional LLM-assisted structure extraction.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

pub use app::{ExtractOutcome, Extractor, WizardOutcome};
pub use domain::{AppError, PromptModel, compose};

use domain::{default_model, resolve_model};
use ports::ClipboardWriter;
use services::{ArboardClipboard, HttpCompletionClient, load_model, save_model};

/// Load a model file (seeded defaults when no path is given) and compose the
/// prompt for it.
pub fn compose_from_file(path: Option<&Path>) -> Result<(PromptModel, String), AppError> {
    let model = match path {
        Some(path) => load_model(path)?,
        None => PromptModel::default(),
    };
    let prompt = compose(&model);
    Ok((model, prompt))
}

/// Run one extraction against the configured completion endpoint and apply the
/// result to `model`.
///
/// `llm` selects a hosted model from the fixed catalog; the catalog's first
/// entry is used when omitted. The API key is read from the environment at
/// call time.
pub fn extract(model: &mut PromptModel, llm: Option<&str>) -> Result<ExtractOutcome, AppError> {
    let hosted = match llm {
        Some(id) => resolve_model(id)?,
        None => default_model(),
    };
    let client = HttpCompletionClient::from_env()?;
    let extractor = Extractor::new(client);
    extractor.extract(model, hosted.id)
}

/// Copy the rendered prompt to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = ArboardClipboard::new()?;
    clipboard.write_text(text)
}

/// Write a seeded default model file for hand editing.
///
/// Refuses to overwrite an existing file.
pub fn init_model_file(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::config_error(format!(
            "Model file already exists: {}",
            path.display()
        )));
    }
    save_model(path, &PromptModel::default())
}
