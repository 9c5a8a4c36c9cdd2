//! Interactive form: the terminal analog of the original editing panel.

use dialoguer::{Confirm, Input, Select};

use crate::domain::{
    AppError, AspectRatio, InputMode, MODEL_OPTIONS, PromptMode, PromptModel, SECTION_COUNT_MAX,
    SECTION_COUNT_MIN, STYLE_OPTIONS, StructureLayout, clamp_section_count, default_model,
};

/// Choices gathered by the wizard before composing.
#[derive(Debug, Clone)]
pub struct WizardOutcome {
    pub model: PromptModel,
    /// Hosted model id to extract with, or `None` to keep seeded defaults.
    pub extract_with: Option<String>,
}

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::config_error(format!("Prompt input failed: {e}"))
}

/// Walk the user through mode, topic, style, layout, ratio, and section count.
pub fn run_wizard() -> Result<WizardOutcome, AppError> {
    let mode_idx = Select::new()
        .with_prompt("Prompt mode")
        .items(&["Evolution (history timeline)", "Breakdown (structural anatomy)"])
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    let mode = if mode_idx == 0 { PromptMode::Evolution } else { PromptMode::Breakdown };

    let mut model = match mode {
        PromptMode::Evolution => PromptModel::evolution_defaults(),
        PromptMode::Breakdown => PromptModel::breakdown_defaults(),
    };
    model.input_mode = InputMode::Topic;

    let topic: String = Input::new()
        .with_prompt("Topic")
        .default(model.topic.clone())
        .interact_text()
        .map_err(prompt_error)?;
    model.topic = topic;

    let style_labels: Vec<&str> = STYLE_OPTIONS.iter().map(|style| style.label).collect();
    let style_idx = Select::new()
        .with_prompt("Visual style")
        .items(&style_labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    model.visual_style_id = STYLE_OPTIONS[style_idx].id.to_string();

    let layout_labels: Vec<&str> =
        StructureLayout::ALL.iter().map(|layout| layout.as_str()).collect();
    let layout_idx = Select::new()
        .with_prompt("Structure layout")
        .items(&layout_labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    model.structure_layout = StructureLayout::ALL[layout_idx];

    let ratio_labels: Vec<&str> = AspectRatio::ALL.iter().map(|ratio| ratio.label()).collect();
    let ratio_idx = Select::new()
        .with_prompt("Aspect ratio")
        .items(&ratio_labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    model.aspect_ratio = AspectRatio::ALL[ratio_idx];

    let count: u8 = Input::new()
        .with_prompt(format!("Section count ({SECTION_COUNT_MIN}-{SECTION_COUNT_MAX})"))
        .default(model.section_count)
        .interact_text()
        .map_err(prompt_error)?;
    model.section_count = clamp_section_count(count);

    let extract = Confirm::new()
        .with_prompt("Ask the AI to research this topic now?")
        .default(true)
        .interact()
        .map_err(prompt_error)?;

    let extract_with = if extract {
        let llm_labels: Vec<String> =
            MODEL_OPTIONS.iter().map(|m| format!("{} ({})", m.name, m.provider)).collect();
        let llm_idx = Select::new()
            .with_prompt("AI model")
            .items(&llm_labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        Some(MODEL_OPTIONS.get(llm_idx).unwrap_or(default_model()).id.to_string())
    } else {
        None
    };

    Ok(WizardOutcome { model, extract_with })
}
