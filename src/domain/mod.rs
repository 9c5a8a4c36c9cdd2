pub mod catalog;
pub mod compose;
pub mod error;
pub mod instructions;
pub mod model;
pub mod normalize;

pub use catalog::{
    MODEL_OPTIONS, ModelOption, STYLE_OPTIONS, StyleOption, default_model, resolve_model,
    resolve_style, structure_description,
};
pub use compose::compose;
pub use error::AppError;
pub use instructions::{SYSTEM_INSTRUCTION, build_instruction};
pub use model::{
    AspectRatio, InputMode, PromptMode, PromptModel, SECTION_COUNT_MAX, SECTION_COUNT_MIN, Section,
    StructureLayout, StructureUpdate, Titles, clamp_section_count,
};
pub use normalize::normalize_reply;
