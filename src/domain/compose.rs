//! Prompt Composer: deterministic rendering of a [`PromptModel`] into the final
//! natural-language image prompt.
//!
//! Pure function of the model and the static catalogs. No I/O, no randomness;
//! safe to re-run on every field change.

use super::catalog::{resolve_style, structure_description};
use super::model::{PromptMode, PromptModel};

const ISOMETRIC_PERSPECTIVE: &str = "True isometric perspective (2:1 ratio) with precise angles.";
const FLAT_PERSPECTIVE: &str = "STRICTLY flat front-facing 2D elevation view. Pure straight-on \
     90-degree frontal perspective like architectural section drawings or Wes Anderson movie \
     sets. ABSOLUTELY NO angled or 3D perspective, NO tilted view. Camera perpendicular to the \
     cross-section plane.";

/// Replace every case-insensitive occurrence of "isometric" with `replacement`.
///
/// The needle is ASCII, so byte offsets into the lowercased copy line up with
/// the original text.
fn replace_isometric(text: &str, replacement: &str) -> String {
    const NEEDLE: &str = "isometric";
    let haystack = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    while let Some(pos) = haystack[last..].find(NEEDLE) {
        let start = last + pos;
        out.push_str(&text[last..start]);
        out.push_str(replacement);
        last = start + NEEDLE.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Render the full image-generation prompt for the current model state.
pub fn compose(model: &PromptModel) -> String {
    let style = resolve_style(&model.visual_style_id);
    let isometric = model.structure_layout.is_isometric();

    let (style_header, style_description) = if isometric {
        (style.header.to_string(), style.description.to_string())
    } else {
        (replace_isometric(style.header, "FLAT"), replace_isometric(style.description, "flat"))
    };

    let perspective_term = if isometric { "isometric" } else { "flat architectural cross-section" };
    let perspective_description = if isometric { ISOMETRIC_PERSPECTIVE } else { FLAT_PERSPECTIVE };
    let scene_term = if isometric { "ISOMETRIC" } else { "CROSS-SECTION" };
    let text_perspective = if isometric { "isometric" } else { "flat" };

    let (section_prefix, concept_header, journey_line, subject_phrase, focus_phrase) =
        match model.mode {
            PromptMode::Evolution => (
                "ERA",
                "CONCEPT VISUALIZATION - EVOLUTION TIMELINE",
                "The journey shows major eras:",
                "history timeline",
                "evolution",
            ),
            PromptMode::Breakdown => (
                "ZONE",
                "CONCEPT VISUALIZATION - STRUCTURAL BREAKDOWN",
                "The structure displays key functional zones/components:",
                "structural anatomy",
                "composition",
            ),
        };

    let environment_line = match model.mode {
        PromptMode::Evolution => "styles evolving",
        PromptMode::Breakdown => "internal mechanics and connections",
    };
    let palette_line = match model.mode {
        PromptMode::Evolution => "Transitioning from ancient tones to modern palettes.",
        PromptMode::Breakdown => {
            "Distinct color coding for different functional zones to show hierarchy."
        }
    };

    // Sections render 1-based by position; stored ids are display-only and ignored.
    let sections_text = model
        .sections
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            format!(
                "\n{prefix} {n}: {title} ({label})\n{description}\nSymbolic elements: {elements}",
                prefix = section_prefix,
                n = idx + 1,
                title = section.title,
                label = section.label,
                description = section.description,
                elements = section.symbolic_elements,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let full_prompt = format!(
        "Create a highly detailed {perspective_term} illustration of {title_lower} \
         {subject_phrase} in {aspect_ratio} aspect ratio at 4K resolution. This should be an \
         intricate, symbolic, and metaphorical artwork with bilingual title, focusing on the \
         {focus_phrase} of {topic}.\n\
         \n\
         VISUAL STYLE - {style_header}:\n\
         {style_description} Rich intricate architecture and environmental elements. Multiple \
         layers of symbolic meaning and visual metaphors.\n\
         \n\
         {concept_header}:\n\
         Create a SYMBOLIC {scene_term} scene: Central feature: A structure representing \
         \"{title_en}\".\n\
         {journey_line}\n\
         {sections_text}\n\
         \n\
         COMPOSITION - SYMBOLIC STRUCTURE:\n\
         {perspective_description}\n\
         {structure_description}\n\
         Rich environmental details showing {environment_line}.\n\
         Clear visual hierarchy.\n\
         Detailed artworks and symbolic elements appropriate for the style.\n\
         \n\
         COLOR PALETTE - SYMBOLIC COLORS:\n\
         Rich, detailed palette with careful placement.\n\
         {palette_line}\n\
         Accent: Highlights representing the essence of each section.\n\
         \n\
         TYPOGRAPHY - BILINGUAL:\n\
         English title: \"{title_en}\" in matching art font.\n\
         Chinese title: \"{title_cn}\" in matching art font.\n\
         Subtitle: \"{subtitle}\".\n\
         Both titles integrated into the scene.\n\
         Text should maintain {text_perspective} perspective.\n\
         High contrast to ensure readability.\n\
         \n\
         PHILOSOPHICAL ELEMENTS:\n\
         {metaphor}\n\
         This design should showcase SYMBOLIC AND METAPHORICAL ART - with profound layered \
         meaning.",
        title_lower = model.titles.english.to_lowercase(),
        aspect_ratio = model.aspect_ratio.token(),
        topic = model.topic,
        title_en = model.titles.english,
        title_cn = model.titles.chinese,
        subtitle = model.titles.subtitle,
        metaphor = model.philosophical_metaphor,
        structure_description = structure_description(model.structure_layout),
    );

    full_prompt.trim().to_string()
}
