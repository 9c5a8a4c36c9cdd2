//! Instruction templates sent to the completion service.
//!
//! Three variants: free-text analysis, evolution-from-topic, and
//! breakdown-from-topic. Each asks for one strict JSON object using the
//! canonical field names the normalizer expects.

use super::model::{InputMode, PromptMode};

/// System message sent with every extraction request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert art director. Always respond with valid JSON only, no markdown code blocks.";

/// Build the user instruction for one extraction.
///
/// `source` is the topic phrase in topic mode or the pasted text in text mode.
pub fn build_instruction(
    mode: PromptMode,
    input_mode: InputMode,
    source: &str,
    section_count: u8,
) -> String {
    match input_mode {
        InputMode::Text => text_analysis_instruction(mode, source, section_count),
        InputMode::Topic => match mode {
            PromptMode::Evolution => evolution_instruction(source, section_count),
            PromptMode::Breakdown => breakdown_instruction(source, section_count),
        },
    }
}

fn text_analysis_instruction(mode: PromptMode, source_text: &str, section_count: u8) -> String {
    let mode_name = match mode {
        PromptMode::Evolution => "EVOLUTION",
        PromptMode::Breakdown => "BREAKDOWN",
    };
    let label_hint = match mode {
        PromptMode::Evolution => "Time Period",
        PromptMode::Breakdown => "Function/Category",
    };

    format!(
        r#"Act as an expert art director and content analyst.
Task: Analyze the provided text below and extract structure for an isometric poster in **{mode_name}** mode.

Input Text:
"""
{source_text}
"""

Output strictly valid JSON with this structure:
{{
  "englishTitle": "Short Uppercase Title based on text content",
  "chineseTitle": "Short Chinese Title based on text content",
  "subtitle": "Bilingual Subtitle summarizing the text",
  "philosophicalMetaphor": "Poetic metaphor based on text's deeper meaning.",
  "eras": [
    {{
      "title": "Section Title extracted from text",
      "label": "{label_hint}",
      "description": "Visual description based on text content.",
      "symbolicElements": "Concrete objects mentioned or implied in text"
    }}
  ]
}}
Create exactly {section_count} key sections. Prioritize the most important content. Return ONLY valid JSON, no markdown."#
    )
}

fn evolution_instruction(topic: &str, section_count: u8) -> String {
    format!(
        r#"Act as an expert art director and historian. Topic: "{topic}".
Task: Break this topic down into an **evolution timeline** for an isometric poster.
Output strictly valid JSON:
{{
  "englishTitle": "Short Uppercase Title",
  "chineseTitle": "Short Chinese Title",
  "subtitle": "Bilingual Subtitle",
  "philosophicalMetaphor": "Poetic metaphor about time/evolution.",
  "eras": [
    {{
      "title": "Era Name",
      "label": "Time Period (e.g. 1900-1950)",
      "description": "Visual description of key events.",
      "symbolicElements": "Concrete objects"
    }}
  ]
}}
Create exactly {section_count} eras. Return ONLY valid JSON, no markdown."#
    )
}

fn breakdown_instruction(topic: &str, section_count: u8) -> String {
    format!(
        r#"Act as an expert technical architect and art director. Topic: "{topic}".
Task: Break this topic down into its **key structural components or functional layers** (Deconstruction/Anatomy) for an isometric poster.
Output strictly valid JSON:
{{
  "englishTitle": "Short Uppercase Title",
  "chineseTitle": "Short Chinese Title",
  "subtitle": "Bilingual Subtitle",
  "philosophicalMetaphor": "Poetic metaphor about structure/function/complexity.",
  "eras": [
    {{
      "title": "Component/Layer Name",
      "label": "Function/Category (e.g. Power, Core, Interface)",
      "description": "Visual description of this part's appearance and role.",
      "symbolicElements": "Concrete objects"
    }}
  ]
}}
Create exactly {section_count} key sections. Return ONLY valid JSON, no markdown."#
    )
}
