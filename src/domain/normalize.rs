//! Reply normalization: one adapter mapping the completion service's noisy
//! output onto the canonical [`StructureUpdate`] shape.
//!
//! Hosted models routinely wrap JSON in code fences, prepend prose, return a
//! top-level array, or drift on field names. All of that tolerance lives here
//! and nowhere else; the rest of the crate only sees the canonical shape.

use serde_json::Value;

use super::AppError;
use super::model::{Section, StructureUpdate, Titles};

/// Normalize a raw completion reply into a structure update.
///
/// Fails with [`AppError::MalformedResponse`] naming the violated precondition;
/// callers must leave their model untouched on failure.
pub fn normalize_reply(raw: &str) -> Result<StructureUpdate, AppError> {
    let cleaned = strip_noise(raw);

    let parsed: Value = serde_json::from_str(&cleaned).map_err(|e| {
        AppError::MalformedResponse(format!("reply is not valid JSON: {e}"))
    })?;

    // A top-level array is tolerated; take the first element.
    let object = match parsed {
        Value::Array(mut items) if !items.is_empty() => items.remove(0),
        other => other,
    };

    let object = object
        .as_object()
        .ok_or_else(|| AppError::MalformedResponse("reply is not a JSON object".to_string()))?;

    let english = required_text(object.get("englishTitle"), "englishTitle")?;
    let chinese = required_text(object.get("chineseTitle"), "chineseTitle")?;
    let subtitle = optional_text(object.get("subtitle")).unwrap_or_default();
    let philosophical_metaphor = optional_text(object.get("philosophicalMetaphor"));

    let eras = object
        .get("eras")
        .or_else(|| object.get("sections"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if eras.is_empty() {
        return Err(AppError::MalformedResponse(
            "reply contains no sections (empty or missing 'eras' array)".to_string(),
        ));
    }

    // Renumber 1..N by position, discarding any id the model supplied.
    let sections = eras
        .iter()
        .enumerate()
        .map(|(idx, era)| Section {
            id: (idx + 1) as u32,
            title: optional_text(era.get("title"))
                .unwrap_or_else(|| format!("Section {}", idx + 1)),
            label: aliased_text(era, &["label", "period"]),
            description: aliased_text(era, &["description", "desc"]),
            symbolic_elements: aliased_text(era, &["symbolicElements", "elements"]),
        })
        .collect();

    Ok(StructureUpdate {
        titles: Titles { english, chinese, subtitle },
        philosophical_metaphor,
        sections,
    })
}

/// Strip code fences and blank lines, then slice from the first `{` to the
/// last `}` to drop any surrounding prose.
fn strip_noise(raw: &str) -> String {
    let without_fences = raw.replace("```json", "").replace("```", "");
    let without_blank_lines = without_fences
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let trimmed = without_blank_lines.trim();

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => trimmed[start..=end].to_string(),
        _ => trimmed.to_string(),
    }
}

fn required_text(value: Option<&Value>, field: &str) -> Result<String, AppError> {
    match optional_text(value) {
        Some(text) => Ok(text),
        None => Err(AppError::MalformedResponse(format!(
            "missing required field '{field}'"
        ))),
    }
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty()).map(ToOwned::to_owned)
}

fn aliased_text(era: &Value, names: &[&str]) -> String {
    names.iter().find_map(|name| optional_text(era.get(*name))).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = r#"{
        "englishTitle": "COFFEE EVOLUTION",
        "chineseTitle": "咖啡演化史",
        "subtitle": "From Bean to Brew / 从豆到杯",
        "philosophicalMetaphor": "A dark mirror of human restlessness.",
        "eras": [
            {"title": "DISCOVERY", "label": "850 - 1500", "description": "Goat herders and monasteries", "symbolicElements": "Goats, red berries"},
            {"title": "TRADE ROUTES", "label": "1500 - 1900", "description": "Ships and ports", "symbolicElements": "Sailing ships, sacks"},
            {"title": "ESPRESSO AGE", "label": "1900 - Now", "description": "Machines and cafes", "symbolicElements": "Chrome machines, cups"}
        ]
    }"#;

    #[test]
    fn canonical_reply_normalizes() {
        let update = normalize_reply(CANONICAL).unwrap();
        assert_eq!(update.titles.english, "COFFEE EVOLUTION");
        assert_eq!(update.titles.chinese, "咖啡演化史");
        assert_eq!(update.philosophical_metaphor.as_deref(), Some("A dark mirror of human restlessness."));
        assert_eq!(update.sections.len(), 3);
        assert_eq!(update.sections[0].title, "DISCOVERY");
        assert_eq!(update.sections[2].label, "1900 - Now");
    }

    #[test]
    fn sections_are_renumbered_by_position() {
        let update = normalize_reply(CANONICAL).unwrap();
        let ids: Vec<u32> = update.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn code_fences_and_prose_are_stripped() {
        let noisy = format!("Sure! Here is the JSON you asked for:\n```json\n{CANONICAL}\n```\nHope this helps.");
        let update = normalize_reply(&noisy).unwrap();
        assert_eq!(update.sections.len(), 3);
    }

    #[test]
    fn blank_lines_inside_payload_are_tolerated() {
        let gappy = CANONICAL.replace("\"eras\"", "\n\n\"eras\"");
        assert!(normalize_reply(&gappy).is_ok());
    }

    #[test]
    fn top_level_array_takes_first_element() {
        let wrapped = format!("[{CANONICAL}]");
        let update = normalize_reply(&wrapped).unwrap();
        assert_eq!(update.titles.english, "COFFEE EVOLUTION");
    }

    #[test]
    fn alias_field_names_normalize_to_canonical_shape() {
        let aliased = r#"{
            "englishTitle": "COFFEE EVOLUTION",
            "chineseTitle": "咖啡演化史",
            "sections": [
                {"title": "DISCOVERY", "period": "850 - 1500", "desc": "Goat herders", "elements": "Goats, red berries"}
            ]
        }"#;
        let update = normalize_reply(aliased).unwrap();
        let section = &update.sections[0];
        assert_eq!(section.label, "850 - 1500");
        assert_eq!(section.description, "Goat herders");
        assert_eq!(section.symbolic_elements, "Goats, red berries");
    }

    #[test]
    fn alias_and_canonical_fields_produce_identical_sections() {
        let canonical = normalize_reply(
            r#"{"englishTitle": "T", "chineseTitle": "题",
                "eras": [{"title": "A", "label": "L", "description": "D", "symbolicElements": "E"}]}"#,
        )
        .unwrap();
        let aliased = normalize_reply(
            r#"{"englishTitle": "T", "chineseTitle": "题",
                "sections": [{"title": "A", "period": "L", "desc": "D", "elements": "E"}]}"#,
        )
        .unwrap();
        assert_eq!(canonical.sections, aliased.sections);
    }

    #[test]
    fn missing_english_title_is_rejected() {
        let reply = r#"{"chineseTitle": "题", "eras": [{"title": "A"}]}"#;
        let err = normalize_reply(reply).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
        assert!(err.to_string().contains("englishTitle"));
    }

    #[test]
    fn empty_era_list_is_rejected() {
        let reply = r#"{"englishTitle": "T", "chineseTitle": "题", "eras": []}"#;
        let err = normalize_reply(reply).unwrap_err();
        assert!(err.to_string().contains("no sections"));
    }

    #[test]
    fn non_json_reply_is_rejected() {
        let err = normalize_reply("I could not produce JSON today.").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn missing_section_fields_default_to_empty_or_positional_title() {
        let reply = r#"{"englishTitle": "T", "chineseTitle": "题", "eras": [{}, {"title": "B"}]}"#;
        let update = normalize_reply(reply).unwrap();
        assert_eq!(update.sections[0].title, "Section 1");
        assert_eq!(update.sections[0].label, "");
        assert_eq!(update.sections[1].title, "B");
    }
}
