use serde::{Deserialize, Serialize};

use super::AppError;

/// Valid range for the requested section count.
pub const SECTION_COUNT_MIN: u8 = 1;
pub const SECTION_COUNT_MAX: u8 = 6;

/// Clamp a requested section count into the supported range.
pub fn clamp_section_count(count: u8) -> u8 {
    count.clamp(SECTION_COUNT_MIN, SECTION_COUNT_MAX)
}

/// What kind of concept the sections describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// Sections are chronological eras of the topic's history.
    Evolution,
    /// Sections are structural or functional components of the topic.
    Breakdown,
}

impl PromptMode {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "evolution" => Ok(PromptMode::Evolution),
            "breakdown" => Ok(PromptMode::Breakdown),
            other => Err(AppError::config_error(format!(
                "Invalid mode '{other}': must be 'evolution' or 'breakdown'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PromptMode::Evolution => "evolution",
            PromptMode::Breakdown => "breakdown",
        }
    }
}

/// Which input the extractor reads structure from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Derive structure from a short topic phrase.
    Topic,
    /// Derive structure from pasted free text.
    Text,
}

/// Compositional metaphor used to arrange sections in the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureLayout {
    /// Stacked interconnected wings ascending upwards.
    Layered,
    /// Winding path connecting distinct zones.
    Map,
    /// Hive of interconnected hexagonal cells.
    Hex,
    /// Flat dollhouse cutaway cross-section.
    Dollhouse,
}

impl StructureLayout {
    pub const ALL: [StructureLayout; 4] = [
        StructureLayout::Layered,
        StructureLayout::Map,
        StructureLayout::Hex,
        StructureLayout::Dollhouse,
    ];

    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "layered" => Ok(StructureLayout::Layered),
            "map" => Ok(StructureLayout::Map),
            "hex" => Ok(StructureLayout::Hex),
            "dollhouse" => Ok(StructureLayout::Dollhouse),
            other => Err(AppError::config_error(format!(
                "Invalid structure layout '{other}': must be one of layered, map, hex, dollhouse"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StructureLayout::Layered => "layered",
            StructureLayout::Map => "map",
            StructureLayout::Hex => "hex",
            StructureLayout::Dollhouse => "dollhouse",
        }
    }

    /// Dollhouse forces a flat cross-section rendering; everything else is isometric.
    pub fn is_isometric(self) -> bool {
        !matches!(self, StructureLayout::Dollhouse)
    }
}

/// Canvas proportions for the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "9:16")]
    Portrait9x16,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "16:9")]
    Landscape16x9,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Portrait3x4,
        AspectRatio::Portrait9x16,
        AspectRatio::Landscape4x3,
        AspectRatio::Landscape16x9,
        AspectRatio::Square,
    ];

    pub fn parse(token: &str) -> Result<Self, AppError> {
        match token {
            "3:4" => Ok(AspectRatio::Portrait3x4),
            "9:16" => Ok(AspectRatio::Portrait9x16),
            "4:3" => Ok(AspectRatio::Landscape4x3),
            "16:9" => Ok(AspectRatio::Landscape16x9),
            "1:1" => Ok(AspectRatio::Square),
            other => Err(AppError::config_error(format!(
                "Invalid aspect ratio '{other}': must be one of 3:4, 9:16, 4:3, 16:9, 1:1"
            ))),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Square => "1:1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Portrait3x4 => "Portrait (3:4)",
            AspectRatio::Portrait9x16 => "Portrait (9:16)",
            AspectRatio::Landscape4x3 => "Landscape (4:3)",
            AspectRatio::Landscape16x9 => "Landscape (16:9)",
            AspectRatio::Square => "Square (1:1)",
        }
    }
}

/// Bilingual title bundle rendered into the typography block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Titles {
    pub english: String,
    pub chinese: String,
    pub subtitle: String,
}

/// One labeled segment of the generated visual concept.
///
/// Vocabulary differs by mode (era vs zone) but the shape is identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based sequence position, regenerated on every extraction.
    pub id: u32,
    pub title: String,
    /// Time period (evolution) or function/category (breakdown).
    pub label: String,
    pub description: String,
    pub symbolic_elements: String,
}

/// Normalized extraction result, ready to apply to a [`PromptModel`].
///
/// Carries everything one successful extraction replaces: the title bundle,
/// an optional metaphor, and the renumbered section list.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureUpdate {
    pub titles: Titles,
    pub philosophical_metaphor: Option<String>,
    pub sections: Vec<Section>,
}

/// The single mutable state bag driving both extraction and composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptModel {
    pub mode: PromptMode,
    pub input_mode: InputMode,
    pub topic: String,
    pub source_text: String,
    pub structure_layout: StructureLayout,
    pub aspect_ratio: AspectRatio,
    pub visual_style_id: String,
    pub section_count: u8,
    pub titles: Titles,
    pub philosophical_metaphor: String,
    pub sections: Vec<Section>,
}

impl Default for PromptModel {
    fn default() -> Self {
        Self::evolution_defaults()
    }
}

impl PromptModel {
    /// Seeded defaults for evolution mode: the communication-history sample.
    pub fn evolution_defaults() -> Self {
        Self {
            mode: PromptMode::Evolution,
            input_mode: InputMode::Topic,
            topic: "History of Communication".to_string(),
            source_text: String::new(),
            structure_layout: StructureLayout::Layered,
            aspect_ratio: AspectRatio::Portrait3x4,
            visual_style_id: "pixel".to_string(),
            section_count: 3,
            titles: Titles {
                english: "COMMUNICATION EVOLUTION".to_string(),
                chinese: "通信演化史".to_string(),
                subtitle: "From Smoke Signals to Quantum Internet / 从狼烟到量子网络".to_string(),
            },
            philosophical_metaphor: "Visual metaphors for this topic as humanity's mirror. \
                                     Symbolic representation of the tension between tradition and innovation."
                .to_string(),
            sections: vec![
                Section {
                    id: 1,
                    title: "ANCIENT FOUNDATIONS".to_string(),
                    label: "Prehistory - 1400 CE".to_string(),
                    description: "Cave paintings, smoke signals, courier pigeons, stone tablets"
                        .to_string(),
                    symbolic_elements: "Cave walls, fire pits, scrolls".to_string(),
                },
                Section {
                    id: 2,
                    title: "PRINTING REVOLUTION".to_string(),
                    label: "1440 - 1800".to_string(),
                    description: "Gutenberg press, newspapers, mass literacy spreading ideas"
                        .to_string(),
                    symbolic_elements: "Printing press, ink jars, books".to_string(),
                },
                Section {
                    id: 3,
                    title: "DIGITAL ERA".to_string(),
                    label: "1980 - Future".to_string(),
                    description: "Smartphones, global fiber optics, neural link interfaces"
                        .to_string(),
                    symbolic_elements: "Fiber optic cables, holograms, satellites".to_string(),
                },
            ],
        }
    }

    /// Seeded defaults for breakdown mode: the data-center anatomy sample.
    pub fn breakdown_defaults() -> Self {
        Self {
            mode: PromptMode::Breakdown,
            topic: "Enterprise Data Center".to_string(),
            titles: Titles {
                english: "DATA CENTER ANATOMY".to_string(),
                chinese: "数据中心解构".to_string(),
                subtitle: "Core Architecture and Infrastructure / 核心架构与基础设施".to_string(),
            },
            philosophical_metaphor: "Visual metaphor of a digital brain pulsating with information. \
                                     The physical manifestation of the virtual cloud."
                .to_string(),
            sections: vec![
                Section {
                    id: 1,
                    title: "POWER INFRASTRUCTURE".to_string(),
                    label: "Power".to_string(),
                    description: "Generators, UPS banks, and thick cable trunks feeding the facility"
                        .to_string(),
                    symbolic_elements: "Transformers, battery racks, cable trays".to_string(),
                },
                Section {
                    id: 2,
                    title: "COMPUTE CORE".to_string(),
                    label: "Core".to_string(),
                    description: "Rows of server racks with blinking status lights and cooling aisles"
                        .to_string(),
                    symbolic_elements: "Server racks, LED arrays, cold aisles".to_string(),
                },
                Section {
                    id: 3,
                    title: "NETWORK FABRIC".to_string(),
                    label: "Interface".to_string(),
                    description: "Fiber bundles and switch clusters tying the compute floor to the outside world"
                        .to_string(),
                    symbolic_elements: "Fiber strands, patch panels, satellite uplinks".to_string(),
                },
            ],
            ..Self::evolution_defaults()
        }
    }

    /// Apply a normalized extraction fragment in one step.
    ///
    /// Called only after normalization succeeded, so a half-parsed reply can
    /// never leave the model partially updated.
    pub fn apply_update(&mut self, update: StructureUpdate) {
        self.titles = update.titles;
        if let Some(metaphor) = update.philosophical_metaphor {
            self.philosophical_metaphor = metaphor;
        }
        self.section_count = clamp_section_count(update.sections.len().min(u8::MAX as usize) as u8);
        self.sections = update.sections;
    }

    /// Switch prompt mode, resetting topic, titles, metaphor, and sections to the
    /// target mode's seeded defaults. Layout, ratio, style, and input mode are kept.
    ///
    /// Sections are always replaced so a stale era list never leaks into a
    /// breakdown prompt (and vice versa).
    pub fn switch_mode(&mut self, new_mode: PromptMode) {
        if self.mode == new_mode {
            return;
        }
        let defaults = match new_mode {
            PromptMode::Evolution => Self::evolution_defaults(),
            PromptMode::Breakdown => Self::breakdown_defaults(),
        };
        self.mode = new_mode;
        if self.input_mode == InputMode::Topic {
            self.topic = defaults.topic;
        }
        self.titles = defaults.titles;
        self.philosophical_metaphor = defaults.philosophical_metaphor;
        self.sections = defaults.sections;
    }
}
