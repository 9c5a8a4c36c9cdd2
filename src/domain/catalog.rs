//! Static catalogs: visual styles, structure layout descriptions, hosted models.
//!
//! All catalogs are fixed at compile time and read-only at runtime. The style
//! header/description phrases are embedded verbatim in the composed prompt.

use super::{AppError, StructureLayout};

/// A selectable visual style for the rendered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Uppercase phrase used in the VISUAL STYLE block heading.
    pub header: &'static str,
    /// Descriptive phrase used verbatim in the VISUAL STYLE block body.
    pub description: &'static str,
}

pub const STYLE_OPTIONS: [StyleOption; 8] = [
    StyleOption {
        id: "pixel",
        label: "16-bit Pixel Art",
        header: "SYMBOLIC METAPHORICAL ISOMETRIC PIXEL ART",
        description: "Ultra-detailed isometric pixel art with symbolic and metaphorical depth. \
                      Extremely fine pixel details with meticulous shading and highlights. \
                      Clean, professional: Profound, symbolic, metaphorical isometric pixel world.",
    },
    StyleOption {
        id: "claymation",
        label: "Claymation Stop Motion",
        header: "STOP-MOTION CLAYMATION DIORAMA",
        description: "Handcrafted claymation aesthetic with visible fingerprint textures and \
                      imperfections. Soft, studio lighting simulating a physical miniature set. \
                      Chunky, tactile forms with a playful, handmade feel. Shallow depth of field \
                      to enhance the scale.",
    },
    StyleOption {
        id: "voxel",
        label: "Voxel Block Art",
        header: "3D VOXEL ART DIORAMA",
        description: "Digital blocky art style similar to MagicaVoxel or Minecraft. Constructed \
                      from 3D cubes with vibrant global illumination and soft shadows. Playful, \
                      digital toy aesthetic with distinct cubic geometry and clean surfaces.",
    },
    StyleOption {
        id: "steampunk",
        label: "Steampunk Machinery",
        header: "INTRICATE STEAMPUNK MACHINERY",
        description: "Victorian industrial aesthetic with brass gears, copper pipes, and steam \
                      engines. Intricate mechanical details, sepia and bronze color palette, \
                      vintage scientific instrument look with glass and metal textures.",
    },
    StyleOption {
        id: "sketch",
        label: "Architecture Sketch",
        header: "ARCHITECTURAL BLUEPRINT SKETCH STYLE",
        description: "Detailed architectural line drawing with pencil textures and blueprint \
                      aesthetics. Precise isometric lines, technical annotations, and rough \
                      sketch shading. Professional architect portfolio style, monochrome with \
                      subtle accent colors.",
    },
    StyleOption {
        id: "watercolor",
        label: "Watercolor Drawing",
        header: "ARTISTIC WATERCOLOR ILLUSTRATION",
        description: "Soft, fluid watercolor painting style with visible paper texture and ink \
                      wash effects. Dreamy, artistic atmosphere with gentle color bleeding and \
                      organic edges. Hand-painted aesthetic with wet-on-wet techniques.",
    },
    StyleOption {
        id: "c4d",
        label: "Cute 3D C4D",
        header: "3D C4D RENDER STYLE",
        description: "Cute, plastic-looking 3D render style similar to Cinema 4D or Blender. \
                      Soft global illumination, rounded edges, vibrant materials, and toy-like \
                      aesthetics. Playful, modern 3D design with clay or matte finishes.",
    },
    StyleOption {
        id: "dollhouse",
        label: "Miniature Dollhouse",
        header: "COZY MINIATURE DOLLHOUSE AESTHETIC",
        description: "Warm, nostalgic dollhouse aesthetic with rich interior details. Miniature \
                      furniture, cozy ambient lighting, pastel and earthy color palette. Each \
                      room tells a story with tiny decorative objects, potted plants, and \
                      lived-in details. Soft diffused studio lighting, rich material textures, \
                      handcrafted miniature model feel.",
    },
];

/// Resolve a style by id, falling back to the first catalog entry when unknown.
///
/// Composition never errors on a bad style id.
pub fn resolve_style(id: &str) -> &'static StyleOption {
    STYLE_OPTIONS.iter().find(|style| style.id == id).unwrap_or(&STYLE_OPTIONS[0])
}

/// Compositional description for a structure layout, embedded in the
/// COMPOSITION block.
pub fn structure_description(layout: StructureLayout) -> &'static str {
    match layout {
        StructureLayout::Layered => {
            "Museum/gallery structure with stacked interconnected wings representing different \
             eras/sections ascending upwards."
        }
        StructureLayout::Map => {
            "Winding path connecting different distinct zones in a continuous journey."
        }
        StructureLayout::Hex => {
            "Interconnected hexagonal cells forming a hive of concepts, each cell representing \
             a distinct component."
        }
        StructureLayout::Dollhouse => {
            "STRICTLY 2D flat front-facing cross-section view (dollhouse cutaway style). \
             Side-view revealing multiple rooms and internal layers. ABSOLUTELY NO angled \
             or 3D perspective. Pure straight-on 90-degree frontal view like a Wes Anderson \
             movie set or architectural elevation drawing."
        }
    }
}

/// A hosted completion model the extractor can delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    /// OpenRouter model identifier.
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
}

pub const MODEL_OPTIONS: [ModelOption; 2] = [
    ModelOption { id: "google/gemini-2.0-flash-001", name: "Gemini 2.0 Flash", provider: "Google" },
    ModelOption {
        id: "google/gemini-2.5-pro-preview-03-25",
        name: "Gemini 2.5 Pro",
        provider: "Google",
    },
];

/// Default hosted model used when the caller does not pick one.
pub fn default_model() -> &'static ModelOption {
    &MODEL_OPTIONS[0]
}

/// Resolve a hosted model by exact identifier.
pub fn resolve_model(id: &str) -> Result<&'static ModelOption, AppError> {
    MODEL_OPTIONS.iter().find(|model| model.id == id).ok_or_else(|| AppError::ModelNotFound {
        name: id.to_string(),
        available: MODEL_OPTIONS.iter().map(|m| m.id).collect::<Vec<_>>().join(", "),
    })
}
