//! Seal palette - serde-backed so custom palettes load from JSON.
//!
//! Colors are written into the SVG as literal attribute values rather than
//! CSS variables, so the same document renders identically in a browser and
//! through the resvg rasterizer.

use serde::{Deserialize, Serialize};

/// Seal color configuration.
///
/// Defaults reproduce the traditional rendition: white figures on a green
/// ground, a red pentagram, and blue/yellow heptagons. Every field has a
/// default, so a partial JSON palette overrides only the fields it names:
///
/// ```rust
/// use sigillum::svg::SealColors;
///
/// let colors = SealColors::from_json(r##"{"background": "#1A1A2E"}"##).unwrap();
/// assert_eq!(colors.background, "#1A1A2E");
/// assert_eq!(colors.pentagram, "#FF0000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SealColors {
    /// Canvas background
    pub background: String,
    /// Band circles, letters, apex cross and center glyph
    pub outline: String,
    /// The unicursal five-pointed star and the name rings around the Tau
    pub pentagram: String,
    /// Outer, middle and inner heptagon strokes, largest first
    pub heptagons: [String; 3],
    /// Vertex dots and crosses on the innermost heptagon
    pub marker: String,
}

impl Default for SealColors {
    fn default() -> Self {
        Self {
            background: "#008000".to_string(),
            outline: "#FFFFFF".to_string(),
            pentagram: "#FF0000".to_string(),
            heptagons: [
                "#0000FF".to_string(),
                "#FFFF00".to_string(),
                "#FFFF00".to_string(),
            ],
            marker: "#000000".to_string(),
        }
    }
}

impl SealColors {
    /// Parse a palette from JSON, filling unnamed fields with the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
