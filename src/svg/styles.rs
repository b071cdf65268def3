//! Text and stroke constants for the seal renderer.

/// Fixed text sizes used in the renderer (in px)
pub struct TextSizes;

impl TextSizes {
    /// Band letters, name rings and heptagon edge labels
    pub const DEFAULT: f64 = 16.0;
    /// The central Tau glyph
    pub const CENTER_GLYPH: f64 = 40.0;
}

/// Stroke widths per element type (in px)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const OUTLINE: f64 = 1.0;
}

/// Marker dimensions drawn at the innermost heptagon's vertices (in px)
pub struct VertexMarker;

impl VertexMarker {
    pub const DOT_RADIUS: f64 = 5.0;
    pub const CROSS_ARM: f64 = 5.0;
}

/// Vertical shift applied to all text elements for font-agnostic centering.
/// Using 0.35em ensures it scales with font size.
pub const TEXT_BASELINE_SHIFT: &str = "0.35em";
