//! sigillum - Render the Sigillum Dei Aemeth seal to SVG and PNG
//!
//! This library composes the "Seal of God's Truth" - the lettered outer
//! band, the unicursal pentagram, the central Tau with its name rings, and
//! the three nested heptagons annotated with archangel names - as a fixed
//! 800×800 SVG document, and optionally rasterizes it to PNG.
//!
//! # Example
//!
//! ```rust
//! let svg = sigillum::render_to_svg(None);
//! assert!(svg.contains("</svg>"));
//!
//! let png = sigillum::render_to_png(None).unwrap();
//! assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
//! ```
//!
//! The geometry is fixed; only the palette, the font family and background
//! transparency are adjustable. For palette control use
//! [`svg::render_seal_svg`] with a custom [`SealColors`].

pub mod geometry;
pub mod raster;
pub mod svg;

pub use raster::{render_png_bytes, RenderError};
pub use svg::{render_seal_svg, SealColors};

/// Configuration options for rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Font family recorded on every text element. Default: "Inter"
    pub font: String,
    /// Skip the background rect, leaving the canvas transparent. Default: false
    pub transparent: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font: "Inter".to_string(),
            transparent: false,
        }
    }
}

/// Render the seal to an SVG string using the default palette.
///
/// # Example
/// ```rust
/// let svg = sigillum::render_to_svg(None);
/// assert!(svg.starts_with("<?xml"));
/// ```
pub fn render_to_svg(options: Option<RenderOptions>) -> String {
    let opts = options.unwrap_or_default();
    render_seal_svg(&SealColors::default(), &opts.font, opts.transparent)
}

/// Render the seal to PNG bytes (800×800, RGBA8).
///
/// # Example
/// ```rust
/// let png = sigillum::render_to_png(None).unwrap();
/// assert!(!png.is_empty());
/// ```
pub fn render_to_png(options: Option<RenderOptions>) -> Result<Vec<u8>, RenderError> {
    let svg = render_to_svg(options);
    render_png_bytes(svg.as_bytes())
}
