//! SVG renderer - composes the seal into an SVG string.
//!
//! Pure string building, no DOM manipulation.

mod seal;
mod styles;
mod theme;

pub use seal::{render_seal_svg, CANVAS_SIZE};
pub use theme::SealColors;
