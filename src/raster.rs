//! SVG to PNG rasterization.
//!
//! The composed SVG document is the drawing surface; this module turns it
//! into pixels: usvg parse, resvg render into a tiny-skia pixmap, RGBA8 PNG
//! encode. Text is shaped against the system font database.

use resvg::usvg;
use std::sync::Arc;
use thiserror::Error;
use tiny_skia::Pixmap;

/// Errors surfaced while turning the composed SVG into PNG bytes.
///
/// File IO stays with the caller; this layer only composes pixels.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

/// Rasterize an SVG document and encode it as an RGBA8 PNG.
///
/// The pixmap takes its dimensions from the document's own width/height, so
/// the seal renders at its native 800×800.
pub fn render_png_bytes(svg_data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();

    let options = usvg::Options {
        fontdb: Arc::new(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg_data, &options)
        .map_err(|e| RenderError::SvgParse(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap =
        Pixmap::new(size.width(), size.height()).ok_or(RenderError::PixmapAllocation)?;
    resvg::render(&tree, usvg::Transform::identity(), &mut pixmap.as_mut());

    encode_png(&pixmap)
}

/// Encode a pixmap as an RGBA8 PNG.
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    // tiny-skia stores premultiplied pixels; PNG wants straight alpha
    let mut data = Vec::with_capacity(pixmap.width() as usize * pixmap.height() as usize * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut buf = std::io::Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_svg_is_reported_as_parse_error() {
        let err = render_png_bytes(b"<svg").unwrap_err();
        assert!(matches!(err, RenderError::SvgParse(_)));
        assert!(err.to_string().starts_with("SVG parse error"));
    }

    #[test]
    fn document_renders_at_its_own_size() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="8" viewBox="0 0 12 8"><rect width="100%" height="100%" fill="#008000"/></svg>"##;
        let bytes = render_png_bytes(svg.as_bytes()).unwrap();

        let decoder = png::Decoder::new(&bytes[..]);
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 12);
        assert_eq!(reader.info().height, 8);
        assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    }

    #[test]
    fn opaque_fill_survives_the_round_trip() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4" viewBox="0 0 4 4"><rect width="100%" height="100%" fill="#008000"/></svg>"##;
        let bytes = render_png_bytes(svg.as_bytes()).unwrap();

        let decoder = png::Decoder::new(&bytes[..]);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        let pixels = &buf[..info.buffer_size()];

        // Every pixel is the fill color, fully opaque
        for px in pixels.chunks_exact(4) {
            assert_eq!(px, [0x00, 0x80, 0x00, 0xFF]);
        }
    }
}
