//! The Sigillum Dei Aemeth drawn as a fixed sequence of SVG primitives.
//!
//! The seal is composed back-to-front in the traditional order: band
//! circles, the 72-letter ring, the apex cross, the pentagram, the central
//! Tau with its name rings, and finally the three nested heptagons with
//! their archangel labels and vertex markers. All positions derive from
//! angle-to-coordinate conversion around the canvas center.

use super::styles::{StrokeWidths, TextSizes, VertexMarker, TEXT_BASELINE_SHIFT};
use super::theme::SealColors;
use crate::geometry::{midpoint, polar, ring_points, segment_angle, Point};

/// Canvas edge length in px
pub const CANVAS_SIZE: f64 = 800.0;

const CENTER: Point = Point { x: 400.0, y: 400.0 };

/// Outer and inner band circle radii (diameters 700 and 640)
const BAND_RADII: [f64; 2] = [350.0, 320.0];
/// The letter ring sits on the midline of the band
const BAND_TEXT_RADIUS: f64 = 335.0;

/// The 72 Shemhamphorasch letters written around the band, one every 5 degrees
const BAND_LETTERS: &str = "htoexorabaslayqciystalgaaonosvlarycekspfyomeneauarelatedatononaoylepotma";

/// Apex cross segments at the top of the band: vertical bar, then crossbar
const APEX_CROSS: [(f64, f64, f64, f64); 2] = [
    (400.0, 50.0, 400.0, 70.0),
    (390.0, 60.0, 410.0, 60.0),
];

/// Pentagram vertex angles in degrees on the inner band circle
const PENTAGRAM_ANGLES: [f64; 5] = [90.0, 162.0, 234.0, 306.0, 18.0];
const PENTAGRAM_RADIUS: f64 = 320.0;
/// Vertex visiting order producing the single unicursal stroke
const PENTAGRAM_PATH: [usize; 6] = [0, 2, 4, 1, 3, 0];

/// The central Tau glyph
const CENTER_GLYPH: &str = "T";

/// Letters ringing the Tau, and their companion pairs one ring further out
const CENTER_NAMES: [&str; 5] = ["E", "L", "E", "L", "Y"];
const CENTER_PAIRS: [&str; 5] = ["lx", "al", "a", "c", "to"];
const NAME_RING_RADIUS: f64 = 60.0;
const PAIR_RING_RADIUS: f64 = 80.0;
/// Both name rings start at the bottom of the canvas and step by 72 degrees
const NAME_RING_START: f64 = 90.0;

/// Nested heptagon radii, largest first
const HEPTAGON_RADII: [f64; 3] = [120.0, 100.0, 80.0];
const HEPTAGON_SIDES: usize = 7;

/// Archangel names written along the outer heptagon's edges
const ANGELS: [&str; 7] = [
    "Zadkiel", "Samael", "Zfadkiel", "Raphael", "Anael", "Michael", "Gabriel",
];

/// Render the seal as a self-contained SVG document.
///
/// The draw sequence is fixed and deterministic: rendering twice yields
/// byte-identical output. `transparent` skips the background rect.
pub fn render_seal_svg(colors: &SealColors, font: &str, transparent: bool) -> String {
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
"#,
        size = fmt_num(CANVAS_SIZE)
    ));
    if !transparent {
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            colors.background
        ));
        svg.push('\n');
    }

    draw_band_circles(&mut svg, colors);
    draw_band_letters(&mut svg, colors, font);
    draw_apex_cross(&mut svg, colors);
    draw_pentagram(&mut svg, colors);
    draw_center_glyph(&mut svg, colors, font);
    draw_name_rings(&mut svg, colors, font);
    draw_heptagons(&mut svg, colors, font);

    svg.push_str("</svg>\n");
    svg
}

// ============================================================================
// Draw passes, in seal order
// ============================================================================

fn draw_band_circles(svg: &mut String, colors: &SealColors) {
    for radius in BAND_RADII {
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(CENTER.x),
            fmt_num(CENTER.y),
            fmt_num(radius),
            colors.outline,
            StrokeWidths::OUTLINE
        ));
        svg.push('\n');
    }
}

fn draw_band_letters(svg: &mut String, colors: &SealColors, font: &str) {
    let count = BAND_LETTERS.chars().count();
    let step = 360.0 / count as f64;
    let positions = ring_points(CENTER, BAND_TEXT_RADIUS, count, 0.0);

    for (i, letter) in BAND_LETTERS.chars().enumerate() {
        // Each glyph is rotated by its own placement angle so the ring of
        // letters follows the band
        let angle = i as f64 * step;
        draw_rotated_text(
            svg,
            positions[i],
            angle,
            TextSizes::DEFAULT,
            &colors.outline,
            font,
            &letter.to_string(),
        );
    }
}

fn draw_apex_cross(svg: &mut String, colors: &SealColors) {
    for (x1, y1, x2, y2) in APEX_CROSS {
        draw_line(svg, x1, y1, x2, y2, &colors.outline);
    }
}

fn draw_pentagram(svg: &mut String, colors: &SealColors) {
    let vertices: Vec<Point> = PENTAGRAM_ANGLES
        .iter()
        .map(|&deg| polar(CENTER, PENTAGRAM_RADIUS, deg))
        .collect();

    for pair in PENTAGRAM_PATH.windows(2) {
        let (a, b) = (vertices[pair[0]], vertices[pair[1]]);
        draw_line(svg, a.x, a.y, b.x, b.y, &colors.pentagram);
    }
}

fn draw_center_glyph(svg: &mut String, colors: &SealColors, font: &str) {
    draw_text(
        svg,
        CENTER.x,
        CENTER.y,
        TextSizes::CENTER_GLYPH,
        &colors.outline,
        font,
        CENTER_GLYPH,
    );
}

fn draw_name_rings(svg: &mut String, colors: &SealColors, font: &str) {
    let names = ring_points(CENTER, NAME_RING_RADIUS, CENTER_NAMES.len(), NAME_RING_START);
    let pairs = ring_points(CENTER, PAIR_RING_RADIUS, CENTER_PAIRS.len(), NAME_RING_START);

    // The ring names carry the pentagram paint, not the outline white
    for i in 0..CENTER_NAMES.len() {
        draw_text(
            svg,
            names[i].x,
            names[i].y,
            TextSizes::DEFAULT,
            &colors.pentagram,
            font,
            CENTER_NAMES[i],
        );
        draw_text(
            svg,
            pairs[i].x,
            pairs[i].y,
            TextSizes::DEFAULT,
            &colors.pentagram,
            font,
            CENTER_PAIRS[i],
        );
    }
}

fn draw_heptagons(svg: &mut String, colors: &SealColors, font: &str) {
    for (h, &radius) in HEPTAGON_RADII.iter().enumerate() {
        let vertices = ring_points(CENTER, radius, HEPTAGON_SIDES, 0.0);
        let stroke = &colors.heptagons[h];

        let points = vertices
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points,
            stroke,
            StrokeWidths::OUTLINE
        ));
        svg.push('\n');

        // Angel names run along the outer heptagon's edges, each label
        // rotated to the directed angle of its edge
        if h == 0 {
            for (k, angel) in ANGELS.iter().enumerate() {
                let a = vertices[k];
                let b = vertices[(k + 1) % HEPTAGON_SIDES];
                draw_rotated_text(
                    svg,
                    midpoint(a, b),
                    segment_angle(a, b),
                    TextSizes::DEFAULT,
                    stroke,
                    font,
                    angel,
                );
            }
        }

        // The innermost heptagon carries a filled dot and a small cross at
        // every vertex
        if h == 2 {
            for p in &vertices {
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none"/>"#,
                    fmt_num(p.x),
                    fmt_num(p.y),
                    fmt_num(VertexMarker::DOT_RADIUS),
                    colors.marker
                ));
                svg.push('\n');
            }
            for p in &vertices {
                draw_line(
                    svg,
                    p.x - VertexMarker::CROSS_ARM,
                    p.y,
                    p.x + VertexMarker::CROSS_ARM,
                    p.y,
                    &colors.marker,
                );
                draw_line(
                    svg,
                    p.x,
                    p.y - VertexMarker::CROSS_ARM,
                    p.x,
                    p.y + VertexMarker::CROSS_ARM,
                    &colors.marker,
                );
            }
        }
    }
}

// ============================================================================
// Primitive helpers
// ============================================================================

fn draw_line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_num(x1),
        fmt_num(y1),
        fmt_num(x2),
        fmt_num(y2),
        stroke,
        StrokeWidths::OUTLINE
    ));
    svg.push('\n');
}

/// One centered text glyph at a fixed position.
fn draw_text(svg: &mut String, x: f64, y: f64, size: f64, fill: &str, font: &str, content: &str) {
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dy="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        TEXT_BASELINE_SHIFT,
        escape_xml(font),
        fmt_num(size),
        fill,
        escape_xml(content)
    ));
    svg.push('\n');
}

/// One centered text glyph translated to `at` and rotated by `degrees`.
fn draw_rotated_text(
    svg: &mut String,
    at: Point,
    degrees: f64,
    size: f64,
    fill: &str,
    font: &str,
    content: &str,
) {
    svg.push_str(&format!(
        r#"<text x="0" y="0" transform="translate({} {}) rotate({})" text-anchor="middle" dy="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
        fmt_num(at.x),
        fmt_num(at.y),
        fmt_num(degrees),
        TEXT_BASELINE_SHIFT,
        escape_xml(font),
        fmt_num(size),
        fill,
        escape_xml(content)
    ));
    svg.push('\n');
}

/// Escape special XML characters in text content
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate with at most two decimal places, trimming trailing
/// zeros. Fixed-precision output keeps renders byte-identical across runs.
fn fmt_num(n: f64) -> String {
    let s = format!("{:.2}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_string_has_72_letters() {
        assert_eq!(BAND_LETTERS.chars().count(), 72);
    }

    #[test]
    fn pentagram_path_skips_every_second_vertex_and_closes() {
        let mut seen = [false; 5];
        for &v in &PENTAGRAM_PATH[..5] {
            assert!(!seen[v], "vertex {} visited twice", v);
            seen[v] = true;
        }
        assert_eq!(PENTAGRAM_PATH[0], PENTAGRAM_PATH[5]);

        // Every hop advances two vertices; stepping one at a time would
        // trace the convex pentagon instead of the star
        for pair in PENTAGRAM_PATH.windows(2) {
            assert_eq!((pair[1] + 5 - pair[0]) % 5, 2, "hop {:?} is not a skip", pair);
        }
    }

    #[test]
    fn render_is_wellformed_and_contains_every_label_table() {
        let svg = render_seal_svg(&SealColors::default(), "Inter", false);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));

        for angel in ANGELS {
            assert!(svg.contains(angel), "missing angel label {}", angel);
        }
        for pair in CENTER_PAIRS {
            assert!(svg.contains(&format!(">{}<", pair)), "missing pair {}", pair);
        }
        assert!(svg.contains(&format!(">{}<", CENTER_GLYPH)));
    }

    #[test]
    fn transparent_render_omits_the_background_rect() {
        let colors = SealColors::default();
        let opaque = render_seal_svg(&colors, "Inter", false);
        let transparent = render_seal_svg(&colors, "Inter", true);

        assert!(opaque.contains("<rect"));
        assert!(!transparent.contains("<rect"));
        assert!(!transparent.contains(&colors.background));
    }

    #[test]
    fn fmt_num_trims_and_never_emits_negative_zero() {
        assert_eq!(fmt_num(400.0), "400");
        assert_eq!(fmt_num(474.851), "474.85");
        assert_eq!(fmt_num(51.4), "51.4");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(400.00000000000003), "400");
    }
}
