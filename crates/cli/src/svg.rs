//! SVG renderer for template shapes.
//!
//! - Converts millimetres to drawing units and flips the y axis in one
//!   `scale(MM, -MM)`, so the board appears as designed in y-down viewers.
//! - One element per flattened primitive: `line`, `circle`, `ellipse`, `polygon`.
//! - Files are written through a temp file in the target directory and then
//!   renamed into place.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use stringart::geom::{flatten, Bounds2, Flat, Placed, Shape};
use stringart::units::{mm, MM};
use stringart::Vec2;
use tempfile::NamedTempFile;

/// Blank border around the drawing.
const MARGIN_MM: f64 = 2.0;
const STROKE_WIDTH_MM: f64 = 0.2;

/// Three decimals, without `-0.000`.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r:.3}")
}

fn attrs(item: &Placed) -> String {
    format!(
        r#"stroke="{}" stroke-width="{}" fill="none""#,
        item.style.stroke(),
        num(mm(STROKE_WIDTH_MM))
    )
}

fn element(item: &Placed) -> String {
    let style = attrs(item);
    match &item.geom {
        Flat::Segment { a, b } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {style}/>"#,
            num(a.x),
            num(a.y),
            num(b.x),
            num(b.y)
        ),
        Flat::Circle { center, r } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {style}/>"#,
            num(center.x),
            num(center.y),
            num(*r)
        ),
        Flat::Ellipse {
            center,
            radii,
            rotation_deg,
        } => format!(
            r#"<ellipse cx="{cx}" cy="{cy}" rx="{}" ry="{}" transform="rotate({} {cx} {cy})" {style}/>"#,
            num(radii.x),
            num(radii.y),
            num(*rotation_deg),
            cx = num(center.x),
            cy = num(center.y),
        ),
        Flat::Polygon { points } => {
            let pts: Vec<String> = points
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect();
            format!(r#"<polygon points="{}" {style}/>"#, pts.join(" "))
        }
    }
}

/// Serialize `shape` (millimetres, y up) into a standalone SVG document.
pub fn to_document(shape: &Shape) -> String {
    let page = shape.clone().scale(MM, -MM);
    let items = flatten(&page);
    let bounds = Bounds2::of(&items)
        .unwrap_or(Bounds2 {
            min: Vec2::zeros(),
            max: Vec2::zeros(),
        })
        .padded(mm(MARGIN_MM));

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}mm" height="{}mm" viewBox="{} {} {} {}">"#,
        num(bounds.width() / MM),
        num(bounds.height() / MM),
        num(bounds.min.x),
        num(bounds.min.y),
        num(bounds.width()),
        num(bounds.height()),
    ));
    doc.push('\n');
    for item in &items {
        doc.push_str("  ");
        doc.push_str(&element(item));
        doc.push('\n');
    }
    doc.push_str("</svg>\n");
    doc
}

/// Render `shape` to `path`, creating parent directories. Returns the primitive count.
pub fn render(shape: &Shape, path: &Path) -> Result<usize> {
    let doc = to_document(shape);
    write_atomic(path, doc.as_bytes())?;
    Ok(shape.primitive_count())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))?;
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("writing temp file for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stringart::geom::Style;
    use stringart::patterns::{circle_pattern, square_plus_pattern, CircleParams, SquarePlusParams};
    use tempfile::tempdir;

    #[test]
    fn num_trims_negative_zero() {
        assert_eq!(num(-0.0), "0.000");
        assert_eq!(num(-1e-12), "0.000");
        assert_eq!(num(1.23456), "1.235");
    }

    #[test]
    fn document_flips_y_and_converts_units() {
        let shape = Shape::circle(0.0, 10.0, 1.0, Style::Hole);
        let doc = to_document(&shape);
        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains(r#"cy="-37.795""#), "{doc}");
        assert!(doc.contains(r#"r="3.780""#), "{doc}");
        assert!(doc.contains(r#"stroke="black""#));
        // 2 mm hole plus 2 mm margin each side
        assert!(doc.contains(r#"width="6.000mm""#), "{doc}");
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn circle_board_elements() {
        let shape = circle_pattern(&CircleParams::new(25.0, 9)).unwrap();
        let doc = to_document(&shape);
        assert_eq!(doc.matches("<circle").count(), 10);
        assert_eq!(doc.matches("<line").count(), 9);
        assert_eq!(doc.matches(r#"stroke="red""#).count(), 1);
        assert!(!doc.contains("fill=\"black\""));
    }

    #[test]
    fn square_boundary_is_a_polygon() {
        let shape = square_plus_pattern(&SquarePlusParams::new(40.0, 2)).unwrap();
        let doc = to_document(&shape);
        assert_eq!(doc.matches("<polygon").count(), 1);
    }

    #[test]
    fn ellipse_for_non_uniform_scale() {
        let shape = Shape::circle(0.0, 0.0, 1.0, Style::Guide).scale(2.0, 1.0);
        let doc = to_document(&shape);
        assert!(doc.contains("<ellipse"));
        assert!(doc.contains("rotate("));
    }

    #[test]
    fn empty_shape_still_renders() {
        let doc = to_document(&Shape::empty());
        assert!(doc.contains("<svg"));
        assert!(doc.contains(r#"width="4.000mm""#));
    }

    #[test]
    fn render_creates_dirs_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/deeper/C09.svg");
        let shape = circle_pattern(&CircleParams::new(25.0, 9)).unwrap();
        let n = render(&shape, &out).unwrap();
        assert_eq!(n, 19);
        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text, to_document(&shape));
        let listing: Vec<_> = fs::read_dir(out.parent().unwrap()).unwrap().collect();
        assert_eq!(listing.len(), 1);

        // overwrite in place
        render(&Shape::empty(), &out).unwrap();
        assert!(!fs::read_to_string(&out).unwrap().contains("<circle"));
    }
}
