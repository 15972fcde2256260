//! Print document assembly
//!
//! Builds the self-contained HTML document handed to the rendering engine:
//! page-size rules matching the computed geometry, bleed padding, an
//! optional crop-mark overlay, and the caller's markup and styles. Pure
//! string building; no network or file access.

use std::fmt::Write as _;

use crate::geometry::EffectiveGeometry;
use crate::presets::PrintPreset;
use crate::types::RenderJob;

/// Length of each crop mark in millimeters
const CROP_MARK_LENGTH_MM: f32 = 10.0;

/// Gap between the trim line and the start of a crop mark
const CROP_MARK_GAP_MM: f32 = 3.0;

/// Stroke width for crop marks in points
const CROP_MARK_STROKE: f32 = 0.25;

/// Assemble the complete document for a job.
///
/// The page box equals the bleed-inclusive totals with orientation applied.
/// The caller's CSS is appended below the structural rules so it can
/// override cosmetics but not the page geometry; the caller's HTML lands
/// inside a trim-box-sized container that clips overflow.
pub fn build_document(
    job: &RenderJob,
    preset: &PrintPreset,
    geometry: &EffectiveGeometry,
) -> String {
    let (width, height) = geometry.page_box(job.orientation());
    let bleed = geometry.bleed_mm;

    let page_rule = if preset.prefer_css_page_size {
        format!("@page {{\n            size: {width}mm {height}mm;\n            margin: 0;\n        }}\n\n        ")
    } else {
        String::new()
    };

    let color_adjust = if preset.print_background {
        "\n\n        html {\n            -webkit-print-color-adjust: exact;\n            print-color-adjust: exact;\n        }"
    } else {
        ""
    };

    let crop_marks = if geometry.crop_marks {
        crop_marks_svg(width, height, bleed)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Catalog PDF</title>
    <style>
        {page_rule}* {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        html, body {{
            width: {width}mm;
            height: {height}mm;
        }}{color_adjust}

        .pdf-container {{
            position: relative;
            width: 100%;
            height: 100%;
            padding: {bleed}mm;
        }}

        .pdf-content {{
            width: 100%;
            height: 100%;
            overflow: hidden;
        }}

        {css}
    </style>
</head>
<body>
    <div class="pdf-container">
        {crop_marks}
        <div class="pdf-content">
            {html}
        </div>
    </div>
</body>
</html>
"#,
        css = job.css,
        html = job.html,
    )
}

/// Generate the crop-mark overlay: eight short segments, two per corner of
/// the trim box, offset outward by the mark gap and extending outward by
/// the mark length.
fn crop_marks_svg(width_mm: f32, height_mm: f32, bleed_mm: f32) -> String {
    let gap = CROP_MARK_GAP_MM;
    let len = CROP_MARK_LENGTH_MM;

    // Trim line positions inside the bleed-inclusive page box
    let left = bleed_mm;
    let top = bleed_mm;
    let right = width_mm - bleed_mm;
    let bottom = height_mm - bleed_mm;

    let mut svg = String::from(
        r#"<svg class="crop-marks" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">"#,
    );
    svg.push('\n');

    // Top-left
    mark_line(&mut svg, left - gap, top, left - gap - len, top);
    mark_line(&mut svg, left, top - gap, left, top - gap - len);

    // Top-right
    mark_line(&mut svg, right + gap, top, right + gap + len, top);
    mark_line(&mut svg, right, top - gap, right, top - gap - len);

    // Bottom-left
    mark_line(&mut svg, left - gap, bottom, left - gap - len, bottom);
    mark_line(&mut svg, left, bottom + gap, left, bottom + gap + len);

    // Bottom-right
    mark_line(&mut svg, right + gap, bottom, right + gap + len, bottom);
    mark_line(&mut svg, right, bottom + gap, right, bottom + gap + len);

    svg.push_str("        </svg>");
    svg
}

fn mark_line(svg: &mut String, x1: f32, y1: f32, x2: f32, y2: f32) {
    let _ = writeln!(
        svg,
        r#"            <line x1="{x1}mm" y1="{y1}mm" x2="{x2}mm" y2="{y2}mm" stroke="black" stroke-width="{CROP_MARK_STROKE}"/>"#
    );
}
