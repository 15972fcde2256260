use crate::presets::{PageFormat, PrintPreset};
use crate::types::{Orientation, RenderJob};

/// Reference resolution against which all scaling is expressed
pub const BASE_DPI: u32 = 72;

/// Page geometry derived once per job: trim size, bleed, bleed-inclusive
/// totals, and the raster scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveGeometry {
    /// Trim width from the page format
    pub base_width_mm: f32,
    /// Trim height from the page format
    pub base_height_mm: f32,
    /// Bleed applied on each edge
    pub bleed_mm: f32,
    /// Bleed-inclusive page width
    pub total_width_mm: f32,
    /// Bleed-inclusive page height
    pub total_height_mm: f32,
    /// Effective raster resolution
    pub dpi: u32,
    /// dpi / 72; exactly 1.0 at the reference resolution
    pub scale_factor: f32,
    /// Draw crop marks at the trim corners
    pub crop_marks: bool,
}

impl EffectiveGeometry {
    /// Bleed-inclusive page box with orientation applied
    pub fn page_box(&self, orientation: Orientation) -> (f32, f32) {
        match orientation {
            Orientation::Portrait => (self.total_width_mm, self.total_height_mm),
            Orientation::Landscape => (self.total_height_mm, self.total_width_mm),
        }
    }
}

/// Derive the effective geometry for a job from its resolved preset and
/// page format. Job overrides win over preset defaults; totals grow by the
/// bleed on both edges. Numeric overrides are validated before this stage.
pub fn compute_geometry(
    job: &RenderJob,
    preset: &PrintPreset,
    format: &PageFormat,
) -> EffectiveGeometry {
    let bleed_mm = job.bleed_mm.unwrap_or(preset.bleed_mm);
    let dpi = job.dpi.unwrap_or(preset.dpi);

    EffectiveGeometry {
        base_width_mm: format.width_mm,
        base_height_mm: format.height_mm,
        bleed_mm,
        total_width_mm: format.width_mm + 2.0 * bleed_mm,
        total_height_mm: format.height_mm + 2.0 * bleed_mm,
        dpi,
        scale_factor: dpi as f32 / BASE_DPI as f32,
        crop_marks: job.crop_marks.unwrap_or(preset.crop_marks),
    }
}
