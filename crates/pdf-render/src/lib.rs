mod document;
mod engine;
mod geometry;
mod presets;
mod render;
mod types;

pub use document::build_document;
pub use engine::{CHROME_BIN_ENV, ChromeEngine, PdfEngine, PrintOptions};
pub use geometry::{BASE_DPI, EffectiveGeometry, compute_geometry};
pub use presets::{PAGE_FORMATS, PRESETS, PageFormat, PrintPreset, resolve_page_format, resolve_preset};
pub use render::{default_output_dir, render_to_pdf, render_with_engine};
pub use types::*;
