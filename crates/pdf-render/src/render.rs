//! Render orchestration
//!
//! The one side-effecting stage of the pipeline: resolves a job against the
//! preset tables, derives its geometry, assembles the document, and drives
//! a rendering engine to a uniquely named output file. The engine is
//! released exactly once on every exit path before the outcome is
//! surfaced.

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::distr::{Alphanumeric, SampleString};

use crate::document::build_document;
use crate::engine::{ChromeEngine, PdfEngine, PrintOptions};
use crate::geometry::compute_geometry;
use crate::presets::{resolve_page_format, resolve_preset};
use crate::types::{PageDimensions, RenderJob, RenderResult, Result};

/// Number of random characters appended to each output file name
const OUTPUT_SUFFIX_LEN: usize = 9;

/// Releases the wrapped engine when dropped, so every exit path of the
/// orchestration (return, error, panic) observes exactly one close.
struct EngineGuard(Box<dyn PdfEngine>);

impl EngineGuard {
    fn render(&mut self, document: &str, options: &PrintOptions, output: &Path) -> Result<()> {
        self.0.render(document, options, output)
    }
}

impl Drop for EngineGuard {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Default staging directory for generated PDF files
pub fn default_output_dir() -> PathBuf {
    env::temp_dir().join("pdf-render")
}

/// Render a job with a discovered Chrome/Chromium engine into the default
/// output directory.
pub async fn render_to_pdf(job: &RenderJob) -> Result<RenderResult> {
    let engine = ChromeEngine::discover()?;
    render_with_engine(job, Box::new(engine), &default_output_dir()).await
}

/// Render a job with the given engine.
///
/// The engine is closed exactly once, whether rendering succeeds or fails,
/// before the result is returned.
pub async fn render_with_engine(
    job: &RenderJob,
    engine: Box<dyn PdfEngine>,
    output_dir: &Path,
) -> Result<RenderResult> {
    let mut engine = EngineGuard(engine);

    job.validate()?;

    let preset = resolve_preset(job.preset.as_deref());
    let format = resolve_page_format(job.page_format.as_deref());
    let geometry = compute_geometry(job, preset, format);

    info!(
        "Rendering PDF: preset={}, format={}, {}x{}mm at {} dpi",
        preset.name, format.name, geometry.total_width_mm, geometry.total_height_mm, geometry.dpi
    );

    let document = build_document(job, preset, &geometry);
    debug!("Assembled document: {} bytes", document.len());

    tokio::fs::create_dir_all(output_dir).await?;
    let output_path = unique_output_path(output_dir);

    let (width_mm, height_mm) = geometry.page_box(job.orientation());
    let options = PrintOptions {
        width_mm,
        height_mm,
        scale_factor: geometry.scale_factor,
    };

    let pdf_path = tokio::task::spawn_blocking(move || {
        let rendered = engine.render(&document, &options, &output_path);
        // Release before the outcome leaves the task.
        drop(engine);
        rendered.map(|()| output_path)
    })
    .await??;

    info!("PDF generated: {}", pdf_path.display());

    Ok(RenderResult {
        success: true,
        pdf_path,
        preset: preset.name.to_string(),
        page_format: format.name.to_string(),
        dimensions: PageDimensions {
            width: geometry.total_width_mm,
            height: geometry.total_height_mm,
        },
    })
}

/// Build a collision-resistant output path from a millisecond timestamp and
/// a random suffix, so concurrent invocations never target the same file.
fn unique_output_path(dir: &Path) -> PathBuf {
    let stamp = chrono::Utc::now().timestamp_millis();
    let suffix = Alphanumeric.sample_string(&mut rand::rng(), OUTPUT_SUFFIX_LEN);
    dir.join(format!("pdf-{stamp}-{suffix}.pdf"))
}
