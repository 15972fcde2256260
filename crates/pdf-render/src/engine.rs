//! Headless rendering engine life cycle
//!
//! Drives a locally installed Chrome/Chromium in headless mode to turn an
//! assembled document into a PDF file. Each render stages its document and
//! an isolated browser profile under a scratch directory that is removed
//! with the render. The engine handle must be released on every exit path;
//! `close` is idempotent and `Drop` delegates to it.

use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::debug;

use crate::types::{RenderError, Result};

/// CSS reference pixels per millimeter at 96 dpi
const MM_TO_PX: f32 = 3.78;

/// Default virtual-time budget granted to the page for loading sub-resources
const DEFAULT_VIRTUAL_TIME_BUDGET_MS: u32 = 10_000;

/// Environment variable naming the engine binary, overriding discovery
pub const CHROME_BIN_ENV: &str = "CHROME_BIN";

/// Well-known binary names probed during discovery, in preference order
const CHROME_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
];

/// Physical print parameters handed to a rendering engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintOptions {
    /// Page box width in millimeters, orientation applied
    pub width_mm: f32,
    /// Page box height in millimeters, orientation applied
    pub height_mm: f32,
    /// Device pixel ratio; 1.0 at the 72 dpi reference resolution
    pub scale_factor: f32,
}

/// A rendering engine that loads an assembled document and emits a PDF.
///
/// `close` releases the engine instance and must be safe to call more than
/// once; the orchestrator calls it on every exit path.
pub trait PdfEngine: Send {
    /// Load `document` and emit a PDF at `output` with the given physical parameters
    fn render(&mut self, document: &str, options: &PrintOptions, output: &Path) -> Result<()>;

    /// Release the engine instance
    fn close(&mut self);
}

/// Headless Chrome/Chromium engine.
///
/// Rendering spawns one browser process per job: the viewport is sized to
/// the physical page box at the requested pixel density, the page runs
/// under a virtual-time budget until its network activity settles, and the
/// browser prints to the output path before exiting.
pub struct ChromeEngine {
    binary: PathBuf,
    virtual_time_budget_ms: u32,
    child: Option<Child>,
}

impl ChromeEngine {
    /// Locate a browser binary: `CHROME_BIN` if set, otherwise well-known
    /// names on `PATH`.
    pub fn discover() -> Result<Self> {
        if let Ok(bin) = env::var(CHROME_BIN_ENV) {
            return Ok(Self::with_binary(PathBuf::from(bin)));
        }

        for candidate in CHROME_CANDIDATES {
            if let Some(path) = find_in_path(candidate) {
                return Ok(Self::with_binary(path));
            }
        }

        Err(RenderError::EngineNotFound(format!(
            "no Chrome/Chromium binary found; set {} to the browser executable",
            CHROME_BIN_ENV
        )))
    }

    /// Use an explicit browser binary, bypassing discovery
    pub fn with_binary(binary: PathBuf) -> Self {
        Self {
            binary,
            virtual_time_budget_ms: DEFAULT_VIRTUAL_TIME_BUDGET_MS,
            child: None,
        }
    }

    /// Set the virtual-time budget granted to the page for loading
    pub fn virtual_time_budget_ms(mut self, budget_ms: u32) -> Self {
        self.virtual_time_budget_ms = budget_ms;
        self
    }

    /// Wait for the running browser process and reap it
    fn wait(&mut self) -> Result<std::process::ExitStatus> {
        let Some(child) = self.child.as_mut() else {
            return Err(RenderError::Engine(
                "no engine process running".to_string(),
            ));
        };
        // On wait failure the child stays stored so close() can reap it.
        let status = child.wait()?;
        self.child = None;
        Ok(status)
    }
}

impl PdfEngine for ChromeEngine {
    fn render(&mut self, document: &str, options: &PrintOptions, output: &Path) -> Result<()> {
        let staging = tempfile::tempdir()?;
        let page_path = staging.path().join("document.html");
        std::fs::write(&page_path, document)?;

        let width_px = (options.width_mm * MM_TO_PX * options.scale_factor).round() as u32;
        let height_px = (options.height_mm * MM_TO_PX * options.scale_factor).round() as u32;

        let mut command = Command::new(&self.binary);
        command
            .arg("--headless=new")
            // The process itself is assumed already isolated; no OS sandbox.
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-gpu")
            .arg("--hide-scrollbars")
            .arg(format!(
                "--user-data-dir={}",
                staging.path().join("profile").display()
            ))
            .arg(format!(
                "--force-device-scale-factor={}",
                options.scale_factor
            ))
            .arg(format!("--window-size={},{}", width_px, height_px))
            .arg(format!(
                "--virtual-time-budget={}",
                self.virtual_time_budget_ms
            ))
            .arg("--run-all-compositor-stages-before-draw")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", output.display()))
            .arg(format!("file://{}", page_path.display()))
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        debug!("Launching rendering engine: {:?}", command);

        let mut child = command.spawn().map_err(|e| {
            RenderError::Engine(format!("failed to launch {}: {}", self.binary.display(), e))
        })?;
        let stderr_pipe = child.stderr.take();
        self.child = Some(child);

        // Drain stderr to end-of-stream before reaping; the pipe closes when
        // the browser exits.
        let mut stderr_text = String::new();
        if let Some(mut pipe) = stderr_pipe {
            let _ = pipe.read_to_string(&mut stderr_text);
        }

        let status = self.wait()?;
        if !status.success() {
            return Err(RenderError::Engine(format!(
                "rendering engine exited with {}: {}",
                status,
                stderr_text.trim()
            )));
        }

        // A successful exit with a missing or empty artifact is still a failure.
        let metadata = std::fs::metadata(output).map_err(|e| {
            RenderError::Engine(format!(
                "rendering engine produced no output at {}: {}",
                output.display(),
                e
            ))
        })?;
        if metadata.len() == 0 {
            return Err(RenderError::Engine(format!(
                "rendering engine produced an empty document at {}",
                output.display()
            )));
        }

        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for ChromeEngine {
    fn drop(&mut self) {
        self.close();
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|p| p.is_file())
}
