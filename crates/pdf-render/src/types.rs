use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Rendering engine not found: {0}")]
    EngineNotFound(String),
    #[error("Rendering failed: {0}")]
    Engine(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orientation {
    /// Portrait: height > width (default for most page formats)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// A single rendering job, parsed once from the driver's input and never
/// mutated afterwards. All fields are optional on the wire; absent fields
/// take the preset defaults during geometry resolution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderJob {
    /// Body markup placed inside the content container
    pub html: String,
    /// Stylesheet appended below the structural rules
    pub css: String,
    /// Print preset name; unknown names fall back to "screen"
    pub preset: Option<String>,
    /// Page format name; unknown names fall back to "A4"
    pub page_format: Option<String>,
    /// Rotate the page box 90 degrees
    pub landscape: bool,
    /// Resolution override in dots per inch
    pub dpi: Option<u32>,
    /// Bleed override in millimeters
    pub bleed_mm: Option<f32>,
    /// Crop mark override
    pub crop_marks: Option<bool>,
}

impl RenderJob {
    /// Parse a job from the driver's JSON input
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| RenderError::Config(format!("Failed to parse job: {}", e)))
    }

    /// Validate the job's numeric overrides
    pub fn validate(&self) -> Result<()> {
        if self.dpi == Some(0) {
            return Err(RenderError::Config(
                "dpi must be greater than zero".to_string(),
            ));
        }
        if let Some(bleed) = self.bleed_mm {
            if bleed < 0.0 {
                return Err(RenderError::Config(
                    "bleedMm must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Final page box reported to the caller, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageDimensions {
    pub width: f32,
    pub height: f32,
}

/// Successful rendering outcome, written to the driver's output stream
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    pub success: bool,
    pub pdf_path: PathBuf,
    pub preset: String,
    pub page_format: String,
    pub dimensions: PageDimensions,
}

/// Failure outcome, written to the driver's error stream
#[derive(Debug, Clone, Serialize)]
pub struct RenderFailure {
    pub success: bool,
    pub error: String,
}

impl RenderFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
