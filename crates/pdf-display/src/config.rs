use crate::constants::*;
use crate::error::{PdfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Startup configuration for a [`crate::PdfDisplay`].
///
/// Every field has a default, so a config file only needs to name the
/// values it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub document_path: PathBuf,
    /// Directory holding the platform PDFium library. `None` searches next
    /// to the executable and then the system library path.
    pub pdfium_library_dir: Option<PathBuf>,
    pub render_scale: f32,
}

impl DisplayConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PdfError::FileNotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| PdfError::ConfigError(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| PdfError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.render_scale.is_finite()
            || !(MIN_RENDER_SCALE..=MAX_RENDER_SCALE).contains(&self.render_scale)
        {
            return Err(PdfError::ConfigError(format!(
                "render_scale {} outside {}..={}",
                self.render_scale, MIN_RENDER_SCALE, MAX_RENDER_SCALE
            )));
        }

        if self.document_path.as_os_str().is_empty() {
            return Err(PdfError::ConfigError("document_path is empty".into()));
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            pdfium_library_dir: None,
            render_scale: DEFAULT_RENDER_SCALE,
        }
    }
}
