//! PNG export for the rendered sketch surface.

use crate::config::ExportConfig;
use chrono::Utc;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render drawing: {0}")]
    Render(#[from] crate::draw::RenderError),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Generates an export filename: `<prefix>-<unix-timestamp-in-ms>.png`.
pub fn generate_filename(prefix: &str) -> String {
    format!("{}-{}.png", prefix, Utc::now().timestamp_millis())
}

/// Ensures the export directory exists, creating it if necessary.
///
/// Returns the canonicalized path when possible.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes a rendered surface to a PNG file in the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_surface(
    surface: &cairo::ImageSurface,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.resolve_directory())?;

    let filename = generate_filename(&config.filename_prefix);
    let file_path = directory.join(&filename);

    let mut file = File::create(&file_path)?;
    surface.write_to_png(&mut file)?;

    log::info!("Drawing exported to {}", file_path.display());

    Ok(file_path)
}

/// Writes a rendered surface to an explicit PNG path, creating parent
/// directories as needed.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Drawing exported to {}", path.display());
    Ok(())
}

/// Expands a leading tilde (`~/`) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
