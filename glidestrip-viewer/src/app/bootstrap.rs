use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Viewer configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory scanned for gallery images.
    pub image_dir: PathBuf,
    /// Optional TOML file overriding the default gesture tuning.
    pub tuning_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self { image_dir: image_dir.into(), tuning_path: None }
    }

    pub fn from_environment() -> Self {
        let image_dir = std::env::var_os("GLIDESTRIP_IMAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("images"));
        let tuning_path = std::env::var_os("GLIDESTRIP_TUNING").map(PathBuf::from);

        Self { image_dir, tuning_path }
    }
}

/// Enumerate displayable images in `dir`, sorted by file name so the strip
/// order is stable across runs.
pub fn discover_images(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading image directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| is_image(path))
        .collect();
    paths.sort();
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    matches!(
        ext.as_deref(),
        Some("webp" | "png" | "jpg" | "jpeg" | "gif" | "bmp")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        assert!(is_image(Path::new("gallery/page3-1.webp")));
        assert!(is_image(Path::new("gallery/UPPER.JPG")));
        assert!(!is_image(Path::new("gallery/notes.txt")));
        assert!(!is_image(Path::new("gallery/noext")));
    }

    #[test]
    fn environment_defaults_apply() {
        let config = AppConfig::new("somewhere");
        assert_eq!(config.image_dir, PathBuf::from("somewhere"));
        assert!(config.tuning_path.is_none());
    }
}
