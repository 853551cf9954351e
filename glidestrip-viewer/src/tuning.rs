//! Gesture tuning overrides.
//!
//! The engine's feel constants can be overridden from a TOML file named by
//! `GLIDESTRIP_TUNING`. Keys mirror `StripTuning` fields; missing keys keep
//! their defaults. A broken file is reported and ignored, never fatal.

use std::fs;
use std::path::Path;

use glidestrip_core::StripTuning;
use thiserror::Error;

/// Failure to load a tuning override file.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a [`StripTuning`] from a TOML file.
pub fn load(path: &Path) -> Result<StripTuning, TuningError> {
    let raw = fs::read_to_string(path).map_err(|source| TuningError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| TuningError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let tuning: StripTuning =
            toml::from_str("friction_per_frame = 0.92\nsnap_min_ms = 250.0")
                .unwrap();
        assert_eq!(tuning.friction_per_frame, 0.92);
        assert_eq!(tuning.snap_min_ms, 250.0);
        // untouched keys keep their defaults
        assert_eq!(
            tuning.keyboard_step_fraction,
            StripTuning::default().keyboard_step_fraction
        );
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err = load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, TuningError::Read { .. }));
    }

    #[test]
    fn garbage_reports_parse_error() {
        let tuning: Result<StripTuning, _> = toml::from_str("friction = [1,");
        assert!(tuning.is_err());
    }
}
