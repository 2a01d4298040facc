//! Runtime configuration.
//!
//! Layering: built-in defaults, then an optional TOML file, then CLI flags.
//!
//! ```toml
//! theme = "emerald"
//! reduced_motion = false
//! reveal_duration_ms = 600
//! frame_interval_ms = 16
//! log_file = "folio.log"
//!
//! [colors]
//! accent = "#34d399"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::theme::{Theme, require_preset};

/// Default reveal transition length.
pub const DEFAULT_REVEAL_MS: u64 = 600;

/// Default event poll / frame interval (~60fps).
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Hex overrides for individual theme slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorOverrides {
    pub text: Option<String>,
    pub bright: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub border: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Theme preset name.
    pub theme: String,
    /// Skip transitions: reveals complete instantly.
    pub reduced_motion: bool,
    pub reveal_duration_ms: u64,
    pub frame_interval_ms: u64,
    /// Log destination for interactive sessions.
    pub log_file: Option<PathBuf>,
    pub colors: ColorOverrides,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme: "emerald".to_string(),
            reduced_motion: false,
            reveal_duration_ms: DEFAULT_REVEAL_MS,
            frame_interval_ms: DEFAULT_FRAME_MS,
            log_file: None,
            colors: ColorOverrides::default(),
        }
    }
}

/// Values from the command line that win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub theme: Option<String>,
    pub reduced_motion: bool,
    pub log_file: Option<PathBuf>,
}

impl FolioConfig {
    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, optionally layered with a file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Layer CLI flags on top.
    pub fn apply_overrides(&mut self, cli: &CliOverrides) {
        if let Some(theme) = &cli.theme {
            self.theme = theme.clone();
        }
        if cli.reduced_motion {
            self.reduced_motion = true;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    /// Effective reveal duration.
    pub fn reveal_duration(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(self.reveal_duration_ms)
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    /// Preset plus color overrides.
    pub fn resolve_theme(&self) -> Result<Theme> {
        require_preset(&self.theme)?.with_overrides(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.theme, "emerald");
        assert_eq!(config.reveal_duration(), Duration::from_millis(600));
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"mono\"\n[colors]\naccent = \"#00ff00\"").unwrap();

        let config = FolioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.theme, "mono");
        assert_eq!(config.reveal_duration_ms, DEFAULT_REVEAL_MS);
        assert_eq!(config.colors.accent.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "flavour = \"mint\"").unwrap();

        let err = FolioConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = FolioConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, FolioError::ConfigRead { .. }));
    }

    #[test]
    fn test_cli_wins_over_file() {
        let mut config = FolioConfig {
            theme: "mono".to_string(),
            ..Default::default()
        };
        config.apply_overrides(&CliOverrides {
            theme: Some("terminal".to_string()),
            reduced_motion: true,
            log_file: None,
        });
        assert_eq!(config.theme, "terminal");
        assert_eq!(config.reveal_duration(), Duration::ZERO);
    }

    #[test]
    fn test_resolve_theme_unknown() {
        let config = FolioConfig {
            theme: "neon".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_theme(),
            Err(FolioError::UnknownTheme { .. })
        ));
    }
}
