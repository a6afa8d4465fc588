use anyhow::{Context, Result};
use diary_core::{FormatConfig, PartialFormatConfig};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The user's saved format options. Missing keys fall back to the defaults.
    pub format: PartialFormatConfig,
    /// Where `format` was read from, if anywhere.
    pub source: Option<PathBuf>,
}

/// On-disk shape:
///
/// ```toml
/// [format]
/// tagSeparator = ";"
/// datePrefix = ""
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
struct FileConfig {
    #[serde(default)]
    format: Option<PartialFormatConfig>,
}

impl Config {
    /// Loads the config from `explicit` if given, else from the first existing
    /// default location (XDG first, then native). Nothing found means defaults.
    ///
    /// An explicit path must exist and parse. Problems with a discovered file
    /// are logged and the defaults are used instead.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let file_config = Self::read_file_config(path)?;
            return Ok(Self::from_file_config(file_config, path));
        }

        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            return match Self::read_file_config(&path) {
                Ok(file_config) => Ok(Self::from_file_config(file_config, &path)),
                Err(e) => {
                    tracing::warn!("ignoring config file: {e:#}");
                    Ok(Self::default())
                }
            };
        }
        Ok(Self::default())
    }

    fn from_file_config(file_config: FileConfig, path: &Path) -> Self {
        tracing::debug!(path = %path.display(), "loaded config");
        Self {
            format: file_config.format.unwrap_or_default(),
            source: Some(path.to_path_buf()),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("diary").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("diary").join("config.toml");
            v.push(native);
        }
        v
    }

    fn read_file_config(path: &Path) -> Result<FileConfig> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Layers `--set KEY=VALUE` flags over the saved format.
    pub fn with_overrides(mut self, assignments: &[String]) -> Result<Self> {
        for assignment in assignments {
            self.format
                .apply_assignment(assignment)
                .with_context(|| format!("invalid --set {assignment}"))?;
        }
        Ok(self)
    }

    pub fn resolved_format(&self) -> FormatConfig {
        FormatConfig::resolve(&self.format)
    }

    /// The resolved format as a `[format]` TOML table.
    pub fn resolved_format_toml(&self) -> Result<String> {
        let view = FileConfig {
            format: Some(PartialFormatConfig::from(&self.resolved_format())),
        };
        Ok(toml::to_string(&view)?)
    }
}
