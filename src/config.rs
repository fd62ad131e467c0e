//! Export configuration (drawio-pages.yaml) parsing.
//!
//! The configuration names the external draw.io binary, the project file
//! and the fixed rendering options handed to the exporter.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DrawioError, Result};

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "drawio-pages.yaml";

/// Default output raster width.
pub const DEFAULT_WIDTH: u32 = 1200;

/// Export configuration loaded from drawio-pages.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Location of the draw.io executable.
    #[serde(default = "default_tool_path")]
    pub tool_path: PathBuf,

    /// Project file to export when no input is given on the command line.
    pub input_file: Option<PathBuf>,

    /// Output raster width.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Request a transparent background.
    #[serde(default = "default_transparent")]
    pub transparent: bool,

    /// Directory for exported images. Current directory if unset.
    pub output_dir: Option<PathBuf>,
}

fn default_tool_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/draw.io.app/Contents/MacOS/draw.io")
    } else if cfg!(windows) {
        PathBuf::from("draw.io.exe")
    } else {
        PathBuf::from("drawio")
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_transparent() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tool_path: default_tool_path(),
            input_file: None,
            width: default_width(),
            transparent: default_transparent(),
            output_dir: None,
        }
    }
}

impl ExportConfig {
    /// Load configuration from a YAML file.
    ///
    /// Relative `input_file` and `output_dir` are resolved against the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DrawioError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.input_file = config.input_file.map(|p| base.join(p));
            config.output_dir = config.output_dir.map(|p| base.join(p));
        }
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| DrawioError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config named on the command line, or the one in the
    /// current directory, or fall back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(CONFIG_FILENAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reject settings the exporter cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(DrawioError::Config {
                message: "width must be greater than 0".to_string(),
                help: Some(format!("The default width is {}", DEFAULT_WIDTH)),
            });
        }
        if self.tool_path.as_os_str().is_empty() {
            return Err(DrawioError::Config {
                message: "tool_path is empty".to_string(),
                help: Some("Point tool_path at the draw.io executable".to_string()),
            });
        }
        Ok(())
    }

    /// Path an exported page is written to.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Render as YAML, as written by `drawio-pages init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| DrawioError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();

        assert_eq!(config.width, 1200);
        assert!(config.transparent);
        assert!(config.input_file.is_none());
        assert!(config.output_dir.is_none());
        assert!(!config.tool_path.as_os_str().is_empty());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(ExportConfig::parse("").unwrap(), ExportConfig::default());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = ExportConfig::parse("width: 800").unwrap();

        assert_eq!(config.width, 800);
        assert!(config.transparent);
        assert_eq!(config.tool_path, default_tool_path());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
tool_path: /opt/drawio/drawio
input_file: "Outline parts of JupyterLab UI.drawio"
width: 2400
transparent: false
output_dir: images
"#;
        let config = ExportConfig::parse(yaml).unwrap();

        assert_eq!(config.tool_path, PathBuf::from("/opt/drawio/drawio"));
        assert_eq!(
            config.input_file,
            Some(PathBuf::from("Outline parts of JupyterLab UI.drawio"))
        );
        assert_eq!(config.width, 2400);
        assert!(!config.transparent);
        assert_eq!(config.output_dir, Some(PathBuf::from("images")));
    }

    #[test]
    fn test_parse_rejects_zero_width() {
        let err = ExportConfig::parse("width: 0").unwrap_err();
        assert!(matches!(err, DrawioError::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        let err = ExportConfig::parse("width: [not a number").unwrap_err();
        assert!(matches!(err, DrawioError::Config { .. }));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "input_file: ui.drawio\noutput_dir: out\n").unwrap();

        let config = ExportConfig::load(&path).unwrap();

        assert_eq!(config.input_file, Some(dir.path().join("ui.drawio")));
        assert_eq!(config.output_dir, Some(dir.path().join("out")));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ExportConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, DrawioError::Io { .. }));
    }

    #[test]
    fn test_output_path() {
        let mut config = ExportConfig::default();
        assert_eq!(config.output_path("Cover.png"), PathBuf::from("Cover.png"));

        config.output_dir = Some(PathBuf::from("out"));
        assert_eq!(config.output_path("Cover.png"), PathBuf::from("out/Cover.png"));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_settings() {
        let config = ExportConfig {
            width: 640,
            transparent: false,
            ..Default::default()
        };
        let parsed = ExportConfig::parse(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
