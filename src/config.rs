use crate::dart::{self, DartStyle};
use crate::error::{Error, Result};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Settings file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sitegen.toml";

/// Default site config, relative to the working directory.
pub const DEFAULT_INPUT: &str = "../config/api_sites.json";

/// Default generated file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "../lib/config/api_config.dart";

/// Load settings.
///
/// With `explicit` set, that file must exist. Otherwise `sitegen.toml` in the
/// working directory is used when present, and built-in defaults when not.
pub(crate) fn load(explicit: Option<&Path>) -> Result<Settings> {
    let config_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)?;
    let base = config_path.parent().unwrap_or(Path::new(""));
    parse(&content, base)
}

/// Parse settings text. Relative paths are resolved against `base`.
fn parse(content: &str, base: &Path) -> Result<Settings> {
    // Parse into RawConfig (permissive, all fields optional)
    let raw: RawConfig = toml::from_str(content).map_err(|e| Error::ConfigParse {
        message: e.message().to_string(),
    })?;

    let mut settings = Settings::try_from(raw)?;
    settings.input = base.join(&settings.input);
    settings.output = base.join(&settings.output);
    Ok(settings)
}

// Raw types for permissive TOML parsing. Missing keys become defaults so that
// validation can report every problem at once.

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    paths: RawPaths,
    #[serde(default)]
    dart: RawDart,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawPaths {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawDart {
    type_name: Option<String>,
    list_name: Option<String>,
    import: Option<String>,
    source_label: Option<String>,
}

/// Resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub style: DartStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            style: DartStyle::default(),
        }
    }
}

impl Settings {
    /// Apply command-line overrides, which win over the settings file.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

impl TryFrom<RawConfig> for Settings {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let mut errors = Vec::new();
        let defaults = Settings::default();

        let input = raw.paths.input.unwrap_or(defaults.input);
        if input.as_os_str().is_empty() {
            errors.push("  - paths.input: must not be empty".to_string());
        }

        let output = raw.paths.output.unwrap_or(defaults.output);
        if output.as_os_str().is_empty() {
            errors.push("  - paths.output: must not be empty".to_string());
        }

        let type_name = raw.dart.type_name.unwrap_or(defaults.style.type_name);
        if !dart::is_identifier(&type_name) {
            errors.push(format!(
                "  - dart.type_name: not a valid Dart identifier: '{type_name}'"
            ));
        }

        let list_name = raw.dart.list_name.unwrap_or(defaults.style.list_name);
        if !dart::is_identifier(&list_name) {
            errors.push(format!(
                "  - dart.list_name: not a valid Dart identifier: '{list_name}'"
            ));
        }

        let import = raw.dart.import.unwrap_or(defaults.style.import);
        if import.trim().is_empty() {
            errors.push("  - dart.import: must not be empty".to_string());
        }

        let source_label = raw
            .dart
            .source_label
            .unwrap_or(defaults.style.source_label);
        if source_label.trim().is_empty() {
            errors.push("  - dart.source_label: must not be empty".to_string());
        } else if source_label.chars().any(char::is_control) {
            errors.push(
                "  - dart.source_label: must fit on one line (no control characters)".to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(Error::ConfigValidation {
                message: errors.join("\n"),
            });
        }

        Ok(Settings {
            input,
            output,
            style: DartStyle {
                type_name,
                list_name,
                import,
                source_label,
            },
        })
    }
}
