use crate::error::{Error, Result};

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Load sites from the JSON document at `path`, in document order.
pub(crate) fn load(path: &Path) -> Result<Vec<Site>> {
    let content = fs::read_to_string(path).map_err(|e| Error::SourceRead {
        path: path.to_path_buf(),
        cause: e,
    })?;

    parse(&content).map_err(|e| match e {
        ParseError::Syntax(message) => Error::SourceParse {
            path: path.to_path_buf(),
            message,
        },
        ParseError::Shape(message) => Error::SourceShape {
            path: path.to_path_buf(),
            message,
        },
        ParseError::Invalid(message) => Error::SiteValidation {
            path: path.to_path_buf(),
            message,
        },
    })
}

/// Why a site document was rejected, before a path is attached.
#[derive(Debug, PartialEq, Eq)]
enum ParseError {
    Syntax(String),
    Shape(String),
    Invalid(String),
}

fn parse(content: &str) -> std::result::Result<Vec<Site>, ParseError> {
    // IndexMap keeps insertion order; a duplicated key keeps its first
    // position and its last value.
    let entries: IndexMap<String, Value> =
        serde_json::from_str(content).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => ParseError::Shape(e.to_string()),
            _ => ParseError::Syntax(e.to_string()),
        })?;

    let mut errors = Vec::new();
    let mut sites = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let entry = match value {
            Value::Object(entry) => entry,
            other => {
                errors.push(format!(
                    "  - {key}: entry must be an object, found {}",
                    kind(&other)
                ));
                continue;
            }
        };

        match RawSite::from_entry(&key, &entry) {
            Ok(raw) => sites.push(Site::from_raw(key, raw)),
            Err(mut entry_errors) => errors.append(&mut entry_errors),
        }
    }

    if !errors.is_empty() {
        return Err(ParseError::Invalid(errors.join("\n")));
    }

    Ok(sites)
}

/// A site entry as written in the JSON document. Every field is optional.
#[derive(Debug, Default, JsonSchema)]
#[schemars(rename = "Site")]
pub(crate) struct RawSite {
    /// Display name. Defaults to the site key.
    name: Option<String>,
    /// Endpoint URL or path. Defaults to an empty string.
    api: Option<String>,
    /// Detail page URL, if the site has one.
    detail: Option<String>,
    /// Whether the site serves adult content. Defaults to false.
    adult: Option<bool>,
}

impl RawSite {
    /// Extract the known fields of one entry, collecting a message per bad field.
    fn from_entry(
        key: &str,
        entry: &Map<String, Value>,
    ) -> std::result::Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        let raw = Self {
            name: field(entry, key, "name", "a string", &mut errors),
            api: field(entry, key, "api", "a string", &mut errors),
            detail: field(entry, key, "detail", "a string or null", &mut errors),
            adult: field(entry, key, "adult", "a boolean", &mut errors),
        };

        if errors.is_empty() {
            Ok(raw)
        } else {
            Err(errors)
        }
    }
}

/// Read an optional field. Absent and `null` both yield `None`.
fn field<T: DeserializeOwned>(
    entry: &Map<String, Value>,
    key: &str,
    name: &str,
    expected: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    let value = entry.get(name)?;
    match serde_json::from_value::<Option<T>>(value.clone()) {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(format!(
                "  - {key}.{name}: expected {expected}, found {}",
                kind(value)
            ));
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A site with every default applied, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Site {
    pub key: String,
    pub name: String,
    pub api: String,
    pub detail: Option<String>,
    pub adult: bool,
}

impl Site {
    fn from_raw(key: String, raw: RawSite) -> Self {
        Self {
            name: raw.name.unwrap_or_else(|| key.clone()),
            api: raw.api.unwrap_or_default(),
            // An empty detail means "no detail page", same as null.
            detail: raw.detail.filter(|detail| !detail.is_empty()),
            adult: raw.adult.unwrap_or(false),
            key,
        }
    }
}
