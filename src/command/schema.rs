use crate::error::{Error, Result};
use crate::site::RawSite;

use std::collections::BTreeMap;

/// Print the JSON Schema of the site config input.
pub(crate) fn run() -> Result<()> {
    println!("{}", schema_json()?);
    Ok(())
}

fn schema_json() -> Result<String> {
    let mut schema = schemars::schema_for!(BTreeMap<String, RawSite>);
    schema.insert("title".to_string(), "SiteConfig".into());
    schema.insert(
        "description".to_string(),
        "API sites keyed by site identifier, in the order they are generated.".into(),
    );
    serde_json::to_string_pretty(&schema).map_err(|e| Error::Internal(e.to_string()))
}
