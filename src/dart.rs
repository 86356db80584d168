//! Dart source rendering for site lists.

use crate::site::Site;

/// Default record type constructed for each site.
pub const DEFAULT_TYPE_NAME: &str = "ApiSite";

/// Default identifier the generated list is bound to.
pub const DEFAULT_LIST_NAME: &str = "apiSites";

/// Default import pulling in the record type definition.
pub const DEFAULT_IMPORT: &str = "../models/api_site.dart";

/// Default file named in the header as the place to add sites.
pub const DEFAULT_SOURCE_LABEL: &str = "config/api_sites.json";

/// Naming used in the generated Dart file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DartStyle {
    pub type_name: String,
    pub list_name: String,
    pub import: String,
    /// Named in the header comment; independent of the path actually read.
    pub source_label: String,
}

impl Default for DartStyle {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE_NAME.to_string(),
            list_name: DEFAULT_LIST_NAME.to_string(),
            import: DEFAULT_IMPORT.to_string(),
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
        }
    }
}

/// Render the complete Dart file for `sites`.
pub(crate) fn render(sites: &[Site], style: &DartStyle) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "// Generated by sitegen. To add a site, edit {} and regenerate.\n",
        style.source_label
    ));
    out.push_str(&format!("import {};\n", quote(&style.import)));
    out.push_str(&format!(
        "final List<{}> {} = [\n",
        style.type_name, style.list_name
    ));

    for site in sites {
        out.push_str("  ");
        out.push_str(&record(site, &style.type_name));
        out.push_str(",\n");
    }

    out.push_str("];\n");
    out
}

/// Render a single constructor-style record literal, without the separator.
fn record(site: &Site, type_name: &str) -> String {
    let detail = match &site.detail {
        Some(detail) => quote(detail),
        None => "null".to_string(),
    };
    format!(
        "{type_name}(key: {}, name: {}, api: {}, detail: {detail}, adult: {})",
        quote(&site.key),
        quote(&site.name),
        quote(&site.api),
        site.adult,
    )
}

/// Quote `value` as a single-quoted Dart string literal.
pub(crate) fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            // `$` starts string interpolation in Dart
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Returns true if `name` is usable as a Dart identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
