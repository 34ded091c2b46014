//! Template context surface.
//!
//! Page templates receive the catalog under the `versions` key of their HTML
//! context, next to whatever else the documentation build already put there.

use crate::catalog::VersionCatalog;
use crate::error::{DocVersionsError, Result};
use serde_json::{Map, Value};

/// Key under which the catalog is exposed to templates.
pub const CONTEXT_KEY: &str = "versions";

/// Insert the catalog into an HTML context object.
///
/// A `null` context becomes an empty object first. An existing `versions`
/// entry is replaced; other keys are left untouched.
pub fn inject(html_context: &mut Value, catalog: &VersionCatalog) -> Result<()> {
    if html_context.is_null() {
        *html_context = Value::Object(Map::new());
    }

    let Value::Object(map) = html_context else {
        return Err(DocVersionsError::config(
            "HTML context must be a JSON object",
        ));
    };

    map.insert(CONTEXT_KEY.to_string(), serde_json::to_value(catalog)?);
    Ok(())
}

/// Render a context value as pretty-printed JSON.
pub fn to_json_string(html_context: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(html_context)?)
}
