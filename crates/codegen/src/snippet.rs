//! Apps Script snippet emission.
//!
//! Output shape:
//!
//! ```text
//! function seedPropertiesFromEnv() {
//!   PropertiesService.getScriptProperties().setProperties({
//!     "KEY": "value"
//!   });
//! }
//!
//! // Execute uma única vez no Apps Script para sincronizar as Script Properties.
//! ```

use envseed_core::EnvMap;

use crate::CodegenError;

/// Name of the generated Apps Script function.
pub const DEFAULT_FUNCTION_NAME: &str = "seedPropertiesFromEnv";

/// Note appended after the function telling the operator how to use it.
pub const DEFAULT_NOTE: &str =
    "// Execute uma única vez no Apps Script para sincronizar as Script Properties.";

/// Body indentation inside the generated function.
const INDENT: &str = "  ";

/// Configuration for snippet generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetConfig {
    pub function_name: String,
    pub note: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            note: DEFAULT_NOTE.to_string(),
        }
    }
}

/// Pretty-print the mapping as a JSON object with 2-space indentation.
pub fn serialize_properties(env: &EnvMap) -> Result<String, CodegenError> {
    Ok(serde_json::to_string_pretty(env)?)
}

/// Render the complete snippet, without a trailing newline.
pub fn render_snippet(env: &EnvMap, config: &SnippetConfig) -> Result<String, CodegenError> {
    let serialized = serialize_properties(env)?;
    // The first line follows the opening parenthesis; the rest shift under
    // the function body.
    let embedded = serialized.replace('\n', &format!("\n{INDENT}"));

    let lines = [
        format!("function {}() {{", config.function_name),
        format!("{INDENT}PropertiesService.getScriptProperties().setProperties({embedded});"),
        "}".to_string(),
        String::new(),
        config.note.clone(),
    ];

    tracing::debug!(
        properties = env.len(),
        function = %config.function_name,
        "rendered snippet"
    );

    Ok(lines.join("\n"))
}
