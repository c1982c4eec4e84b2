//! Integration tests for the env-to-snippet pipeline.
//!
//! Each fixture pair under `fixtures/` is an input `.env` file and the exact
//! snippet text expected for it (including the trailing newline the CLI
//! prints).

use std::fs;
use std::path::Path;

use envseed_codegen::{render_snippet, SnippetConfig};

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> &'static Path {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/codegen -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
}

fn read_fixture(file: &str) -> String {
    let path = workspace_root().join("fixtures").join(file);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture '{}': {}", path.display(), e))
}

fn assert_fixture(name: &str) {
    let env = envseed_core::parse(&read_fixture(&format!("{}.env", name)));
    let rendered = render_snippet(&env, &SnippetConfig::default()).expect("render failed");
    let expected = read_fixture(&format!("{}.expected.js", name));
    assert_eq!(format!("{}\n", rendered), expected, "fixture '{}'", name);
}

#[test]
fn test_basic_fixture() {
    assert_fixture("basic");
}

#[test]
fn test_comments_only_fixture() {
    assert_fixture("comments_only");
}

#[test]
fn test_messy_fixture() {
    // CRLF endings, duplicate keys, quotes, malformed lines
    assert_fixture("messy");
}

#[test]
fn test_snippet_always_has_template_parts() {
    for name in ["basic", "comments_only", "messy"] {
        let env = envseed_core::parse(&read_fixture(&format!("{}.env", name)));
        let out = render_snippet(&env, &SnippetConfig::default()).unwrap();
        assert!(out.contains("function seedPropertiesFromEnv() {"));
        assert!(out.contains("PropertiesService.getScriptProperties().setProperties("));
        assert!(out.contains("\n}\n"));
        assert!(out.ends_with(
            "// Execute uma única vez no Apps Script para sincronizar as Script Properties."
        ));
    }
}

#[test]
fn test_embedded_json_parses_back_to_mapping() {
    let env = envseed_core::parse(&read_fixture("messy.env"));
    let out = render_snippet(&env, &SnippetConfig::default()).unwrap();

    let start = out.find("setProperties(").unwrap() + "setProperties(".len();
    let end = out.rfind(");").unwrap();
    let value: serde_json::Value = serde_json::from_str(&out[start..end]).unwrap();

    assert_eq!(value["API_URL"], "https://example.com/v2");
    assert_eq!(value["TOKEN"], "\"quoted\"");
    assert_eq!(value.as_object().unwrap().len(), 3);
}
