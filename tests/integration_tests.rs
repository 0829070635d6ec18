//! Integration tests using test data fixtures
//!
//! Each fixture in testdata/ holds a JSON config on the first line, the input
//! SVG, a `---` separator, and the expected output.
//! Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

use svg2html::{transform, transform_file, TransformConfig};

/// Get the path to the test data directory
fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Parse a fixture into (config, input, expected_output)
fn parse_test_file(content: &str) -> Option<(TransformConfig, String, String)> {
    let parts: Vec<&str> = content.splitn(2, "\n---\n").collect();
    if parts.len() != 2 {
        return None;
    }
    let (config_line, input) = parts[0].split_once('\n')?;
    let config: TransformConfig = serde_json::from_str(config_line).ok()?;
    Some((config, input.to_string(), parts[1].trim_end().to_string()))
}

/// Run a specific fixture file
fn run_transform_test(test_name: &str) {
    let test_file = testdata_dir().join(format!("{}.txt", test_name));
    let content = fs::read_to_string(&test_file)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", test_file, e));

    let (config, input, expected) = parse_test_file(&content)
        .unwrap_or_else(|| panic!("Failed to parse test file: {:?}", test_file));

    let actual = transform(&input, &config);

    if expected != actual {
        eprintln!("=== Test: {} ===", test_name);
        eprintln!("Input:\n{}", input);
        eprintln!("\n--- Expected ---");
        eprintln!("{}", expected);
        eprintln!("\n--- Actual ---");
        eprintln!("{}", actual);
        eprintln!("\n--- Diff ---");

        let expected_lines: Vec<_> = expected.lines().collect();
        let actual_lines: Vec<_> = actual.lines().collect();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).unwrap_or(&"<missing>");
            let act = actual_lines.get(i).unwrap_or(&"<missing>");
            if exp != act {
                eprintln!("Line {}: expected {:?}", i + 1, exp);
                eprintln!("Line {}: actual   {:?}", i + 1, act);
            }
        }

        panic!("Output mismatch for test: {}", test_name);
    }
}

/// Macro to generate fixture test functions
macro_rules! transform_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<test_ $name>]() {
                run_transform_test(stringify!($name));
            }
        }
    };
}

transform_test!(icon_full);
transform_test!(multiline_attributes);
transform_test!(namespace_prefixes);
transform_test!(recolor_stroke_fill);
transform_test!(resize_svg_tag);

// =============================================================================
// File loading
// =============================================================================

#[test]
fn test_transform_file_icon() {
    let config = TransformConfig::new("#FF0000");
    let html = transform_file(testdata_dir().join("icon.svg"), &config).unwrap();

    assert!(html.contains(r#"width="20""#));
    assert!(html.contains(r#"height="20""#));
    assert!(html.contains(r##"fill="#FF0000""##));
}

// =============================================================================
// Output well-formedness
// =============================================================================

#[test]
fn test_transformed_icon_still_parses_as_xml() {
    let config = TransformConfig::new("#FF0000");
    let html = transform_file(testdata_dir().join("icon.svg"), &config).unwrap();

    let doc = roxmltree::Document::parse(&html).expect("transformed SVG should stay well-formed");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("viewBox"), Some("0 0 20 20"));
}
