//! Integration tests for DelimitedFormat defaults, parsing and JSON loading.

use std::io::Write;
use std::str::FromStr;

use labeled_matrix::config::load_format_config;
use labeled_matrix::{DelimitedFormat, Delimiter, MatrixError};

// ---------------------------------------------------------------------------
// Defaults & constructors
// ---------------------------------------------------------------------------

#[test]
fn default_format_is_labeled_tsv() {
    let cfg = DelimitedFormat::default();
    assert_eq!(cfg.delimiter, Delimiter::Tab);
    assert!(cfg.column_labels);
    assert!(cfg.row_labels);
    assert!(cfg.corner_label.is_empty());
    assert_eq!(cfg, DelimitedFormat::tsv());
}

#[test]
fn unlabeled_format_has_no_labels() {
    let cfg = DelimitedFormat::unlabeled(Delimiter::Pipe);
    assert!(!cfg.column_labels);
    assert!(!cfg.row_labels);
    assert_eq!(cfg.delimiter.as_byte(), b'|');
}

// ---------------------------------------------------------------------------
// Delimiter parsing
// ---------------------------------------------------------------------------

#[test]
fn delimiter_from_str() {
    assert_eq!(Delimiter::from_str("TAB").unwrap(), Delimiter::Tab);
    assert_eq!(Delimiter::from_str("csv").unwrap(), Delimiter::Comma);
    assert_eq!(Delimiter::from_str(";").unwrap(), Delimiter::Semicolon);
    assert_eq!(Delimiter::from_str("space").unwrap(), Delimiter::Space);
    assert!(Delimiter::from_str("colon").is_err());
}

// ---------------------------------------------------------------------------
// JSON config files
// ---------------------------------------------------------------------------

#[test]
fn format_serializes_to_json() {
    let cfg = DelimitedFormat::csv().with_corner_label("id");
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("\"delimiter\": \"comma\""));
    assert!(json.contains("corner_label"));

    let back: DelimitedFormat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn load_partial_config_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "delimiter": "semicolon", "row_labels": false }}"#).unwrap();

    let cfg = load_format_config(file.path()).unwrap();
    assert_eq!(cfg.delimiter, Delimiter::Semicolon);
    assert!(!cfg.row_labels);
    assert!(cfg.column_labels);
}

#[test]
fn load_invalid_config_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "delimiter": "colon" }}"#).unwrap();
    assert!(matches!(
        load_format_config(file.path()),
        Err(MatrixError::Config(_))
    ));
}

#[test]
fn load_missing_config_errors() {
    assert!(matches!(
        load_format_config("/nonexistent/path/format.json"),
        Err(MatrixError::Io(_))
    ));
}
