//! Error handling tests.
//!
//! These tests cover every error variant, its conversions, and how errors
//! surface from the fallible edges of the library.

use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use textsift::error::{TextSiftError, TextSiftResult};
use textsift::{format_receipt, smart_replace, CleanOperation, Config, ReplaceOptions};

#[test]
fn test_io_error_display() {
    let err = TextSiftError::Io {
        path: PathBuf::from("/test/textsift.toml"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    let display = err.to_string();
    assert!(display.contains("/test/textsift.toml"));
    assert!(display.contains("IO error"));
    assert!(display.contains("denied"));
    assert!(err.source().is_some());
}

#[test]
fn test_config_error_display() {
    let err = TextSiftError::Config {
        path: PathBuf::from("bad.toml"),
        reason: "expected a table".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid configuration in 'bad.toml': expected a table"
    );
    assert!(err.source().is_none());
}

#[test]
fn test_pattern_error_display() {
    let err = TextSiftError::PatternError {
        pattern: "(?i)\\b(\\b".to_string(),
        reason: "unclosed group".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("Pattern error"));
    assert!(display.contains("unclosed group"));
}

#[test]
fn test_invalid_input_display() {
    let err = TextSiftError::InvalidInput {
        parameter: "prices".to_string(),
        reason: "length mismatch".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("prices"));
    assert!(display.contains("length mismatch"));
}

#[test]
fn test_unknown_operation_from_parse() {
    let err = "uppercase".parse::<CleanOperation>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown cleaning operation 'uppercase'");
}

#[test]
fn test_receipt_mismatch_reports_parameter() {
    let err = format_receipt(&["Tea"], &[1.5, 2.0], &[1]).unwrap_err();
    match err {
        TextSiftError::InvalidInput { parameter, .. } => assert!(!parameter.is_empty()),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_smart_replace_accepts_metacharacters() {
    // Contraction sources are escaped, so no input can produce a bad pattern.
    let options = ReplaceOptions {
        contractions: vec![textsift::Contraction::new("(", "paren")],
        ..Default::default()
    };
    assert!(smart_replace("a ( b", &options).is_ok());
}

mod config_errors {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() -> TextSiftResult<()> {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("absent.toml"))?;
        assert_eq!(config.logging.level, "warn");
        Ok(())
    }

    #[test]
    fn test_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("textsift.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        match err {
            TextSiftError::Config { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_value_type() {
        let err = Config::from_toml("[replace]\ncensor_phone = \"yes\"", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, TextSiftError::Config { .. }));
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, TextSiftError::Io { .. }));
    }
}
