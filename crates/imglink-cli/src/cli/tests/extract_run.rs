//! Tests for run and extract subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use imglink_core::config::{CellErrorPolicy, ImglinkConfig};
use std::path::Path;

#[test]
fn cli_parse_run_defaults() {
    match parse(&["imglink", "run", "parts.xlsx"]) {
        CliCommand::Run {
            source,
            extract,
            dest,
            urls_out,
            failure_log,
        } => {
            assert_eq!(source, Path::new("parts.xlsx"));
            assert!(extract.label.is_none());
            assert!(!extract.strict);
            assert!(dest.is_none());
            assert!(urls_out.is_none());
            assert!(failure_log.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_all_options() {
    match parse(&[
        "imglink",
        "run",
        "parts.xlsx",
        "--label",
        "Photo",
        "--strict",
        "--dest",
        "/srv/img",
        "--urls-out",
        "urls.txt",
        "--failure-log",
        "failed.txt",
    ]) {
        CliCommand::Run {
            extract,
            dest,
            urls_out,
            failure_log,
            ..
        } => {
            assert_eq!(extract.label.as_deref(), Some("Photo"));
            assert!(extract.strict);
            assert_eq!(dest.as_deref(), Some(Path::new("/srv/img")));
            assert_eq!(urls_out.as_deref(), Some(Path::new("urls.txt")));
            assert_eq!(failure_log.as_deref(), Some(Path::new("failed.txt")));
        }
        _ => panic!("expected Run with options"),
    }
}

#[test]
fn cli_parse_run_requires_source() {
    assert!(Cli::try_parse_from(["imglink", "run"]).is_err());
}

#[test]
fn cli_parse_extract_output() {
    match parse(&["imglink", "extract", "book.xlsx", "-o", "out.txt", "-l", "Img"]) {
        CliCommand::Extract {
            source,
            extract,
            output,
        } => {
            assert_eq!(source, Path::new("book.xlsx"));
            assert_eq!(extract.label.as_deref(), Some("Img"));
            assert_eq!(output.as_deref(), Some(Path::new("out.txt")));
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn extract_args_override_config() {
    let mut cfg = ImglinkConfig::default();
    let args = match parse(&["imglink", "extract", "b.xlsx", "--label", "Pic", "--strict"]) {
        CliCommand::Extract { extract, .. } => extract,
        _ => panic!("expected Extract"),
    };
    args.apply(&mut cfg);
    assert_eq!(cfg.target_label, "Pic");
    assert_eq!(cfg.missing_formula, CellErrorPolicy::Abort);
    assert_eq!(cfg.unparsable_formula, CellErrorPolicy::Abort);
}

#[test]
fn global_config_flag() {
    let cli = Cli::try_parse_from(["imglink", "extract", "b.xlsx", "--config", "/etc/imglink.toml"])
        .unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/imglink.toml")));
}
