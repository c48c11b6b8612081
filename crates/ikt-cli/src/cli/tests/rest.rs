//! Tests for edit-link, options, presets, completions and man.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_edit_link() {
    match parse(&["ikt", "edit-link", "https://img.example/a.jpg"]) {
        CliCommand::EditLink { image_url } => assert_eq!(image_url, "https://img.example/a.jpg"),
        _ => panic!("expected EditLink"),
    }
}

#[test]
fn cli_parse_options() {
    match parse(&["ikt", "options"]) {
        CliCommand::Options => {}
        _ => panic!("expected Options"),
    }
}

#[test]
fn cli_parse_presets() {
    match parse(&["ikt", "presets"]) {
        CliCommand::Presets => {}
        _ => panic!("expected Presets"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["ikt", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["ikt", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
