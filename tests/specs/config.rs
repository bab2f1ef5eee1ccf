//! Behavioral specs for configuration loading.

use crate::prelude::*;

/// > [rtf] tags replace the built-in list
#[test]
fn custom_tags_are_used() {
    let project = Project::empty();
    project.config("[rtf]\ntags = ['{\\custom']\n");
    project.file("a.rtf", "a{\\custom x}b{\\info y}");

    project.rtfstrip(&["strip"]).success();

    assert_eq!(project.read("a.rtf"), "ab{\\info y}");
}

/// > A legacy config.ini in the current directory is honored
#[test]
fn legacy_config_ini_is_loaded() {
    let project = Project::empty();
    project.file("config.ini", "[rtf]\ntags = ['{\\custom']\n");
    project.file("a.rtf", "a{\\custom x}b{\\info y}");

    project.rtfstrip(&["strip"]).success();

    assert_eq!(project.read("a.rtf"), "ab{\\info y}");
}

/// > --config selects a file explicitly
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("other.toml", "[rtf]\ntags = ['{\\custom']\n");
    project.file("a.rtf", "a{\\custom x}b");

    project
        .rtfstrip(&["strip", "-C", "other.toml"])
        .success();

    assert_eq!(project.read("a.rtf"), "ab");
}

/// > RTFSTRIP_CONFIG selects a file explicitly
#[test]
fn config_from_environment() {
    let project = Project::empty();
    project.file("other.toml", "[rtf]\ntags = ['{\\custom']\n");
    project.file("a.rtf", "a{\\custom x}b");

    rtfstrip_cmd()
        .arg("strip")
        .env("RTFSTRIP_CONFIG", project.join("other.toml"))
        .current_dir(project.path())
        .assert()
        .success();

    assert_eq!(project.read("a.rtf"), "ab");
}

/// > Unknown keys are errors (exit code 2)
#[test]
fn unknown_key_fails() {
    let project = Project::empty();
    project.config("[rtf]\ntags = []\nunknown = true\n");

    project
        .rtfstrip(&["strip"])
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Empty tags are rejected
#[test]
fn empty_tag_fails() {
    let project = Project::empty();
    project.config("[rtf]\ntags = ['{\\info', '']\n");

    project
        .rtfstrip(&["strip"])
        .code(2)
        .stderr(predicates::str::contains("rtfstrip.toml"));
}

/// > A missing explicit config is an error
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();

    project
        .rtfstrip(&["strip", "--config", "nope.toml"])
        .code(2)
        .stderr(predicates::str::contains("nope.toml"));
}
