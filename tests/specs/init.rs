//! Behavioral specs for `rtfstrip init`.

use crate::prelude::*;

/// > init creates rtfstrip.toml in the current directory
#[test]
fn init_creates_config() {
    let project = Project::empty();

    project
        .rtfstrip(&["init"])
        .success()
        .stdout(predicates::str::contains("Created rtfstrip.toml"));

    let config = project.read("rtfstrip.toml");
    assert!(config.contains("[rtf]"));
    assert!(config.contains("[extensions]"));
    assert!(config.contains("--headless"));
}

/// > The written config loads and strips like the defaults
#[test]
fn init_config_round_trips() {
    let project = Project::empty();
    project.rtfstrip(&["init"]).success();
    project.file("laudo.rtf", SAMPLE_RTF);

    project.rtfstrip(&["strip"]).success();

    assert_eq!(project.read("laudo.rtf"), SAMPLE_RTF_STRIPPED);
}

/// > Refuses to overwrite without --force
#[test]
fn init_refuses_to_overwrite_without_force() {
    let project = Project::empty();
    project.config("# existing\n");

    project
        .rtfstrip(&["init"])
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));

    assert_eq!(project.read("rtfstrip.toml"), "# existing\n");
}

/// > --force overwrites
#[test]
fn init_force_overwrites() {
    let project = Project::empty();
    project.config("# existing\n");

    project.rtfstrip(&["init", "--force"]).success();

    assert!(project.read("rtfstrip.toml").contains("[rtf]"));
}
