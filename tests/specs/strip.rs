//! Behavioral specs for `rtfstrip strip`.

use crate::prelude::*;

/// > Configured groups are removed in place, newlines become spaces
#[test]
fn strips_default_groups_in_place() {
    let project = Project::empty();
    project.file("laudo.rtf", SAMPLE_RTF);

    project
        .rtfstrip(&["strip"])
        .success()
        .stdout(predicates::str::contains("stripped    laudo.rtf (3 groups removed"))
        .stdout(predicates::str::contains("Strip: 1 file, 1 stripped"));

    assert_eq!(project.read("laudo.rtf"), SAMPLE_RTF_STRIPPED);
}

/// > Nested groups go with their parent
#[test]
fn removes_nested_groups_whole() {
    let project = Project::empty();
    project.file("a.rtf", "a{\\footer x{y}z}b");

    project.rtfstrip(&["strip", "a.rtf"]).success();

    assert_eq!(project.read("a.rtf"), "ab");
}

/// > Files without a match are left as they were
#[test]
fn unchanged_files_are_not_rewritten() {
    let project = Project::empty();
    project.file("plain.rtf", "{\\rtf1 nothing to strip}");

    project
        .rtfstrip(&["strip"])
        .success()
        .stdout(predicates::str::contains("unchanged   plain.rtf"));

    assert_eq!(project.read("plain.rtf"), "{\\rtf1 nothing to strip}");
}

/// > --dry-run reports without writing
#[test]
fn dry_run_leaves_files_alone() {
    let project = Project::empty();
    project.file("laudo.rtf", SAMPLE_RTF);

    project
        .rtfstrip(&["strip", "--dry-run"])
        .success()
        .stdout(predicates::str::contains("would strip laudo.rtf"));

    assert_eq!(project.read("laudo.rtf"), SAMPLE_RTF);
}

/// > Only .rtf files are touched, lock files are skipped
#[test]
fn only_rtf_files_are_processed() {
    let project = Project::empty();
    project.file("notes.txt", "{\\info keep}");
    project.file("~$laudo.rtf", "{\\info keep}");
    project.file("sub/deep.rtf", "x{\\info drop}y");

    project.rtfstrip(&["strip"]).success();

    assert_eq!(project.read("notes.txt"), "{\\info keep}");
    assert_eq!(project.read("~$laudo.rtf"), "{\\info keep}");
    assert_eq!(project.read("sub/deep.rtf"), "xy");
}

/// > An unterminated group is kept and reported, the file still succeeds
#[test]
fn unterminated_group_is_reported() {
    let project = Project::empty();
    project.file("broken.rtf", "x{\\info y");

    project
        .rtfstrip(&["strip"])
        .success()
        .stdout(predicates::str::contains("1 unterminated group left"));

    assert_eq!(project.read("broken.rtf"), "x{\\info y");
}

/// > A file that cannot be processed fails with exit code 1; others still run
#[test]
fn invalid_utf8_fails_without_stopping_the_run() {
    let project = Project::empty();
    std::fs::write(project.join("bad.rtf"), [b'{', 0xff, b'}']).unwrap();
    project.file("good.rtf", "a{\\info b}c");

    project
        .rtfstrip(&["strip"])
        .code(1)
        .stdout(predicates::str::contains("FAIL        bad.rtf"))
        .stdout(predicates::str::contains("not valid UTF-8"));

    assert_eq!(project.read("good.rtf"), "ac");
}

/// > JSON output carries totals and per-file entries
#[test]
fn json_output() {
    let project = Project::empty();
    project.file("laudo.rtf", SAMPLE_RTF);

    let output = project.rtfstrip(&["strip", "-o", "json"]).success();
    let value: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(value["strip"]["totals"]["stripped"], 1);
    assert_eq!(value["strip"]["totals"]["groups_removed"], 3);
    assert_eq!(value["strip"]["files"][0]["status"], "stripped");
    assert_eq!(value["strip"]["files"][0]["written"], true);
}

/// > --verbose prints configuration and discovery sections to stderr
#[test]
fn verbose_sections() {
    let project = Project::empty();
    project.file("laudo.rtf", SAMPLE_RTF);

    project
        .rtfstrip(&["strip", "-v"])
        .success()
        .stderr(predicates::str::contains("Configuration:"))
        .stderr(predicates::str::contains("Config: (defaults)"))
        .stderr(predicates::str::contains("Discovery (strip):"));
}

/// > A document that is a single metadata group is kept
#[test]
fn root_group_is_kept() {
    let project = Project::empty();
    project.file("info.rtf", "{\\info only}\n");

    project
        .rtfstrip(&["strip"])
        .success()
        .stdout(predicates::str::contains("normalized  info.rtf (line breaks only)"));

    assert_eq!(project.read("info.rtf"), "{\\info only} ");
}

/// > Gitignored RTF files are still stripped
#[test]
fn gitignored_files_are_stripped() {
    let project = Project::empty();
    project.file(".gitignore", "*.rtf\n");
    project.file("out/laudo.rtf", "a{\\info x}b");

    project
        .rtfstrip(&["strip"])
        .success()
        .stdout(predicates::str::contains("Strip: 1 file, 1 stripped"));

    assert_eq!(project.read("out/laudo.rtf"), "ab");
}
