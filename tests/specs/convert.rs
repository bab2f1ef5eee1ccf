//! Behavioral specs for `rtfstrip convert` and `rtfstrip run`.
//!
//! A `/bin/sh` script stands in for LibreOffice.

#![cfg(unix)]

use crate::prelude::*;

const COPY_SCRIPT: &str = "cp \"$2\" \"${2%.*}.rtf\"\n";

/// > Documents with allowed extensions are converted next to the source
#[test]
fn converts_documents_next_to_source() {
    let project = Project::empty();
    project.sh_converter(COPY_SCRIPT);
    project.file("in/laudo.doc", "{\\rtf1 {\\info m}Body}");
    project.file("in/skip.pdf", "x");

    project
        .rtfstrip(&["convert", "in"])
        .success()
        .stdout(predicates::str::contains("converted   in/laudo.doc -> in/laudo.rtf"))
        .stdout(predicates::str::contains("Convert: 1 document, 1 converted, 0 failed"));

    assert_eq!(project.read("in/laudo.rtf"), "{\\rtf1 {\\info m}Body}");
    assert!(!project.join("in/skip.rtf").exists());
}

/// > Converter output on stderr marks the document failed (exit 1)
#[test]
fn stderr_output_is_failure() {
    let project = Project::empty();
    project.sh_converter("echo 'Error: source file could not be loaded' >&2\n");
    project.file("laudo.doc", "x");

    project
        .rtfstrip(&["convert"])
        .code(1)
        .stdout(predicates::str::contains("FAIL        laudo.doc"))
        .stdout(predicates::str::contains("could not be loaded"));
}

/// > A nonzero converter exit marks the document failed
#[test]
fn nonzero_exit_is_failure() {
    let project = Project::empty();
    project.sh_converter("exit 3\n");
    project.file("laudo.docx", "x");

    project.rtfstrip(&["convert"]).code(1);
}

/// > A converter that cannot be found is a configuration error
#[test]
fn missing_converter_is_config_error() {
    let project = Project::empty();
    project.file("laudo.doc", "x");

    project
        .rtfstrip(&["convert", "--tool", "./no-such-soffice"])
        .code(2)
        .stderr(predicates::str::contains("no-such-soffice"));
}

/// > run converts and then strips the resulting RTF files
#[test]
fn run_converts_then_strips() {
    let project = Project::empty();
    project.sh_converter(COPY_SCRIPT);
    project.file("in/laudo.doc", "{\\rtf1 {\\info m}Body}");

    project
        .rtfstrip(&["run", "in"])
        .success()
        .stdout(predicates::str::contains("Convert: 1 document"))
        .stdout(predicates::str::contains("Strip: 1 file, 1 stripped"));

    assert_eq!(project.read("in/laudo.rtf"), "{\\rtf1 Body}");
    assert_eq!(project.read("in/laudo.doc"), "{\\rtf1 {\\info m}Body}");
}
