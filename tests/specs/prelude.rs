//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running rtfstrip against temporary projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A small RTF document with a color table, metadata and a header.
pub const SAMPLE_RTF: &str = "{\\rtf1\\ansi\n{\\colortbl;\\red0\\green0\\blue0;}\n{\\info{\\title Laudo}{\\author x}}\n{\\headerr {\\pard Page\\par}}\n\\pard Body text\\par\n}\n";

/// `SAMPLE_RTF` after stripping with the default tags.
pub const SAMPLE_RTF_STRIPPED: &str = "{\\rtf1\\ansi    \\pard Body text\\par } ";

/// Returns a Command configured to run the rtfstrip binary
pub fn rtfstrip_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rtfstrip"));
    cmd.env_remove("RTFSTRIP_CONFIG")
        .env_remove("RTFSTRIP_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A temporary project directory.
///
/// Contains an empty `.git` so config discovery never escapes it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Write rtfstrip.toml.
    pub fn config(&self, content: &str) {
        self.file("rtfstrip.toml", content);
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).unwrap()
    }

    /// Run rtfstrip with `args` inside the project.
    pub fn rtfstrip(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        rtfstrip_cmd()
            .args(args)
            .current_dir(self.path())
            .assert()
    }

    /// Write a converter script run through `/bin/sh` and a config using it.
    ///
    /// The script receives `<outdir> <source>` like LibreOffice does.
    pub fn sh_converter(&self, script: &str) {
        self.file("convert.sh", script);
        let script_path = self.join("convert.sh");
        self.config(&format!(
            "[libreoffice]\npath = \"/bin/sh\"\nargs = ['{}']\n",
            script_path.display()
        ));
    }
}
