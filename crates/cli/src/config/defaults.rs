// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these functions via their `default_*` methods.

/// Config file names.
pub mod files {
    /// Config file looked up from the working directory upward.
    pub const CONFIG_NAME: &str = "rtfstrip.toml";

    /// Legacy config file read from the working directory only.
    pub const LEGACY_CONFIG_NAME: &str = "config.ini";
}

/// Document converter defaults.
pub mod converter {
    /// Converter location checked before searching `PATH`.
    pub const SYSTEM_PATH: &str = "/usr/bin/soffice";

    /// Executable names searched on `PATH`.
    pub const PROGRAM_NAMES: &[&str] = &["soffice", "libreoffice"];

    /// Arguments placed before the output folder and the source file.
    pub fn args() -> Vec<String> {
        ["--headless", "--convert-to", "rtf", "--outdir"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

/// Source document extensions handed to the converter.
pub mod extensions {
    pub fn documents() -> Vec<String> {
        [".doc", ".docx", ".odt", ".html", ".txt"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Extension of converted documents.
    pub const RTF: &str = "rtf";
}

/// RTF stripping defaults.
pub mod rtf {
    /// Group openers removed by default: headers, footers, theme and color
    /// data, style and list tables, embedded pictures, document metadata.
    pub fn tags() -> Vec<String> {
        [
            r"{\headerr",
            r"{\footerr",
            r"{\*\themedata",
            r"{\*\colorschememapping",
            r"{\*\shppict",
            r"{\colortbl",
            r"{\stylesheet",
            r"{\*\listtable",
            r"{\listoverridetable",
            r"{\*\generator",
            r"{\info",
            r"{\*\pgdsctbl",
            r"{\shp",
            r"{\nonshppict",
            r"{\pict",
            r"{\footer",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}

/// Walker defaults.
pub mod walk {
    /// Default max directory depth.
    pub const MAX_DEPTH: usize = 100;
}
