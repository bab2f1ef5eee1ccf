// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit status of an `rtfstrip` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every file was processed.
    Success,
    /// One or more files failed; the rest were processed.
    Failed,
    /// Configuration or usage error; nothing was processed.
    ConfigError,
    /// Unexpected internal error.
    InternalError,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failed => 1,
            ExitCode::ConfigError => 2,
            ExitCode::InternalError => 3,
        }
    }

    /// `Failed` when any file failed, `Success` otherwise.
    pub fn from_failures(failures: usize) -> Self {
        if failures > 0 {
            ExitCode::Failed
        } else {
            ExitCode::Success
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
