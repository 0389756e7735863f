// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use std::{fmt, io};

#[derive(Debug)]
pub enum NrdbError {
    Io(io::Error),
    Format(String),
    Json(serde_json::Error),
}

// These allow conversion to NrdbError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for NrdbError {
    fn from(e: io::Error) -> Self {
        NrdbError::Io(e)
    }
}

impl From<String> for NrdbError {
    fn from(s: String) -> Self {
        NrdbError::Format(s)
    }
}

impl From<serde_json::Error> for NrdbError {
    fn from(e: serde_json::Error) -> Self {
        NrdbError::Json(e)
    }
}

impl fmt::Display for NrdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NrdbError::Io(e) => write!(f, "I/O error: {}", e),
            NrdbError::Format(msg) => write!(f, "Format error: {}", msg),
            NrdbError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for NrdbError {}
