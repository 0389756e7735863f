// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

// A FastA record: the raw header text (everything after the '>') and the normalized sequence
// (whitespace removed, upper case).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        SeqRecord {
            header: header.into(),
            sequence: sequence.into(),
        }
    }
}
