// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::dedup::{RenumberOptions, SequenceGroups};
use crate::errors::NrdbError;
use crate::seq::fasta::parse_fasta;

pub const NO_DUPLICATES_MSG: &str = "No duplicates found.";

/// Outcome of one deduplication run over a FastA text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of records parsed from the input.
    pub records: usize,
    /// Number of distinct sequences.
    pub unique: usize,
    /// One "; "-joined id list per duplicated sequence. Empty means no duplicates were found.
    pub duplicates: Vec<String>,
    /// Non-redundant FastA, absent iff the input held no records.
    pub unique_alleles: Option<String>,
}

/// Parses `text`, groups identical sequences, and builds both views. Deterministic, never fails.
pub fn analyse(text: &str, opts: &RenumberOptions) -> Report {
    let records = parse_fasta(text);
    let groups = SequenceGroups::from_records(&records);
    let report = Report::from_groups(&groups, opts);
    debug!(
        "report: {} record(s), {} unique, {} duplicated",
        report.records,
        report.unique,
        report.duplicates.len()
    );
    report
}

impl Report {
    pub fn from_groups(groups: &SequenceGroups, opts: &RenumberOptions) -> Self {
        let unique_alleles = if groups.is_empty() {
            None
        } else {
            Some(groups.unique_alleles(opts))
        };
        Report {
            records: groups.total_ids(),
            unique: groups.len(),
            duplicates: groups.duplicates(),
            unique_alleles,
        }
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String, NrdbError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duplicates")?;
        if self.has_duplicates() {
            for dup in &self.duplicates {
                writeln!(f, "{}", dup)?;
            }
        } else {
            writeln!(f, "{}", NO_DUPLICATES_MSG)?;
        }
        if let Some(fasta) = &self.unique_alleles {
            writeln!(f)?;
            writeln!(f, "Unique alleles")?;
            write!(f, "{}", fasta)?;
        }
        Ok(())
    }
}
