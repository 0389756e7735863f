// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

pub mod config;
pub mod dedup;
pub mod errors;
pub mod report;
pub mod runner;
pub mod seq;

use crate::errors::NrdbError;

pub use crate::dedup::{RenumberOptions, SequenceGroup, SequenceGroups};
pub use crate::report::{analyse, Report};
pub use crate::seq::fasta::parse_fasta;
pub use crate::seq::file::SeqFile;
pub use crate::seq::record::SeqRecord;

pub fn run() -> Result<(), NrdbError> {
    runner::run()
}
