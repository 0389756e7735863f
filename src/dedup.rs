// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::seq::record::SeqRecord;

/// Separator between ids in the duplicates report.
pub const DUPLICATE_ID_SEP: &str = "; ";
/// Separator between ids in a (non-renumbered) unique-allele header.
pub const HEADER_ID_SEP: &str = "|";

/// How unique alleles are named in the output FastA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberOptions {
    /// Replace the joined ids by `prefix` followed by a 1-based counter.
    pub renumber: bool,
    /// Only meaningful when `renumber` is set. May be empty.
    pub prefix: String,
}

impl RenumberOptions {
    pub fn renumbered(prefix: impl Into<String>) -> Self {
        RenumberOptions {
            renumber: true,
            prefix: prefix.into(),
        }
    }
}

/// One unique sequence and the ids of all records that had it, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGroup {
    pub sequence: String,
    pub ids: Vec<String>,
}

impl SequenceGroup {
    pub fn is_duplicated(&self) -> bool {
        self.ids.len() > 1
    }
}

/// Records grouped by identical sequence. Groups enumerate in order of first appearance of their
/// sequence; `index` maps a sequence to its position in `groups`.
#[derive(Debug, Default)]
pub struct SequenceGroups {
    groups: Vec<SequenceGroup>,
    index: HashMap<String, usize>,
}

impl SequenceGroups {
    pub fn from_records(records: &[SeqRecord]) -> Self {
        let mut result = SequenceGroups::default();
        for record in records {
            result.add(record);
        }
        debug!(
            "{} record(s) fall into {} group(s)",
            records.len(),
            result.len()
        );
        result
    }

    fn add(&mut self, record: &SeqRecord) {
        let groups = &mut self.groups;
        let pos = *self
            .index
            .entry(record.sequence.clone())
            .or_insert_with(|| {
                groups.push(SequenceGroup {
                    sequence: record.sequence.clone(),
                    ids: Vec::new(),
                });
                groups.len() - 1
            });
        self.groups[pos].ids.push(record.header.clone());
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceGroup> {
        self.groups.iter()
    }

    pub fn get(&self, sequence: &str) -> Option<&SequenceGroup> {
        self.index.get(sequence).map(|&pos| &self.groups[pos])
    }

    /// Number of ids over all groups, i.e. the number of records grouped.
    pub fn total_ids(&self) -> usize {
        self.groups.iter().map(|g| g.ids.len()).sum()
    }

    /// One line per group that has more than one id: the ids joined by "; ". Empty iff there are
    /// no duplicates.
    pub fn duplicates(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter(|g| g.is_duplicated())
            .map(|g| g.ids.iter().join(DUPLICATE_ID_SEP))
            .collect()
    }

    /// One FastA record per group, sequence on a single line. The header is either the group's
    /// ids joined by '|', or the prefix followed by the group's 1-based rank.
    pub fn unique_alleles(&self, opts: &RenumberOptions) -> String {
        let mut fasta = String::new();
        for (rank, group) in (1..).zip(self.groups.iter()) {
            let name = if opts.renumber {
                format!("{}{}", opts.prefix, rank)
            } else {
                group.ids.iter().join(HEADER_ID_SEP)
            };
            fasta.push('>');
            fasta.push_str(&name);
            fasta.push('\n');
            fasta.push_str(&group.sequence);
            fasta.push('\n');
        }
        fasta
    }
}
