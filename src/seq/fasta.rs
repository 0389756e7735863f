// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::errors::NrdbError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

/// Parses FastA text into records, in header order.
///
/// Never fails: blank lines are skipped, sequence lines are stripped of all whitespace and
/// upper-cased, and a header that is not followed by any sequence (either because another header
/// comes next or because the input ends) produces no record. Sequence lines seen before any
/// header have no identifier and are dropped.
pub fn parse_fasta(text: &str) -> SeqFile {
    let mut result: SeqFile = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    // lines() accepts both '\n' and '\r\n', mixed freely.
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(hdr) = line.strip_prefix('>') {
            if !sequence.is_empty() {
                push_record(&mut result, header.take(), &mut sequence);
            }
            // A pending header without sequence is simply replaced.
            header = Some(String::from(hdr));
        } else {
            sequence.extend(
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .flat_map(char::to_uppercase),
            );
        }
    }
    if !sequence.is_empty() {
        push_record(&mut result, header.take(), &mut sequence);
    }

    debug!("parsed {} FastA record(s)", result.len());
    result
}

fn push_record(result: &mut SeqFile, header: Option<String>, sequence: &mut String) {
    let sequence = std::mem::take(sequence);
    match header {
        Some(header) => result.push(SeqRecord { header, sequence }),
        None => debug!("dropping {} residue(s) found before any header", sequence.len()),
    }
}

/// Reads all of `reader` and parses it as FastA. Only the reading can fail.
pub fn read_fasta<R: Read>(mut reader: R) -> Result<SeqFile, NrdbError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_fasta(&text))
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, NrdbError> {
    let file = File::open(path)?;
    read_fasta(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_file_1() {
        let path = "data/test1.fas";
        let fasta: SeqFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 1);
        assert_eq!(fasta[0].header, "seq1");
        assert_eq!(fasta[0].sequence, "GAATTC");
    }

    #[test]
    fn test_read_fasta_file_2() {
        let path = "data/test2.fas";
        let fasta: SeqFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 3);
        assert_eq!(fasta[0].header, "seq1");
        assert_eq!(fasta[0].sequence, "TTGCCGCGA");
        assert_eq!(fasta[1].header, "seq2 some description");
        assert_eq!(fasta[1].sequence, "TTCCCGGCGA");
        assert_eq!(fasta[2].header, "seq3");
        assert_eq!(fasta[2].sequence, "TTGCCGCGA");
    }

    #[test]
    fn test_read_fasta_file_missing() {
        let result = read_fasta_file("data/no-such-file.fas");
        assert!(matches!(result, Err(NrdbError::Io(_))));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_fasta("").is_empty());
        assert!(parse_fasta("  \n\t\n\r\n").is_empty());
    }

    #[test]
    fn test_no_header() {
        assert!(parse_fasta("ACGT\nTTTT\n").is_empty());
    }

    #[test]
    fn test_orphan_sequence_before_first_header() {
        let fasta = parse_fasta("GGGG\n>a\nACGT\n");
        assert_eq!(fasta, vec![SeqRecord::new("a", "ACGT")]);
    }

    #[test]
    fn test_consecutive_headers() {
        let fasta = parse_fasta(">a\n>b\nACGT\n");
        assert_eq!(fasta, vec![SeqRecord::new("b", "ACGT")]);
    }

    #[test]
    fn test_trailing_header_dropped() {
        let fasta = parse_fasta(">a\nACGT\n>b\n");
        assert_eq!(fasta, vec![SeqRecord::new("a", "ACGT")]);
    }

    #[test]
    fn test_normalization() {
        let fasta = parse_fasta(">a\nac gt\n>b\nAC\n\tgt \n>c\nacgt");
        assert_eq!(fasta.len(), 3);
        assert!(fasta.iter().all(|rec| rec.sequence == "ACGT"));
    }

    #[test]
    fn test_crlf_and_mixed_line_endings() {
        let fasta = parse_fasta(">a\r\nAC\r\nGT\n>b\nTT\r\n\r\nTT\r\n");
        assert_eq!(
            fasta,
            vec![SeqRecord::new("a", "ACGT"), SeqRecord::new("b", "TTTT")]
        );
    }

    #[test]
    fn test_header_keeps_whitespace() {
        let fasta = parse_fasta("> allele 1  \nA\n");
        assert_eq!(fasta[0].header, " allele 1  ");
    }

    #[test]
    fn test_blank_lines_between_sequence_lines() {
        let fasta = parse_fasta(">a\n\nAC\n   \nGT\n\n");
        assert_eq!(fasta, vec![SeqRecord::new("a", "ACGT")]);
    }
}
