use std::fs;

use nrdb::{parse_fasta, SeqFile, SequenceGroups};

pub fn read_data(name: &str) -> String {
    fs::read_to_string(format!("tests/data/{}", name)).expect("reading test data")
}

pub fn groups_of(text: &str) -> (SeqFile, SequenceGroups) {
    let records = parse_fasta(text);
    let groups = SequenceGroups::from_records(&records);
    (records, groups)
}
