// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info, warn};

use crate::config::{find_nrdb_config, NrdbConfig};
use crate::dedup::SequenceGroups;
use crate::errors::NrdbError;
use crate::report::Report;
use crate::seq::fasta::{read_fasta, read_fasta_file};
use crate::seq::file::SeqFile;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
pub struct Cli {
    /// FastA file (reads stdin if absent or '-')
    pub fasta: Option<PathBuf>,

    /// Renumber unique alleles instead of naming them after their ids
    #[arg(short, long, conflicts_with = "no_renumber")]
    pub renumber: bool,

    /// Name unique alleles after their ids, even if the config says to renumber
    #[arg(short = 'R', long = "no-renumber")]
    pub no_renumber: bool,

    /// Prefix for renumbered alleles (only used with --renumber or a config that renumbers)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Write the unique alleles (FastA) to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Do not print the report (mostly useful with --output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Ignore the .nrdbconfig file
    #[arg(long = "no-config")]
    pub no_config: bool,
}

fn load_config(cli: &Cli) -> NrdbConfig {
    if cli.no_config {
        return NrdbConfig::default();
    }
    let Some(path) = find_nrdb_config() else {
        return NrdbConfig::default();
    };
    match NrdbConfig::from_file(&path) {
        Ok(cfg) => {
            info!("Using config {}", path.display());
            cfg
        }
        Err(e) => {
            // Deduplicate anyway, with defaults.
            warn!("Error reading {}: {}; ignoring it", path.display(), e);
            NrdbConfig::default()
        }
    }
}

impl Cli {
    /// Some(_) iff --renumber or --no-renumber was given.
    pub fn renumber_flag(&self) -> Option<bool> {
        match (self.renumber, self.no_renumber) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// Reads the named file, or `stdin` if there is none or it is '-'.
fn read_records<R: Read>(fasta: Option<&Path>, stdin: R) -> Result<SeqFile, NrdbError> {
    match fasta {
        Some(path) if path.as_os_str() != "-" => {
            info!("Reading {}", path.display());
            read_fasta_file(path)
        }
        _ => {
            info!("Reading stdin");
            read_fasta(stdin)
        }
    }
}

fn execute_with<R: Read>(cli: &Cli, stdin: R) -> Result<Report, NrdbError> {
    let config = load_config(cli);
    let opts = config.renumber_options(cli.renumber_flag(), cli.prefix.as_deref());
    debug!("renumber options: {:?}", opts);

    let records = read_records(cli.fasta.as_deref(), stdin)?;
    let groups = SequenceGroups::from_records(&records);
    let report = Report::from_groups(&groups, &opts);
    info!(
        "{} record(s), {} unique allele(s)",
        report.records, report.unique
    );

    if let Some(path) = &cli.output {
        match &report.unique_alleles {
            Some(fasta) => {
                fs::write(path, fasta)?;
                info!("Wrote unique alleles to {}", path.display());
            }
            None => warn!("No records found; not writing {}", path.display()),
        }
    }

    Ok(report)
}

/// Runs one deduplication as described by `cli` and returns the report.
pub fn execute(cli: &Cli) -> Result<Report, NrdbError> {
    execute_with(cli, io::stdin().lock())
}

/// What to print for `report`: nothing with --quiet, JSON with --json, plain text otherwise.
pub fn render(cli: &Cli, report: &Report) -> Result<Option<String>, NrdbError> {
    if cli.quiet {
        return Ok(None);
    }
    if cli.json {
        Ok(Some(format!("{}\n", report.to_json()?)))
    } else {
        Ok(Some(report.to_text()))
    }
}

pub fn run() -> Result<(), NrdbError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let report = execute(&cli)?;
    if let Some(out) = render(&cli, &report)? {
        print!("{}", out);
    }

    Ok(())
}
