// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::dedup::RenumberOptions;
use crate::errors::NrdbError;

pub const CONFIG_FILENAME: &str = ".nrdbconfig";

/// Defaults read from `.nrdbconfig` (JSON). Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NrdbConfig {
    pub renumber: bool,
    pub prefix: Option<String>,
}

impl NrdbConfig {
    pub fn from_file(path: &Path) -> Result<Self, NrdbError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, NrdbError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Merges command-line settings over this config. `cli_renumber` is `None` when neither
    /// --renumber nor --no-renumber was given. A prefix given on the command line wins over the
    /// configured one.
    pub fn renumber_options(
        &self,
        cli_renumber: Option<bool>,
        cli_prefix: Option<&str>,
    ) -> RenumberOptions {
        let prefix = cli_prefix
            .or(self.prefix.as_deref())
            .unwrap_or_default();
        RenumberOptions {
            renumber: cli_renumber.unwrap_or(self.renumber),
            prefix: String::from(prefix),
        }
    }
}

/// Looks for the config file in $HOME, then in the current directory.
pub fn find_nrdb_config() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let cwd = std::env::current_dir().ok();
    find_config_in(home.into_iter().chain(cwd))
}

/// First directory among `dirs` that holds a config file.
pub fn find_config_in<I>(dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    dirs.into_iter()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|path| path.is_file())
}
