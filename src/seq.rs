// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

pub mod fasta;
pub mod file;
pub mod record;
