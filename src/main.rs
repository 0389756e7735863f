// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The nrdb authors

use nrdb::errors::NrdbError;

fn main() -> Result<(), NrdbError> {
    nrdb::run()
}
