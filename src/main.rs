// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Shakl: shape Arabic text into presentation forms

fn main() -> anyhow::Result<()> {
    shakl::run()
}
