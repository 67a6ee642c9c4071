// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Shakl: contextual Arabic glyph shaping.
//!
//! Turns Arabic text into Unicode Presentation Forms-B code points so that
//! renderers without an OpenType shaping engine (PDF writers, canvases)
//! draw connected letters. See [`shaping::shape`].

pub mod cli;
pub mod settings;
pub mod shaping;

use std::io::Write;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use shaping::{ArabicShaper, PositionalForm, ShapeOptions, shape};

/// Entry point for the `shakl` command-line tool
pub fn run() -> Result<()> {
    let args = cli::parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let settings = cli::resolve_settings(&args)?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = cli::config_path(&args, std::env::var(settings::env::CONFIG).ok()) {
        tracing::info!("Loaded config from: {}", path.display());
    }

    let shaper = ArabicShaper::with_options(settings.shape_options());
    let format = settings.output.format;
    tracing::debug!(?format, options = ?shaper.options(), "Shaper ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.text.is_empty() {
        tracing::debug!("Reading from stdin");
        let count = cli::shape_lines(&shaper, format, std::io::stdin().lock(), &mut out)?;
        tracing::debug!("Shaped {} lines", count);
    } else {
        cli::write_shaped(&shaper, format, &args.text.join(" "), &mut out)?;
    }

    out.flush()?;
    Ok(())
}
