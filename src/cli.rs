// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end.
//!
//! Shapes the text given as arguments, or stdin line by line, and writes
//! the result to stdout. Logs go to stderr.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::settings::{self, OutputFormat, Settings};
use crate::shaping::{ArabicShaper, is_arabic, joining_type, letter_forms};

pub const USAGE: &str =
    "Usage: shakl [--config PATH] [--json] [--transparent-marks] [TEXT ...]";

/// Parsed command-line arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub transparent_marks: bool,
    pub help: bool,
    /// Text to shape; stdin is read when empty
    pub text: Vec<String>,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let Some(path) = args.next() else {
                    bail!("--config needs a path\n{USAGE}");
                };
                parsed.config = Some(PathBuf::from(path));
            }
            "--json" => parsed.json = true,
            "--transparent-marks" => parsed.transparent_marks = true,
            "--help" | "-h" => parsed.help = true,
            "--" => {
                parsed.text.extend(args.by_ref());
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                bail!("unknown option '{flag}'\n{USAGE}");
            }
            _ => parsed.text.push(arg),
        }
    }

    Ok(parsed)
}

/// Config file to load: `--config` first, then the environment.
pub fn config_path(args: &CliArgs, env_value: Option<String>) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Load settings and apply command-line overrides.
pub fn resolve_settings(args: &CliArgs) -> Result<Settings> {
    let env_value = std::env::var(settings::env::CONFIG).ok();
    let mut resolved = match config_path(args, env_value) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    if args.json {
        resolved.output.format = OutputFormat::Json;
    }
    if args.transparent_marks {
        resolved.shaping.transparent_marks = true;
    }
    Ok(resolved)
}

/// Shape one piece of text and write it out.
pub fn write_shaped<W: Write>(
    shaper: &ArabicShaper,
    format: OutputFormat,
    text: &str,
    out: &mut W,
) -> Result<()> {
    let unshaped = count_unshaped_arabic(text);
    if unshaped > 0 {
        tracing::debug!("{} Arabic characters have no presentation form", unshaped);
    }

    match format {
        OutputFormat::Text => writeln!(out, "{}", shaper.shape(text))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &shaper.analyze(text))
                .context("Failed to encode shaping report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Shape every line of `input`. Returns the number of lines written.
pub fn shape_lines<R: BufRead, W: Write>(
    shaper: &ArabicShaper,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        write_shaped(shaper, format, &line, out)?;
        count += 1;
    }
    Ok(count)
}

/// Arabic-block characters the shaper leaves alone, marks excluded.
fn count_unshaped_arabic(text: &str) -> usize {
    text.chars()
        .filter(|&c| {
            is_arabic(c) && letter_forms(c).is_none() && !joining_type(c).is_transparent()
        })
        .count()
}
