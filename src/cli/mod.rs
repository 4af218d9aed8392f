pub mod output;

use crate::Style;
use anyhow::{Context, Result};
use output::{Emitter, OutputFormat};
use std::io::{BufRead, Write};

/// Settings for one run over a batch of phrases.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub style: Style,
    pub format: OutputFormat,
    pub skip_blank_lines: bool,
}

/// Convert phrases given as arguments. Every phrase yields one output,
/// blank ones included.
pub fn convert_args<W: Write>(
    phrases: &[String],
    options: RunOptions,
    out: &mut W,
) -> Result<()> {
    tracing::debug!(style = %options.style, count = phrases.len(), "converting arguments");

    let mut emitter = Emitter::new(out, options.style, options.format);
    for phrase in phrases {
        emitter.emit(phrase).context("Failed to write output")?;
    }
    emitter.finish().context("Failed to write output")
}

/// Convert newline separated phrases read from `input`.
pub fn convert_lines<R: BufRead, W: Write>(
    input: R,
    options: RunOptions,
    out: &mut W,
) -> Result<()> {
    tracing::debug!(style = %options.style, "converting lines");

    let mut emitter = Emitter::new(out, options.style, options.format);
    let mut skipped = 0usize;
    for line in input.lines() {
        let line = line.context("Failed to read stdin")?;
        if options.skip_blank_lines && line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        emitter.emit(&line).context("Failed to write output")?;
    }

    tracing::trace!(skipped, "blank lines skipped");
    emitter.finish().context("Failed to write output")
}
