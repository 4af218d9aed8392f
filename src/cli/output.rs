use crate::{Conversion, Style};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    style: Style,
    conversions: &'a [Conversion],
}

/// Writes conversions as they are produced.
///
/// Text output is streamed line by line; JSON is collected and written as
/// one document by [`Emitter::finish`].
pub struct Emitter<W: Write> {
    out: W,
    style: Style,
    format: OutputFormat,
    pending: Vec<Conversion>,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, style: Style, format: OutputFormat) -> Self {
        Self {
            out,
            style,
            format,
            pending: Vec::new(),
        }
    }

    pub fn emit(&mut self, input: &str) -> io::Result<()> {
        let conversion = Conversion::new(self.style, input);
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", conversion.output),
            OutputFormat::Json => {
                self.pending.push(conversion);
                Ok(())
            }
        }
    }

    pub fn finish(mut self) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let output = JsonOutput {
                style: self.style,
                conversions: &self.pending,
            };
            serde_json::to_writer_pretty(&mut self.out, &output)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

/// Print every style with its name and an example.
pub fn print_styles(out: &mut impl Write, colored_output: bool) -> io::Result<()> {
    let width = Style::ALL
        .iter()
        .map(|style| style.name().len())
        .max()
        .unwrap_or(0);

    for style in Style::ALL {
        let name = format!("{:width$}", style.name(), width = width);
        let example = format!("\"{}\"", style.example());
        if colored_output {
            writeln!(out, "  {}  {}", name.cyan().bold(), example.dimmed())?;
        } else {
            writeln!(out, "  {}  {}", name, example)?;
        }
    }
    Ok(())
}
