use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordcase::cli::{self, output::OutputFormat, RunOptions};
use wordcase::Config;

#[derive(Parser, Debug)]
#[command(name = "wordcase")]
#[command(
    version,
    about = "Convert phrases between camelCase, snake_case, kebab-case and friends",
    long_about = None,
    after_help = "If no phrases are given, they are read from stdin, one per line.\n\
                  Pass phrases that start with '-' after '--'."
)]
struct Cli {
    /// Target style (camel, pascal, snake, camel-snake, screaming-snake, kebab,
    /// camel-kebab, screaming-kebab, lower, title, screaming) or a configured alias
    #[arg(value_name = "STYLE", required_unless_present_any = ["list", "completion"])]
    style: Option<String>,

    /// Phrases to convert
    #[arg(value_name = "PHRASES")]
    phrases: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Convert blank stdin lines instead of skipping them
    #[arg(long)]
    keep_blank: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// List available styles
    #[arg(short, long)]
    list: bool,

    /// Configuration file (skips the global and local lookup)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordcase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration, then apply CLI overrides
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.keep_blank {
        config.skip_blank_lines = false;
    }
    tracing::debug!(?config, "effective configuration");

    if cli.list {
        cli::output::print_styles(&mut io::stdout().lock(), config.color)?;
        return Ok(());
    }

    let Some(name) = cli.style.as_deref() else {
        anyhow::bail!("No style specified. Use --help for usage information.");
    };
    let style = config.resolve_style(name)?;
    tracing::debug!(%style, "resolved style");

    let options = RunOptions {
        style,
        format: config.format,
        skip_blank_lines: config.skip_blank_lines,
    };

    if !cli.phrases.is_empty() {
        cli::convert_args(&cli.phrases, options, &mut io::stdout().lock())?;
        return Ok(());
    }

    // Nothing piped in: there is nothing to convert
    let stdin = io::stdin();
    if stdin.is_terminal() {
        tracing::debug!("stdin is a terminal, no phrases to read");
        return Ok(());
    }
    cli::convert_lines(stdin.lock(), options, &mut io::stdout().lock())?;

    Ok(())
}
