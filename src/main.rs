use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use folio_tui::logging::{init_logger, LogSink};
use folio_tui::pipeline::{self, terminal};
use folio_tui::{content, CliOverrides, FolioConfig};

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Vengateshwaran N - portfolio in your terminal")]
struct Cli {
    /// Write the whole page to stdout once instead of running interactively
    #[arg(long)]
    print: bool,

    /// Page width for --print (defaults to the terminal width, or 80)
    #[arg(long)]
    width: Option<u16>,

    /// With --print: no colors, no hyperlinks
    #[arg(long)]
    plain: bool,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset (emerald, terminal, mono)
    #[arg(long)]
    theme: Option<String>,

    /// Show every section immediately, without transitions
    #[arg(long)]
    reduced_motion: bool,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FolioConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&CliOverrides {
        theme: cli.theme.clone(),
        reduced_motion: cli.reduced_motion,
        log_file: cli.log_file.clone(),
    });

    // A pipe or file cannot host the interactive page
    let print = cli.print || !io::stdout().is_terminal();

    let sink = match (&config.log_file, print) {
        (Some(path), _) => LogSink::File(path),
        (None, true) => LogSink::Stderr,
        (None, false) => LogSink::Disabled,
    };
    init_logger(sink, cli.verbose)?;
    tracing::debug!(?config, print, "configuration resolved");

    let portfolio = content::portfolio();

    if print {
        let theme = config.resolve_theme()?;
        let width = cli
            .width
            .or_else(|| terminal::detect_terminal_size().map(|(w, _)| w))
            .unwrap_or(80);
        let mut stdout = io::stdout().lock();
        pipeline::print_page(&portfolio, &theme, width, cli.plain, &mut stdout)
            .context("failed to print page")?;
        return Ok(());
    }

    let mut handle = pipeline::mount(&portfolio, &config).context("failed to mount page")?;
    let result = pipeline::run(&mut handle);
    handle.unmount();
    result.context("event loop failed")
}
