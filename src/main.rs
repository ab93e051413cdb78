use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use linkboard::system::logging::init_logging;
use linkboard::tui;

/// Terminal dashboard for managing short-link mappings
#[derive(Parser, Debug)]
#[command(name = "linkboard", version, about)]
struct Args {
    /// Append logs to this file (the terminal is owned by the TUI, so
    /// nothing is ever logged to stdout/stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "linkboard=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let _guard = init_logging(args.log_file.as_deref(), &args.log_level);
    info!(version = env!("CARGO_PKG_VERSION"), "starting linkboard");

    tui::run_tui()?;

    info!("linkboard exited");
    Ok(())
}
