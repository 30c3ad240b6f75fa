use clap::Parser;
use tracing_subscriber::EnvFilter;
mod cli;
mod commands;

/// `RUST_LOG` wins; otherwise `-v` picks the level. Logs go to stderr so
/// stdout stays clean for `describe`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    cli.execute()?;
    Ok(())
}
