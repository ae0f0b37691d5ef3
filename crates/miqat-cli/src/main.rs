use clap::Parser;

mod cli;
mod commands;

fn main() {
    if let Err(error) = run() {
        eprintln!("miqat error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = miqat_config::MiqatConfig::load_with_dotenv()?;

    match cli.command {
        cli::Commands::Today { date, almanac } => {
            commands::today::handle(date.as_deref(), almanac.as_deref(), &config)
        }
        cli::Commands::Convert { date } => commands::convert::handle(&date),
        cli::Commands::Times { table, date, next } => {
            commands::times::handle(&table, date.as_deref(), next)
        }
        cli::Commands::Qibla { lat, lon, heading } => {
            commands::qibla::handle(lat, lon, heading, &config)
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MIQAT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
