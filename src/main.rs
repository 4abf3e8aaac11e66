use a11y_inspect::cli::commands::{cmd_merge, cmd_rules, cmd_scan};
use a11y_inspect::cli::config::{Cli, Commands, load_config};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(cli.config.as_deref());

    let clean = match cli.command {
        Commands::Scan {
            snapshot,
            format,
            output,
        } => cmd_scan(&snapshot, format, output.as_deref(), &config)?,
        Commands::Merge {
            snapshots,
            format,
            output,
        } => cmd_merge(&snapshots, format, output.as_deref(), &config)?,
        Commands::Rules => {
            cmd_rules(&config);
            true
        }
    };

    if !clean {
        std::process::exit(1);
    }

    Ok(())
}
