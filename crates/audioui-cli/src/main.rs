//! audioui CLI - inspect and exercise parameter sheets from the terminal.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "audioui")]
#[command(author, version, about = "audioui parameter sheet tools", long_about = None)]
struct Cli {
    /// Log more (-v for debug, -vv for trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the parameters of a sheet
    Inspect(commands::inspect::InspectArgs),

    /// Convert one value of a parameter between representations
    Convert(commands::convert::ConvertArgs),

    /// Walk a parameter across evenly spaced positions
    Sweep(commands::sweep::SweepArgs),

    /// Print a starter sheet built from the factory controls
    Template(commands::template::TemplateArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Sweep(args) => commands::sweep::run(args),
        Commands::Template(args) => commands::template::run(args),
    }
}
