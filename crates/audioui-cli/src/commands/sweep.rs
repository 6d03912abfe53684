//! Sweep command: tabulate a parameter at evenly spaced positions.

use super::common::{load_bank, require};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SweepArgs {
    /// Sheet file (.toml or .json)
    sheet: PathBuf,

    /// Parameter id
    id: String,

    /// Number of positions, including both ends
    #[arg(short, long, default_value = "11", value_parser = clap::value_parser!(u32).range(2..))]
    steps: u32,
}

pub fn run(args: SweepArgs) -> anyhow::Result<()> {
    let bank = load_bank(&args.sheet)?;
    let param = require(&bank, &args.id)?;

    println!("Sweep: {} ({} positions)", param.name(), args.steps);
    println!();
    println!(
        "  {:>8}  {:>20}  {:>16}  DISPLAY",
        "POSITION", "MIDI", "VALUE"
    );

    let last = f64::from(args.steps - 1);
    for i in 0..args.steps {
        let position = f64::from(i) / last;
        let value = param.denormalize(position);
        println!(
            "  {:>8.4}  {:>20}  {:>16}  {}",
            position,
            param.to_midi(&value),
            value.to_string(),
            param.format(&value),
        );
    }
    Ok(())
}
