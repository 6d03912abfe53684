//! Inspect command: print a sheet's parameters as a table.

use super::common::{describe_domain, load_bank};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectArgs {
    /// Sheet file (.toml or .json)
    sheet: PathBuf,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let bank = load_bank(&args.sheet)?;

    println!("Sheet: {}", bank.name());
    println!("{}", "=".repeat(7 + bank.name().len()));
    println!();

    if bank.is_empty() {
        println!("  (no parameters)");
        return Ok(());
    }

    let longest = bank.ids().iter().map(|id| id.len()).max().unwrap_or(0);
    let id_width = longest.max(2);

    println!(
        "  {:id_width$}  {:10}  {:>4}  {:40}  DEFAULT",
        "ID", "KIND", "BITS", "DOMAIN"
    );
    for param in &bank {
        let config = param.config();
        println!(
            "  {:id_width$}  {:10}  {:>4}  {:40}  {}",
            param.id(),
            config.kind_name(),
            config.midi_resolution.bits(),
            describe_domain(param),
            param.format(&param.default_value()),
        );
    }

    println!();
    println!("{} parameters", bank.len());
    Ok(())
}
