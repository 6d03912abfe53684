//! Convert command: show every representation of one parameter value.

use super::common::{load_bank, require};
use audioui_config::parse_value;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("input")
        .required(true)
        .args(["value", "normalized", "midi"]),
))]
pub struct ConvertArgs {
    /// Sheet file (.toml or .json)
    sheet: PathBuf,

    /// Parameter id
    id: String,

    /// Real value, e.g. "-6 dB", "on" or "Saw"
    #[arg(long, allow_hyphen_values = true)]
    value: Option<String>,

    /// Normalized position (0.0 to 1.0)
    #[arg(long)]
    normalized: Option<f64>,

    /// MIDI integer
    #[arg(long)]
    midi: Option<u64>,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let bank = load_bank(&args.sheet)?;
    let param = require(&bank, &args.id)?;

    let value = if let Some(text) = args.value.as_deref() {
        parse_value(param, text)?
    } else if let Some(normalized) = args.normalized {
        param.denormalize(normalized)
    } else if let Some(midi) = args.midi {
        param.from_midi(midi)
    } else {
        anyhow::bail!("One of --value, --normalized or --midi is required");
    };

    let midi = param.to_midi(&value);
    let snapped = param.from_midi(midi);
    tracing::debug!("{}: input {value} snapped to {snapped}", param.id());

    println!("Parameter:  {} ({})", param.name(), param.id());
    println!("Value:      {snapped}");
    println!("Normalized: {}", param.normalize(&snapped));
    println!("MIDI:       {} / {}", midi, param.max_midi());
    println!("Display:    {}", param.format(&snapped));
    Ok(())
}
