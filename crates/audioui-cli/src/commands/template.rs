//! Template command: emit a starter sheet built from the factory controls.

use audioui_config::{ParameterBank, ParameterSheet};
use audioui_core::{BooleanMode, MidiResolution, ParameterDefinition, ScaleType, factory};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

#[derive(Args)]
pub struct TemplateArgs {
    /// Output encoding when printing to stdout
    #[arg(short, long, value_enum, default_value = "toml")]
    format: Format,

    /// Write to a file instead (format follows the extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sheet name
    #[arg(short, long, default_value = "Starter Sheet")]
    name: String,
}

/// Definitions covering every kind, resolution preset and scale.
fn starter_definitions() -> Vec<ParameterDefinition> {
    vec![
        ParameterDefinition::continuous("cutoff", "Cutoff", 20.0, 20000.0)
            .with_scale(ScaleType::Log)
            .with_unit("Hz")
            .with_default(1000.0),
        ParameterDefinition::continuous("gain", "Gain", -60.0, 6.0)
            .with_step(0.5)
            .with_unit("dB")
            .with_default(0.0)
            .with_resolution(MidiResolution::Bits7),
        factory::standard_7bit("Volume"),
        factory::bipolar_7bit("Pan"),
        factory::standard_14bit("Pitch Bend"),
        factory::bipolar("Detune", 50.0),
        factory::switch("Bypass", BooleanMode::Toggle),
        factory::switch("Hold", BooleanMode::Momentary),
        factory::selector("Waveform", ["Sine", "Triangle", "Saw", "Square"]),
    ]
}

pub fn run(args: TemplateArgs) -> anyhow::Result<()> {
    let sheet = ParameterSheet::from_definitions(&args.name, &starter_definitions())?
        .with_description("Generated by audioui template");

    // the printed sheet must load back cleanly
    ParameterBank::from_sheet(&sheet)?;

    if let Some(path) = &args.output {
        sheet.save(path)?;
        println!("Wrote {} parameters to {}", sheet.len(), path.display());
        return Ok(());
    }

    let text = match args.format {
        Format::Toml => sheet.to_toml()?,
        Format::Json => sheet.to_json()?,
    };
    print!("{text}");
    Ok(())
}
