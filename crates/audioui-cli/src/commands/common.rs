//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use audioui_config::ParameterBank;
use audioui_core::{AudioParameter, ParameterKind};
use std::path::Path;

/// Load and validate a sheet file.
pub fn load_bank(path: &Path) -> anyhow::Result<ParameterBank> {
    ParameterBank::load(path).with_context(|| format!("Failed to load sheet {}", path.display()))
}

/// Look up a parameter, listing the available ids when it is missing.
pub fn require<'a>(bank: &'a ParameterBank, id: &str) -> anyhow::Result<&'a AudioParameter> {
    bank.require(id).with_context(|| {
        format!(
            "Sheet '{}' has no parameter '{}'. Available: {}",
            bank.name(),
            id,
            bank.ids().join(", ")
        )
    })
}

/// One-line summary of a parameter's domain.
pub fn describe_domain(param: &AudioParameter) -> String {
    match &param.config().kind {
        ParameterKind::Continuous(c) => {
            let mut text = format!("{} .. {}", c.min, c.max);
            if let Some(unit) = c.unit.as_deref().filter(|u| !u.is_empty()) {
                text.push(' ');
                text.push_str(unit);
            }
            if let Some(step) = c.step {
                text.push_str(&format!(", step {step}"));
            }
            if let Some(scale) = c.scale.name().filter(|s| *s != "linear") {
                text.push_str(&format!(", {scale}"));
            } else if c.scale.name().is_none() {
                text.push_str(", custom curve");
            }
            text
        }
        ParameterKind::Boolean(b) => format!(
            "{} / {} ({})",
            b.false_label.as_deref().unwrap_or("Off"),
            b.true_label.as_deref().unwrap_or("On"),
            b.mode.name()
        ),
        ParameterKind::Enum(e) => {
            let labels: Vec<&str> = e.options.iter().map(|o| o.label.as_str()).collect();
            format!("{} ({})", labels.join(" | "), e.midi_mapping.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audioui_core::{BooleanMode, ParameterDefinition, ScaleType, factory};

    #[test]
    fn test_describe_continuous() {
        let def = ParameterDefinition::continuous("cutoff", "Cutoff", 20.0, 20000.0)
            .with_scale(ScaleType::Log)
            .with_unit("Hz");
        let param = AudioParameter::new(def).unwrap();
        assert_eq!(describe_domain(&param), "20 .. 20000 Hz, log");

        let gain = AudioParameter::new(
            ParameterDefinition::continuous("gain", "Gain", -60.0, 6.0).with_step(0.5),
        )
        .unwrap();
        assert_eq!(describe_domain(&gain), "-60 .. 6, step 0.5");
    }

    #[test]
    fn test_describe_discrete() {
        let hold = AudioParameter::new(factory::switch("Hold", BooleanMode::Momentary)).unwrap();
        assert_eq!(describe_domain(&hold), "Off / On (momentary)");

        let input = AudioParameter::new(factory::selector("Input", ["Mic", "Line"])).unwrap();
        assert_eq!(describe_domain(&input), "Mic | Line (spread)");
    }
}
