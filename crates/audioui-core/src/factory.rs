//! Ready-made definitions for the controls every instrument panel has.
//!
//! Each helper derives the parameter `id` from its display name with
//! [`slugify`], so `standard_7bit("Filter Cutoff")` gets the id
//! `"filter-cutoff"`.
//!
//! | helper | kind | domain | resolution |
//! |---|---|---|---|
//! | [`standard_7bit`] | continuous | 0..=127, step 1 | 7 |
//! | [`standard_14bit`] | continuous | 0..=16383, step 1 | 14 |
//! | [`bipolar_7bit`] | continuous | −64..=63, step 1, default 0 | 7 |
//! | [`bipolar_14bit`] | continuous | −8192..=8191, step 1, default 0 | 14 |
//! | [`bipolar`] | continuous | −range..=range, default 0 | 32 |
//! | [`switch`] | boolean | - | 32 |
//! | [`selector`] | enum (spread) | one option per label | 32 |

use alloc::string::String;

use crate::definition::{BooleanMode, EnumOption, MidiResolution, ParameterDefinition};

/// Lowercase ASCII slug: alphanumerics kept, every other run becomes `-`,
/// no leading or trailing `-`.
///
/// ```rust
/// use audioui_core::factory::slugify;
///
/// assert_eq!(slugify("Filter Cutoff"), "filter-cutoff");
/// assert_eq!(slugify("  LFO #2 (Rate) "), "lfo-2-rate");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn stepped(name: &str, min: f64, max: f64, resolution: MidiResolution) -> ParameterDefinition {
    ParameterDefinition::continuous(slugify(name), name, min, max)
        .with_step(1.0)
        .with_resolution(resolution)
}

/// Classic unipolar 7-bit CC: 0..=127.
pub fn standard_7bit(name: &str) -> ParameterDefinition {
    stepped(name, 0.0, 127.0, MidiResolution::Bits7).with_default(0.0)
}

/// Unipolar 14-bit CC: 0..=16383.
pub fn standard_14bit(name: &str) -> ParameterDefinition {
    stepped(name, 0.0, 16383.0, MidiResolution::Bits14).with_default(0.0)
}

/// Signed 7-bit: −64..=63, centered at 0.
pub fn bipolar_7bit(name: &str) -> ParameterDefinition {
    stepped(name, -64.0, 63.0, MidiResolution::Bits7).with_default(0.0)
}

/// Signed 14-bit: −8192..=8191, centered at 0.
pub fn bipolar_14bit(name: &str) -> ParameterDefinition {
    stepped(name, -8192.0, 8191.0, MidiResolution::Bits14).with_default(0.0)
}

/// Symmetric continuous range `−range..=range` centered at 0 (pan, detune).
///
/// `range` should be positive; a zero or negative range produces a
/// definition that [`AudioParameter::new`](crate::AudioParameter::new)
/// rejects.
pub fn bipolar(name: &str, range: f64) -> ParameterDefinition {
    ParameterDefinition::continuous(slugify(name), name, -range, range).with_default(0.0)
}

/// On/off switch, off by default.
pub fn switch(name: &str, mode: BooleanMode) -> ParameterDefinition {
    ParameterDefinition::boolean(slugify(name), name)
        .with_mode(mode)
        .with_default(false)
}

/// Option list whose values are the labels themselves.
pub fn selector<I, S>(name: &str, labels: I) -> ParameterDefinition
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options = labels.into_iter().map(|label| {
        let label = label.into();
        EnumOption::new(label.clone(), label)
    });
    ParameterDefinition::enumeration(slugify(name), name, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::AudioParameter;
    use crate::definition::{MidiMapping, OptionValue, ParamValue, ParameterKind};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Gain"), "gain");
        assert_eq!(slugify("Filter Cutoff"), "filter-cutoff");
        assert_eq!(slugify("--Mix / Blend--"), "mix-blend");
        assert_eq!(slugify("Osc 2  Level"), "osc-2-level");
        assert_eq!(slugify("Über"), "ber");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_standard_7bit() {
        let def = standard_7bit("Mod Wheel");
        assert_eq!(def.id, "mod-wheel");
        assert_eq!(def.name, "Mod Wheel");
        assert_eq!(def.midi_resolution, MidiResolution::Bits7);
        let param = AudioParameter::new(def).unwrap();
        // one MIDI step per unit
        for midi in [0, 1, 63, 64, 127] {
            assert_eq!(param.from_midi(midi), ParamValue::Number(midi as f64));
        }
    }

    #[test]
    fn test_standard_14bit() {
        let param = AudioParameter::new(standard_14bit("Pitch")).unwrap();
        assert_eq!(param.max_midi(), 16383);
        assert_eq!(param.to_midi(&ParamValue::Number(8192.0)), 8192);
    }

    #[test]
    fn test_bipolar_7bit_center() {
        let param = AudioParameter::new(bipolar_7bit("Pan")).unwrap();
        assert_eq!(param.default_value(), ParamValue::Number(0.0));
        assert_eq!(param.to_midi(&ParamValue::Number(0.0)), 64);
        assert_eq!(param.from_midi(0), ParamValue::Number(-64.0));
        assert_eq!(param.from_midi(127), ParamValue::Number(63.0));
    }

    #[test]
    fn test_bipolar_14bit_center() {
        let param = AudioParameter::new(bipolar_14bit("Pitch Bend")).unwrap();
        assert_eq!(param.id(), "pitch-bend");
        assert_eq!(param.to_midi(&ParamValue::Number(0.0)), 8192);
    }

    #[test]
    fn test_bipolar() {
        let def = bipolar("Detune", 50.0);
        let ParameterKind::Continuous(c) = &def.kind else {
            panic!("expected continuous kind");
        };
        assert_eq!((c.min, c.max, c.default_value), (-50.0, 50.0, Some(0.0)));
        assert!(AudioParameter::new(bipolar("Broken", 0.0)).is_err());
    }

    #[test]
    fn test_switch() {
        let def = switch("Sustain", BooleanMode::Momentary);
        let ParameterKind::Boolean(b) = &def.kind else {
            panic!("expected boolean kind");
        };
        assert_eq!(b.mode, BooleanMode::Momentary);
        assert_eq!(b.default_value, Some(false));
        assert_eq!(def.id, "sustain");
    }

    #[test]
    fn test_selector() {
        let def = selector("Filter Type", ["LP", "HP", "BP"]);
        let ParameterKind::Enum(e) = &def.kind else {
            panic!("expected enum kind");
        };
        assert_eq!(e.midi_mapping, MidiMapping::Spread);
        assert_eq!(e.options.len(), 3);
        assert_eq!(e.options[1].value, OptionValue::from("HP"));
        assert_eq!(e.options[1].label, "HP");

        let param = AudioParameter::new(def).unwrap();
        assert_eq!(param.format(&ParamValue::from("BP")), "BP");
        // 32-bit grid: the middle index lands half a step above 0.5
        let middle = param.normalize(&ParamValue::from("HP"));
        assert!((middle - 0.5).abs() < 1e-9);
    }
}
