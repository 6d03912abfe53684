//! Integration tests for audioui-config.
//!
//! These tests verify end-to-end functionality across modules: sheet files on
//! disk, validation, and the converters a bank hands out.

use audioui_config::{ConfigError, ParameterBank, ParameterSheet, ValidationError, parse_value};
use audioui_core::{
    BooleanMode, EnumOption, MidiMapping, MidiResolution, ParamValue, ParameterDefinition,
    ParameterError, ScaleType, factory,
};
use tempfile::TempDir;

fn synth_definitions() -> Vec<ParameterDefinition> {
    vec![
        ParameterDefinition::continuous("cutoff", "Cutoff", 20.0, 20000.0)
            .with_scale(ScaleType::Log)
            .with_unit("Hz")
            .with_default(1000.0),
        ParameterDefinition::continuous("gain", "Gain", -60.0, 6.0)
            .with_step(0.5)
            .with_unit("dB")
            .with_resolution(MidiResolution::Bits7),
        factory::switch("Hold", BooleanMode::Momentary),
        ParameterDefinition::enumeration(
            "wave",
            "Waveform",
            [
                EnumOption::new("sine", "Sine").with_midi_value(10),
                EnumOption::new("tri", "Triangle").with_midi_value(50),
                EnumOption::new("saw", "Saw").with_midi_value(90),
            ],
        )
        .with_mapping(MidiMapping::Custom)
        .with_resolution(MidiResolution::Bits7),
    ]
}

fn synth_sheet() -> ParameterSheet {
    ParameterSheet::from_definitions("Mono Synth", &synth_definitions())
        .expect("no custom scales")
        .with_description("Integration test sheet")
}

/// Save a sheet as TOML and JSON, load both back, and compare.
#[test]
fn test_save_load_both_formats() {
    let dir = TempDir::new().unwrap();
    let sheet = synth_sheet();

    for file in ["synth.toml", "synth.json"] {
        let path = dir.path().join(file);
        sheet.save(&path).expect("save should succeed");
        assert!(path.exists());

        let loaded = ParameterSheet::load(&path).expect("load should succeed");
        assert_eq!(loaded, sheet, "{file} round trip");
    }
}

/// Saving into a missing directory creates it.
#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("strip.toml");

    synth_sheet().save(&path).unwrap();
    assert!(path.exists());
}

/// A bank loaded from disk converts exactly like one built in memory.
#[test]
fn test_bank_from_file_matches_definitions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("synth.toml");
    synth_sheet().save(&path).unwrap();

    let bank = ParameterBank::load(&path).unwrap();
    assert_eq!(bank.name(), "Mono Synth");
    assert_eq!(bank.ids(), vec!["cutoff", "gain", "hold", "wave"]);

    for def in synth_definitions() {
        let from_file = bank.require(&def.id).unwrap();
        assert_eq!(from_file.config(), &def, "{} survives the file", def.id);
    }

    let gain = bank.require("gain").unwrap();
    assert_eq!(gain.to_midi(&ParamValue::Number(-27.0)), 64);
    assert_eq!(gain.format(&ParamValue::Number(-6.0)), "-6 dB");

    let wave = bank.require("wave").unwrap();
    assert_eq!(wave.from_midi(12), ParamValue::from("sine"));
    assert_eq!(wave.from_midi(40), ParamValue::from("tri"));

    let cutoff = bank.require("cutoff").unwrap();
    assert_eq!(cutoff.default_value(), ParamValue::Number(1000.0));
}

/// User text goes through parse_value, then the converter.
#[test]
fn test_parse_then_convert() {
    let bank = ParameterBank::from_sheet(&synth_sheet()).unwrap();

    let gain = bank.require("gain").unwrap();
    let value = parse_value(gain, "-6 dB").unwrap();
    assert_eq!(gain.format(&gain.clamp(&value)), "-6 dB");

    let hold = bank.require("hold").unwrap();
    let pressed = parse_value(hold, "on").unwrap();
    assert_eq!(hold.to_midi(&pressed), hold.max_midi());

    let wave = bank.require("wave").unwrap();
    let saw = parse_value(wave, "Saw").unwrap();
    assert_eq!(wave.to_midi(&saw), 90);
}

/// A hand-written sheet with several mistakes reports all of them.
#[test]
fn test_broken_sheet_reports_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
name = "Broken"

[[parameters]]
id = "cutoff"
name = "Cutoff"
type = "continuous"
min = 20000.0
max = 20.0

[[parameters]]
id = "cutoff"
name = "Cutoff again"
type = "continuous"
min = 0.0
max = 1.0
scale = "logarithmic"

[[parameters]]
id = "wave"
name = "Wave"
type = "enum"
midi_resolution = 9
options = []
"#,
    )
    .unwrap();

    let err = ParameterBank::load(&path).unwrap_err();
    let ConfigError::Validation(ValidationError::Multiple(errors)) = err else {
        panic!("expected collected validation errors");
    };
    let expected = vec![
        ValidationError::InvalidParameter {
            id: "cutoff".to_string(),
            source: ParameterError::InvalidRange {
                min: 20000.0,
                max: 20.0,
            },
        },
        ValidationError::DuplicateId("cutoff".to_string()),
        ValidationError::UnknownScale {
            id: "cutoff".to_string(),
            scale: "logarithmic".to_string(),
        },
        ValidationError::UnsupportedResolution {
            id: "wave".to_string(),
            bits: 9,
        },
    ];
    assert_eq!(errors, expected);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ParameterSheet::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("synth.yaml");
    assert!(matches!(
        synth_sheet().save(&path),
        Err(ConfigError::UnsupportedFormat(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ \"name\": ").unwrap();
    let result = ParameterSheet::load(&path);
    assert!(matches!(result, Err(ConfigError::Json(_))));
}
