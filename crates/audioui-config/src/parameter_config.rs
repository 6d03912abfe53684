//! Serializable parameter definitions.

use audioui_core::{
    BooleanMode, BooleanParameter, ContinuousParameter, EnumOption, EnumParameter, MidiMapping,
    MidiResolution, OptionValue, ParameterDefinition, ParameterKind, ScaleType,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::{ValidationError, ValidationResult, collect};

/// One parameter as written in a sheet.
///
/// Mirrors [`ParameterDefinition`] with file-friendly field types: the kind
/// is a `type` tag, resolutions are bit counts, and scales, modes and
/// mappings are lowercase names. Names are checked when converting with
/// [`to_definition`](Self::to_definition), not while parsing, so a sheet with
/// several mistakes reports all of them at once.
///
/// # TOML Format
///
/// ```toml
/// [[parameters]]
/// id = "cutoff"
/// name = "Cutoff"
/// type = "continuous"
/// midi_resolution = 14
/// min = 20.0
/// max = 20000.0
/// scale = "log"
/// unit = "Hz"
///
/// [[parameters]]
/// id = "wave"
/// name = "Waveform"
/// type = "enum"
/// midi_mapping = "custom"
///
/// [[parameters.options]]
/// value = "sine"
/// label = "Sine"
/// midi_value = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterConfig {
    /// Stable identifier.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Bits of the MIDI grid (7, 8, 14, 16, 32, 64). Defaults to 32.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi_resolution: Option<u32>,

    /// Kind-specific fields, selected by `type`.
    #[serde(flatten)]
    pub kind: KindConfig,
}

/// Kind-specific half of a [`ParameterConfig`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KindConfig {
    /// `type = "continuous"`
    Continuous {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Snap grid in real units.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
        /// Reset value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<f64>,
        /// Display suffix.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// `"linear"`, `"log"` or `"exp"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<String>,
    },
    /// `type = "boolean"`
    Boolean {
        /// Initial state.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<bool>,
        /// `"toggle"` or `"momentary"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
        /// Label for `true`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        true_label: Option<String>,
        /// Label for `false`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        false_label: Option<String>,
    },
    /// `type = "enum"`
    Enum {
        /// `"spread"`, `"sequential"` or `"custom"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        midi_mapping: Option<String>,
        /// Initially selected value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<OptionValueConfig>,
        /// Choices in display order.
        #[serde(default)]
        options: Vec<OptionConfig>,
    },
}

/// Enum option value: a bare number or string in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OptionValueConfig {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl From<OptionValueConfig> for OptionValue {
    fn from(value: OptionValueConfig) -> Self {
        match value {
            OptionValueConfig::Number(n) => OptionValue::Number(n),
            OptionValueConfig::Text(s) => OptionValue::Text(s),
        }
    }
}

impl From<OptionValue> for OptionValueConfig {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Number(n) => OptionValueConfig::Number(n),
            OptionValue::Text(s) => OptionValueConfig::Text(s),
        }
    }
}

/// One enum choice as written in a sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionConfig {
    /// Committed value.
    pub value: OptionValueConfig,
    /// Display label.
    pub label: String,
    /// Explicit MIDI position for custom mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi_value: Option<u64>,
}

fn parse_scale(id: &str, name: Option<&str>) -> ValidationResult<ScaleType> {
    match name {
        None => Ok(ScaleType::Linear),
        Some(name) => ScaleType::from_name(name).ok_or_else(|| ValidationError::UnknownScale {
            id: id.to_string(),
            scale: name.to_string(),
        }),
    }
}

fn parse_mode(id: &str, name: Option<&str>) -> ValidationResult<BooleanMode> {
    match name {
        None | Some("toggle") => Ok(BooleanMode::Toggle),
        Some("momentary") => Ok(BooleanMode::Momentary),
        Some(other) => Err(ValidationError::UnknownMode {
            id: id.to_string(),
            mode: other.to_string(),
        }),
    }
}

fn parse_mapping(id: &str, name: Option<&str>) -> ValidationResult<MidiMapping> {
    match name {
        None | Some("spread") => Ok(MidiMapping::Spread),
        Some("sequential") => Ok(MidiMapping::Sequential),
        Some("custom") => Ok(MidiMapping::Custom),
        Some(other) => Err(ValidationError::UnknownMapping {
            id: id.to_string(),
            mapping: other.to_string(),
        }),
    }
}

impl ParameterConfig {
    /// Resolution, kind, scale, mode and mapping names are resolved strictly;
    /// every unrecognized name is reported.
    ///
    /// Domain checks (`min < max`, positive step, options present) are left to
    /// [`AudioParameter::new`](audioui_core::AudioParameter::new).
    pub fn to_definition(&self) -> ValidationResult<ParameterDefinition> {
        let id = self.id.as_str();
        let mut errors = Vec::new();

        let midi_resolution = match self.midi_resolution {
            None => MidiResolution::default(),
            Some(bits) => MidiResolution::try_from(bits).unwrap_or_else(|_| {
                errors.push(ValidationError::UnsupportedResolution {
                    id: id.to_string(),
                    bits,
                });
                MidiResolution::default()
            }),
        };

        let kind = match &self.kind {
            KindConfig::Continuous {
                min,
                max,
                step,
                default_value,
                unit,
                scale,
            } => {
                let scale = parse_scale(id, scale.as_deref()).unwrap_or_else(|e| {
                    errors.push(e);
                    ScaleType::Linear
                });
                ParameterKind::Continuous(ContinuousParameter {
                    min: *min,
                    max: *max,
                    step: *step,
                    default_value: *default_value,
                    unit: unit.clone(),
                    scale,
                })
            }
            KindConfig::Boolean {
                default_value,
                mode,
                true_label,
                false_label,
            } => {
                let mode = parse_mode(id, mode.as_deref()).unwrap_or_else(|e| {
                    errors.push(e);
                    BooleanMode::Toggle
                });
                ParameterKind::Boolean(BooleanParameter {
                    default_value: *default_value,
                    mode,
                    true_label: true_label.clone(),
                    false_label: false_label.clone(),
                })
            }
            KindConfig::Enum {
                midi_mapping,
                default_value,
                options,
            } => {
                let midi_mapping = parse_mapping(id, midi_mapping.as_deref()).unwrap_or_else(|e| {
                    errors.push(e);
                    MidiMapping::Spread
                });
                ParameterKind::Enum(EnumParameter {
                    options: options
                        .iter()
                        .map(|o| EnumOption {
                            value: o.value.clone().into(),
                            label: o.label.clone(),
                            midi_value: o.midi_value,
                        })
                        .collect(),
                    default_value: default_value.clone().map(Into::into),
                    midi_mapping,
                })
            }
        };

        collect(errors)?;
        Ok(ParameterDefinition {
            id: self.id.clone(),
            name: self.name.clone(),
            midi_resolution,
            kind,
        })
    }
}

impl TryFrom<&ParameterDefinition> for ParameterConfig {
    type Error = ConfigError;

    /// Fails only for [`ScaleType::Custom`] curves.
    fn try_from(def: &ParameterDefinition) -> Result<Self, Self::Error> {
        let kind = match &def.kind {
            ParameterKind::Continuous(c) => {
                let scale = match c.scale {
                    ScaleType::Linear => None,
                    other => Some(
                        other
                            .name()
                            .ok_or_else(|| ConfigError::CustomScale(def.id.clone()))?
                            .to_string(),
                    ),
                };
                KindConfig::Continuous {
                    min: c.min,
                    max: c.max,
                    step: c.step,
                    default_value: c.default_value,
                    unit: c.unit.clone(),
                    scale,
                }
            }
            ParameterKind::Boolean(b) => KindConfig::Boolean {
                default_value: b.default_value,
                mode: (b.mode != BooleanMode::Toggle).then(|| b.mode.name().to_string()),
                true_label: b.true_label.clone(),
                false_label: b.false_label.clone(),
            },
            ParameterKind::Enum(e) => KindConfig::Enum {
                midi_mapping: (e.midi_mapping != MidiMapping::Spread)
                    .then(|| e.midi_mapping.name().to_string()),
                default_value: e.default_value.clone().map(Into::into),
                options: e
                    .options
                    .iter()
                    .map(|o| OptionConfig {
                        value: o.value.clone().into(),
                        label: o.label.clone(),
                        midi_value: o.midi_value,
                    })
                    .collect(),
            },
        };

        Ok(Self {
            id: def.id.clone(),
            name: def.name.clone(),
            midi_resolution: (def.midi_resolution != MidiResolution::default())
                .then(|| def.midi_resolution.bits()),
            kind,
        })
    }
}
