//! Parameter definitions: what a control edits, independent of how it is drawn.
//!
//! A [`ParameterDefinition`] carries the fields every parameter shares (`id`,
//! `name`, MIDI resolution) and a [`ParameterKind`] payload with the
//! kind-specific domain. Definitions are plain immutable data; all behavior
//! lives in [`converter`](crate::converter).
//!
//! # Example
//!
//! ```rust
//! use audioui_core::{MidiResolution, ParameterDefinition, ScaleType};
//!
//! let cutoff = ParameterDefinition::continuous("cutoff", "Cutoff", 20.0, 20000.0)
//!     .with_unit("Hz")
//!     .with_scale(ScaleType::Log)
//!     .with_resolution(MidiResolution::Bits14);
//!
//! assert_eq!(cutoff.kind_name(), "continuous");
//! assert_eq!(cutoff.midi_resolution.max_midi(), 16383);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ParameterError;
use crate::scale::ScaleType;

/// Bit width of the MIDI quantization grid.
///
/// `max_midi = 2^bits − 1`. The default is 32 bits, fine enough that
/// quantization is invisible on screen while still giving every position an
/// exact integer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MidiResolution {
    /// Classic 7-bit MIDI CC (0–127).
    Bits7,
    /// 8-bit (0–255).
    Bits8,
    /// 14-bit MSB/LSB CC pair (0–16383).
    Bits14,
    /// 16-bit (0–65535).
    Bits16,
    /// 32-bit (default).
    #[default]
    Bits32,
    /// 64-bit. Positions above 2^53 are not exactly representable in `f64`.
    Bits64,
}

impl MidiResolution {
    /// Bit width.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits7 => 7,
            Self::Bits8 => 8,
            Self::Bits14 => 14,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Largest MIDI integer: `2^bits − 1`.
    pub const fn max_midi(self) -> u64 {
        match self {
            Self::Bits64 => u64::MAX,
            other => (1u64 << other.bits()) - 1,
        }
    }
}

impl TryFrom<u32> for MidiResolution {
    type Error = ParameterError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            7 => Ok(Self::Bits7),
            8 => Ok(Self::Bits8),
            14 => Ok(Self::Bits14),
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            other => Err(ParameterError::UnsupportedResolution(other)),
        }
    }
}

/// A parameter: identity, resolution and kind-specific domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    /// Stable identifier assigned by the caller (e.g. `"cutoff"`).
    pub id: String,
    /// Display label.
    pub name: String,
    /// Quantization grid of the MIDI pivot.
    pub midi_resolution: MidiResolution,
    /// Kind and domain.
    pub kind: ParameterKind,
}

/// The three parameter kinds and their domains.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// A real-valued range.
    Continuous(ContinuousParameter),
    /// An on/off switch.
    Boolean(BooleanParameter),
    /// An ordered list of discrete choices.
    Enum(EnumParameter),
}

/// Domain of a continuous parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousParameter {
    /// Lower bound (must be below `max`).
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Real-unit grid; values snap to `min + k·step`.
    pub step: Option<f64>,
    /// Value a control resets to.
    pub default_value: Option<f64>,
    /// Display suffix, e.g. `"dB"`.
    pub unit: Option<String>,
    /// Normalization curve.
    pub scale: ScaleType,
}

/// How the interaction layer drives a boolean control.
///
/// The converter ignores this; it is carried for the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BooleanMode {
    /// Each press flips the state.
    #[default]
    Toggle,
    /// On while held.
    Momentary,
}

impl BooleanMode {
    /// Lowercase name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Momentary => "momentary",
        }
    }
}

/// Domain of a boolean parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanParameter {
    /// Initial state.
    pub default_value: Option<bool>,
    /// Press behavior.
    pub mode: BooleanMode,
    /// Label for `true` (default "On").
    pub true_label: Option<String>,
    /// Label for `false` (default "Off").
    pub false_label: Option<String>,
}

/// How enum options are laid out on the MIDI grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MidiMapping {
    /// Options spread evenly across `0..=max_midi` (default).
    #[default]
    Spread,
    /// The MIDI value is the option index.
    Sequential,
    /// Each option declares its own `midi_value`.
    Custom,
}

impl MidiMapping {
    /// Lowercase name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spread => "spread",
            Self::Sequential => "sequential",
            Self::Custom => "custom",
        }
    }
}

/// Value carried by an enum option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Numeric value (e.g. an oversampling factor).
    Number(f64),
    /// Text value (e.g. `"saw"`).
    Text(String),
}

impl core::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One choice of an enum parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumOption {
    /// Value committed when this option is selected.
    pub value: OptionValue,
    /// Display label.
    pub label: String,
    /// Explicit MIDI position, used by [`MidiMapping::Custom`].
    pub midi_value: Option<u64>,
}

impl EnumOption {
    /// Option without an explicit MIDI value.
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            midi_value: None,
        }
    }

    /// Sets the explicit MIDI value.
    pub fn with_midi_value(mut self, midi_value: u64) -> Self {
        self.midi_value = Some(midi_value);
        self
    }
}

/// Domain of an enum parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumParameter {
    /// Choices; order defines the index mapping.
    pub options: Vec<EnumOption>,
    /// Initially selected value.
    pub default_value: Option<OptionValue>,
    /// MIDI layout.
    pub midi_mapping: MidiMapping,
}

/// A value of any parameter kind, as passed through
/// [`AudioParameter`](crate::AudioParameter).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Continuous value.
    Number(f64),
    /// Boolean state.
    Bool(bool),
    /// Enum selection.
    Choice(OptionValue),
}

impl ParamValue {
    /// Numeric view: numbers as is, booleans as 0/1, numeric choices as their
    /// value. Text choices have no numeric view.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Choice(OptionValue::Number(n)) => Some(*n),
            Self::Choice(OptionValue::Text(_)) => None,
        }
    }

    /// Truthiness: `true`, non-zero numbers, non-empty text.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Choice(OptionValue::Number(n)) => *n != 0.0 && !n.is_nan(),
            Self::Choice(OptionValue::Text(s)) => !s.is_empty(),
        }
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Choice(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<OptionValue> for ParamValue {
    fn from(v: OptionValue) -> Self {
        Self::Choice(v)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Choice(OptionValue::from(s))
    }
}

impl ParameterDefinition {
    /// Continuous parameter over `min..=max`, linear, no step, 32-bit.
    pub fn continuous(id: impl Into<String>, name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            midi_resolution: MidiResolution::default(),
            kind: ParameterKind::Continuous(ContinuousParameter {
                min,
                max,
                step: None,
                default_value: None,
                unit: None,
                scale: ScaleType::Linear,
            }),
        }
    }

    /// Boolean toggle labelled "On"/"Off".
    pub fn boolean(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            midi_resolution: MidiResolution::default(),
            kind: ParameterKind::Boolean(BooleanParameter::default()),
        }
    }

    /// Enum parameter with spread mapping.
    pub fn enumeration(
        id: impl Into<String>,
        name: impl Into<String>,
        options: impl IntoIterator<Item = EnumOption>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            midi_resolution: MidiResolution::default(),
            kind: ParameterKind::Enum(EnumParameter {
                options: options.into_iter().collect(),
                default_value: None,
                midi_mapping: MidiMapping::Spread,
            }),
        }
    }

    /// `"continuous"`, `"boolean"` or `"enum"`.
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            ParameterKind::Continuous(_) => "continuous",
            ParameterKind::Boolean(_) => "boolean",
            ParameterKind::Enum(_) => "enum",
        }
    }

    /// Sets the MIDI resolution.
    pub fn with_resolution(mut self, resolution: MidiResolution) -> Self {
        self.midi_resolution = resolution;
        self
    }

    /// Sets the step of a continuous parameter. No effect on other kinds.
    pub fn with_step(mut self, step: f64) -> Self {
        if let ParameterKind::Continuous(c) = &mut self.kind {
            c.step = Some(step);
        }
        self
    }

    /// Sets the unit of a continuous parameter. No effect on other kinds.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        if let ParameterKind::Continuous(c) = &mut self.kind {
            c.unit = Some(unit.into());
        }
        self
    }

    /// Sets the scale of a continuous parameter. No effect on other kinds.
    pub fn with_scale(mut self, scale: impl Into<ScaleType>) -> Self {
        if let ParameterKind::Continuous(c) = &mut self.kind {
            c.scale = scale.into();
        }
        self
    }

    /// Sets the default value. Ignored when the value does not fit the kind
    /// (a number for continuous, a bool for boolean, a choice for enum).
    pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
        match (&mut self.kind, value.into()) {
            (ParameterKind::Continuous(c), ParamValue::Number(n)) => c.default_value = Some(n),
            (ParameterKind::Boolean(b), ParamValue::Bool(v)) => b.default_value = Some(v),
            (ParameterKind::Enum(e), ParamValue::Choice(v)) => e.default_value = Some(v),
            _ => {}
        }
        self
    }

    /// Sets the press mode of a boolean parameter. No effect on other kinds.
    pub fn with_mode(mut self, mode: BooleanMode) -> Self {
        if let ParameterKind::Boolean(b) = &mut self.kind {
            b.mode = mode;
        }
        self
    }

    /// Sets the true/false labels of a boolean parameter. No effect on other kinds.
    pub fn with_labels(
        mut self,
        true_label: impl Into<String>,
        false_label: impl Into<String>,
    ) -> Self {
        if let ParameterKind::Boolean(b) = &mut self.kind {
            b.true_label = Some(true_label.into());
            b.false_label = Some(false_label.into());
        }
        self
    }

    /// Sets the MIDI mapping of an enum parameter. No effect on other kinds.
    pub fn with_mapping(mut self, mapping: MidiMapping) -> Self {
        if let ParameterKind::Enum(e) = &mut self.kind {
            e.midi_mapping = mapping;
        }
        self
    }
}
