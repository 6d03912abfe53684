//! Conversion between real values, normalized positions and MIDI integers.
//!
//! Every parameter has three representations:
//!
//! - **real**: the value in its own domain (`-6.0` dB, `true`, `"saw"`)
//! - **normalized**: a position in \[0.0, 1.0\] for drawing fills and handles
//! - **MIDI**: an integer in `0..=max_midi`, where `max_midi = 2^bits − 1`
//!
//! The MIDI integer is the pivot. `normalize` and `denormalize` are *derived*
//! from [`Converter::to_midi`] / [`Converter::from_midi`] and never computed
//! on their own, so two real values that land on the same MIDI integer always
//! draw at the same position, and every commit a widget makes is a value the
//! MIDI grid can reproduce.
//!
//! # Pipeline
//!
//! ```text
//! real ──normalize_real──▶ [0,1] ──round(·max_midi)──▶ midi
//! midi ──÷max_midi──▶ [0,1] ──denormalize_real──▶ real (step-snapped)
//! ```
//!
//! # Typed and Dynamic Access
//!
//! [`ContinuousConverter`], [`BooleanConverter`] and [`EnumConverter`]
//! implement [`Converter`] with their natural value types. [`AudioParameter`]
//! wraps whichever one a [`ParameterDefinition`] calls for and exposes the same
//! operations over [`ParamValue`], which is what widgets hold.
//!
//! # Example
//!
//! ```rust
//! use audioui_core::{AudioParameter, MidiResolution, ParamValue, ParameterDefinition};
//!
//! let gain = ParameterDefinition::continuous("gain", "Gain", -60.0, 6.0)
//!     .with_step(0.5)
//!     .with_unit("dB")
//!     .with_resolution(MidiResolution::Bits7);
//! let param = AudioParameter::new(gain).unwrap();
//!
//! assert_eq!(param.to_midi(&ParamValue::Number(-27.0)), 64);
//! assert_eq!(param.format(&ParamValue::Number(-6.0)), "-6 dB");
//! assert_eq!(param.normalize(&ParamValue::Number(6.0)), 1.0);
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::definition::{
    BooleanParameter, ContinuousParameter, EnumOption, EnumParameter, MidiMapping, MidiResolution,
    OptionValue, ParamValue, ParameterDefinition, ParameterKind,
};
use crate::error::ParameterError;
use crate::scale::ScaleType;

/// Decimal places kept after step snapping.
const CLEANUP_DECIMALS: f64 = 1e10;

/// Above this magnitude `value · 1e10` no longer has sub-unit precision in
/// `f64`, so the cleanup would only add error.
const CLEANUP_LIMIT: f64 = 4.5e15;

/// Converts one kind of parameter value to and from the MIDI pivot.
///
/// Implementors supply the MIDI mapping and formatting; normalization is
/// provided and always routes through MIDI.
pub trait Converter: Send + Sync {
    /// The real-domain value type.
    type Value;

    /// Largest MIDI integer of this parameter's resolution.
    fn max_midi(&self) -> u64;

    /// Real value → MIDI integer in `0..=max_midi`.
    fn to_midi(&self, value: &Self::Value) -> u64;

    /// MIDI integer → real value. Inputs above `max_midi` are clamped.
    fn from_midi(&self, midi: u64) -> Self::Value;

    /// Display text for a value.
    fn format(&self, value: &Self::Value) -> String;

    /// Real value → quantized position in \[0.0, 1.0\].
    fn normalize(&self, value: &Self::Value) -> f64 {
        midi_to_unit(self.to_midi(value), self.max_midi())
    }

    /// Position → real value. The position is clamped to \[0.0, 1.0\] and
    /// rounded to the nearest MIDI integer first.
    fn denormalize(&self, normalized: f64) -> Self::Value {
        self.from_midi(unit_to_midi(normalized, self.max_midi()))
    }
}

/// Clamps a position to \[0, 1\] and quantizes it to the MIDI grid.
///
/// Halves round up (`63.5 → 64`). NaN maps to 0.
#[inline]
pub fn unit_to_midi(normalized: f64, max_midi: u64) -> u64 {
    let unit = clamp_unit(normalized);
    let midi = libm::round(unit * max_midi as f64);
    // `as` saturates; 2^64 from a 64-bit grid lands on u64::MAX
    (midi as u64).min(max_midi)
}

/// MIDI integer → position in \[0, 1\], clamping the input to `max_midi`.
#[inline]
pub fn midi_to_unit(midi: u64, max_midi: u64) -> f64 {
    midi.min(max_midi) as f64 / max_midi as f64
}

#[inline]
fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Rounds to 10 decimal places to remove step-snapping residue such as
/// `42.00000000000001`.
#[inline]
fn cleanup_decimals(value: f64) -> f64 {
    let scaled = value * CLEANUP_DECIMALS;
    if !scaled.is_finite() || scaled.abs() >= CLEANUP_LIMIT {
        return value;
    }
    libm::round(scaled) / CLEANUP_DECIMALS
}

// ---------------------------------------------------------------------------
// Continuous
// ---------------------------------------------------------------------------

/// Converter for real-valued ranges with optional step grid and curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousConverter {
    min: f64,
    max: f64,
    step: Option<f64>,
    unit: Option<String>,
    scale: ScaleType,
    max_midi: u64,
}

impl ContinuousConverter {
    /// Builds a converter, rejecting empty ranges, non-positive steps and
    /// ranges whose span `max − min` is not finite.
    pub fn new(
        param: &ContinuousParameter,
        resolution: MidiResolution,
    ) -> Result<Self, ParameterError> {
        let ContinuousParameter { min, max, step, .. } = *param;
        if !(min < max && (max - min).is_finite()) {
            return Err(ParameterError::InvalidRange { min, max });
        }
        if let Some(step) = step.filter(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(ParameterError::InvalidStep(step));
        }
        Ok(Self {
            min,
            max,
            step,
            unit: param.unit.clone(),
            scale: param.scale,
            max_midi: resolution.max_midi(),
        })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The resolved curve.
    pub fn scale(&self) -> ScaleType {
        self.scale
    }

    /// Decimal places shown by [`format`](Converter::format):
    /// `ceil(log10(1/step))` (never negative), or 1 without a step.
    pub fn precision(&self) -> usize {
        match self.step {
            Some(step) => libm::ceil(libm::log10(1.0 / step)).max(0.0) as usize,
            None => 1,
        }
    }

    /// Real value → unquantized position. Out-of-range values clamp to the
    /// nearest end; the curve is applied after clamping.
    pub fn normalize_real(&self, real: f64) -> f64 {
        let linear = clamp_unit((real - self.min) / (self.max - self.min));
        if self.scale.is_linear() {
            linear
        } else {
            self.scale.forward(linear)
        }
    }

    /// Unquantized position → real value, snapped to `step` when set.
    pub fn denormalize_real(&self, normalized: f64) -> f64 {
        let normalized = clamp_unit(normalized);
        let curved = if self.scale.is_linear() {
            normalized
        } else {
            self.scale.inverse(normalized)
        };
        let real = self.min + curved * (self.max - self.min);

        match self.step {
            Some(step) => {
                let snapped = libm::round((real - self.min) / step) * step + self.min;
                cleanup_decimals(snapped).clamp(self.min, self.max)
            }
            None => real.clamp(self.min, self.max),
        }
    }
}

impl Converter for ContinuousConverter {
    type Value = f64;

    fn max_midi(&self) -> u64 {
        self.max_midi
    }

    fn to_midi(&self, value: &f64) -> u64 {
        unit_to_midi(self.normalize_real(*value), self.max_midi)
    }

    fn from_midi(&self, midi: u64) -> f64 {
        self.denormalize_real(midi_to_unit(midi, self.max_midi))
    }

    fn format(&self, value: &f64) -> String {
        let precision = self.precision();
        let shown = if precision <= 15 {
            let factor = libm::pow(10.0, precision as f64);
            let rounded = libm::round(value * factor) / factor;
            if rounded.is_finite() { rounded } else { *value }
        } else {
            *value
        };
        // -0.0 would print as "-0"
        let shown = if shown == 0.0 { 0.0 } else { shown };

        match self.unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("{shown} {unit}"),
            _ => format!("{shown}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Boolean
// ---------------------------------------------------------------------------

/// Converter for on/off parameters: `false → 0`, `true → max_midi`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanConverter {
    true_label: Option<String>,
    false_label: Option<String>,
    max_midi: u64,
}

impl BooleanConverter {
    /// Builds a converter. Boolean definitions cannot be invalid.
    pub fn new(param: &BooleanParameter, resolution: MidiResolution) -> Self {
        Self {
            true_label: param.true_label.clone(),
            false_label: param.false_label.clone(),
            max_midi: resolution.max_midi(),
        }
    }

    /// `true → 1.0`, `false → 0.0`.
    pub fn normalize_real(&self, value: bool) -> f64 {
        if value { 1.0 } else { 0.0 }
    }

    /// `true` from the midpoint up (inclusive).
    pub fn denormalize_real(&self, normalized: f64) -> bool {
        clamp_unit(normalized) >= 0.5
    }
}

impl Converter for BooleanConverter {
    type Value = bool;

    fn max_midi(&self) -> u64 {
        self.max_midi
    }

    fn to_midi(&self, value: &bool) -> u64 {
        if *value { self.max_midi } else { 0 }
    }

    fn from_midi(&self, midi: u64) -> bool {
        self.denormalize_real(midi_to_unit(midi, self.max_midi))
    }

    fn format(&self, value: &bool) -> String {
        let label = if *value {
            self.true_label.as_deref().unwrap_or("On")
        } else {
            self.false_label.as_deref().unwrap_or("Off")
        };
        label.to_string()
    }
}

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// Converter for ordered option lists.
///
/// The normalized position of an option is always its index over
/// `count − 1`; the MIDI layout depends on [`MidiMapping`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConverter {
    options: Vec<EnumOption>,
    mapping: MidiMapping,
    max_midi: u64,
}

impl EnumConverter {
    /// Builds a converter.
    ///
    /// Rejects empty option lists. With [`MidiMapping::Custom`], every option
    /// must carry a `midi_value` that fits the resolution.
    pub fn new(param: &EnumParameter, resolution: MidiResolution) -> Result<Self, ParameterError> {
        if param.options.is_empty() {
            return Err(ParameterError::EmptyOptions);
        }
        let max_midi = resolution.max_midi();
        if param.midi_mapping == MidiMapping::Custom {
            for option in &param.options {
                match option.midi_value {
                    None => {
                        return Err(ParameterError::MissingMidiValue {
                            label: option.label.clone(),
                        });
                    }
                    Some(value) if value > max_midi => {
                        return Err(ParameterError::MidiValueOutOfRange {
                            label: option.label.clone(),
                            value,
                            max_midi,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(Self {
            options: param.options.clone(),
            mapping: param.midi_mapping,
            max_midi,
        })
    }

    /// The options in declaration order.
    pub fn options(&self) -> &[EnumOption] {
        &self.options
    }

    /// The MIDI layout.
    pub fn mapping(&self) -> MidiMapping {
        self.mapping
    }

    /// Index of the first option whose value equals `value`.
    pub fn index_of(&self, value: &OptionValue) -> Option<usize> {
        self.options.iter().position(|o| o.value == *value)
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.options.len() - 1
    }

    fn index_position(&self, index: usize) -> f64 {
        match self.last_index() {
            0 => 0.0,
            last => index as f64 / last as f64,
        }
    }

    /// Option value → `index / (count − 1)`. Unknown values map to 0.
    pub fn normalize_real(&self, value: &OptionValue) -> f64 {
        self.index_of(value)
            .map_or(0.0, |index| self.index_position(index))
    }

    /// Position → value of the option at `round(position · (count − 1))`.
    pub fn denormalize_real(&self, normalized: f64) -> OptionValue {
        let last = self.last_index();
        let index = libm::round(clamp_unit(normalized) * last as f64) as usize;
        self.options[index.min(last)].value.clone()
    }

    fn nearest_custom(&self, midi: u64) -> &EnumOption {
        let mut best: Option<(&EnumOption, u64)> = None;
        for option in &self.options {
            let Some(value) = option.midi_value else {
                continue;
            };
            let distance = value.abs_diff(midi);
            // strict: ties keep the earlier option
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((option, distance));
            }
        }
        best.map_or(&self.options[0], |(option, _)| option)
    }
}

impl Converter for EnumConverter {
    type Value = OptionValue;

    fn max_midi(&self) -> u64 {
        self.max_midi
    }

    fn to_midi(&self, value: &OptionValue) -> u64 {
        match self.mapping {
            MidiMapping::Spread => unit_to_midi(self.normalize_real(value), self.max_midi),
            MidiMapping::Sequential => self
                .index_of(value)
                .map_or(0, |index| (index as u64).min(self.max_midi)),
            MidiMapping::Custom => self
                .index_of(value)
                .and_then(|index| self.options[index].midi_value)
                .unwrap_or(0),
        }
    }

    fn from_midi(&self, midi: u64) -> OptionValue {
        match self.mapping {
            MidiMapping::Spread => self.denormalize_real(midi_to_unit(midi, self.max_midi)),
            MidiMapping::Sequential => {
                let index = usize::try_from(midi).unwrap_or(usize::MAX);
                self.options[index.min(self.last_index())].value.clone()
            }
            MidiMapping::Custom => self.nearest_custom(midi).value.clone(),
        }
    }

    fn format(&self, value: &OptionValue) -> String {
        self.options
            .iter()
            .find(|o| o.value == *value)
            .map_or_else(|| value.to_string(), |o| o.label.clone())
    }
}

// ---------------------------------------------------------------------------
// AudioParameter
// ---------------------------------------------------------------------------

/// Kind-specific converter held by [`AudioParameter`].
#[derive(Debug, Clone, PartialEq)]
pub enum KindConverter {
    /// Real-valued range.
    Continuous(ContinuousConverter),
    /// On/off switch.
    Boolean(BooleanConverter),
    /// Option list.
    Enum(EnumConverter),
}

/// A parameter definition together with its resolved converter.
///
/// Built once per definition and never mutated, so it can be shared freely
/// between widgets and threads. Values of the wrong kind are coerced rather
/// than rejected:
///
/// - continuous: booleans count as 0/1; text counts as the minimum
/// - boolean: numbers are `true` when non-zero
/// - enum: numbers match numeric option values; booleans match nothing
///
/// # Example
///
/// ```rust
/// use audioui_core::{AudioParameter, EnumOption, MidiMapping, ParamValue, ParameterDefinition};
///
/// let def = ParameterDefinition::enumeration(
///     "wave",
///     "Waveform",
///     [
///         EnumOption::new("sine", "Sine").with_midi_value(10),
///         EnumOption::new("tri", "Triangle").with_midi_value(50),
///         EnumOption::new("saw", "Saw").with_midi_value(90),
///     ],
/// )
/// .with_mapping(MidiMapping::Custom);
/// let param = AudioParameter::new(def).unwrap();
///
/// assert_eq!(param.from_midi(12), ParamValue::from("sine"));
/// assert_eq!(param.from_midi(40), ParamValue::from("tri"));
/// assert_eq!(param.format(&ParamValue::from("saw")), "Saw");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioParameter {
    definition: ParameterDefinition,
    converter: KindConverter,
}

impl AudioParameter {
    /// Validates the definition and resolves its converter.
    pub fn new(definition: ParameterDefinition) -> Result<Self, ParameterError> {
        let resolution = definition.midi_resolution;
        let converter = match &definition.kind {
            ParameterKind::Continuous(c) => {
                KindConverter::Continuous(ContinuousConverter::new(c, resolution)?)
            }
            ParameterKind::Boolean(b) => {
                KindConverter::Boolean(BooleanConverter::new(b, resolution))
            }
            ParameterKind::Enum(e) => KindConverter::Enum(EnumConverter::new(e, resolution)?),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "parameter '{}': {} converter, {}-bit",
            definition.id,
            definition.kind_name(),
            resolution.bits()
        );
        Ok(Self {
            definition,
            converter,
        })
    }

    /// The definition this parameter was built from.
    pub fn config(&self) -> &ParameterDefinition {
        &self.definition
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// The resolved converter.
    pub fn converter(&self) -> &KindConverter {
        &self.converter
    }

    /// Largest MIDI integer.
    pub fn max_midi(&self) -> u64 {
        match &self.converter {
            KindConverter::Continuous(c) => c.max_midi(),
            KindConverter::Boolean(b) => b.max_midi(),
            KindConverter::Enum(e) => e.max_midi(),
        }
    }

    /// Value → MIDI integer.
    pub fn to_midi(&self, value: &ParamValue) -> u64 {
        match &self.converter {
            KindConverter::Continuous(c) => value.as_f64().map_or(0, |v| c.to_midi(&v)),
            KindConverter::Boolean(b) => b.to_midi(&value.as_bool()),
            KindConverter::Enum(e) => match value {
                ParamValue::Choice(v) => e.to_midi(v),
                ParamValue::Number(n) => e.to_midi(&OptionValue::Number(*n)),
                ParamValue::Bool(_) => 0,
            },
        }
    }

    /// MIDI integer → value.
    pub fn from_midi(&self, midi: u64) -> ParamValue {
        match &self.converter {
            KindConverter::Continuous(c) => ParamValue::Number(c.from_midi(midi)),
            KindConverter::Boolean(b) => ParamValue::Bool(b.from_midi(midi)),
            KindConverter::Enum(e) => ParamValue::Choice(e.from_midi(midi)),
        }
    }

    /// Value → quantized position in \[0.0, 1.0\].
    pub fn normalize(&self, value: &ParamValue) -> f64 {
        midi_to_unit(self.to_midi(value), self.max_midi())
    }

    /// Position → value, via the nearest MIDI integer.
    pub fn denormalize(&self, normalized: f64) -> ParamValue {
        self.from_midi(unit_to_midi(normalized, self.max_midi()))
    }

    /// Display text.
    pub fn format(&self, value: &ParamValue) -> String {
        match &self.converter {
            KindConverter::Continuous(c) => match value.as_f64() {
                Some(v) => c.format(&v),
                None => value.to_string(),
            },
            KindConverter::Boolean(b) => b.format(&value.as_bool()),
            KindConverter::Enum(e) => match value {
                ParamValue::Choice(v) => e.format(v),
                ParamValue::Number(n) => e.format(&OptionValue::Number(*n)),
                ParamValue::Bool(_) => value.to_string(),
            },
        }
    }

    /// The value a control resets to.
    ///
    /// Continuous: `default_value` clamped to the range, else `min`.
    /// Boolean: `default_value`, else `false`. Enum: `default_value` when it
    /// names an option, else the first option.
    pub fn default_value(&self) -> ParamValue {
        match (&self.definition.kind, &self.converter) {
            (ParameterKind::Continuous(def), KindConverter::Continuous(c)) => {
                let value = def.default_value.filter(|v| !v.is_nan());
                ParamValue::Number(value.map_or(c.min(), |v| v.clamp(c.min(), c.max())))
            }
            (ParameterKind::Boolean(def), _) => {
                ParamValue::Bool(def.default_value.unwrap_or(false))
            }
            (ParameterKind::Enum(def), KindConverter::Enum(e)) => match &def.default_value {
                Some(v) if e.index_of(v).is_some() => ParamValue::Choice(v.clone()),
                _ => ParamValue::Choice(e.options()[0].value.clone()),
            },
            // converter is always built from the same kind
            _ => self.from_midi(0),
        }
    }

    /// Quantized position of [`default_value`](Self::default_value).
    pub fn default_normalized(&self) -> f64 {
        self.normalize(&self.default_value())
    }

    /// Snaps a value onto the grid this parameter can reproduce.
    pub fn clamp(&self, value: &ParamValue) -> ParamValue {
        self.from_midi(self.to_midi(value))
    }
}
