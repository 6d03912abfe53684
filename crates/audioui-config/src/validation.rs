//! Parameter sheet validation.
//!
//! Checks everything a sheet can get wrong before any converter is built:
//! empty or duplicate ids, unrecognized scale/mode/mapping names,
//! unsupported resolutions, and finally the domain checks performed by
//! [`AudioParameter::new`]. Problems are collected rather than returned one
//! at a time, so a broken sheet is reported in full.
//!
//! # Example
//!
//! ```rust
//! use audioui_config::{ParameterSheet, validate_sheet};
//!
//! let sheet = ParameterSheet::from_toml(r#"
//! name = "Filter"
//!
//! [[parameters]]
//! id = "cutoff"
//! name = "Cutoff"
//! type = "continuous"
//! min = 20.0
//! max = 20000.0
//! scale = "log"
//! "#).unwrap();
//!
//! let params = validate_sheet(&sheet).expect("sheet is valid");
//! assert_eq!(params[0].id(), "cutoff");
//! ```

use std::collections::HashSet;

use audioui_core::{AudioParameter, OptionValue, ParamValue, ParameterError, ParameterKind};
use thiserror::Error;

use crate::parameter_config::ParameterConfig;
use crate::sheet::ParameterSheet;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A parameter has an empty id.
    #[error("parameter #{index} has an empty id")]
    EmptyId {
        /// Position of the parameter in the sheet.
        index: usize,
    },

    /// Two parameters share an id.
    #[error("duplicate parameter id '{0}'")]
    DuplicateId(String),

    /// Scale name is not `linear`, `log` or `exp`.
    #[error("unknown scale '{scale}' for parameter '{id}' (expected linear, log or exp)")]
    UnknownScale {
        /// Parameter id.
        id: String,
        /// The unrecognized name.
        scale: String,
    },

    /// Boolean mode is not `toggle` or `momentary`.
    #[error("unknown mode '{mode}' for parameter '{id}' (expected toggle or momentary)")]
    UnknownMode {
        /// Parameter id.
        id: String,
        /// The unrecognized name.
        mode: String,
    },

    /// MIDI mapping is not `spread`, `sequential` or `custom`.
    #[error(
        "unknown midi mapping '{mapping}' for parameter '{id}' (expected spread, sequential or custom)"
    )]
    UnknownMapping {
        /// Parameter id.
        id: String,
        /// The unrecognized name.
        mapping: String,
    },

    /// Resolution is not one of the supported bit widths.
    #[error(
        "unsupported MIDI resolution {bits} for parameter '{id}' (expected 7, 8, 14, 16, 32 or 64)"
    )]
    UnsupportedResolution {
        /// Parameter id.
        id: String,
        /// The declared width.
        bits: u32,
    },

    /// The definition was rejected when building its converter.
    #[error("invalid parameter '{id}': {source}")]
    InvalidParameter {
        /// Parameter id.
        id: String,
        /// What the converter rejected.
        #[source]
        source: ParameterError,
    },

    /// Text could not be read as a value of the parameter.
    #[error("invalid value '{value}' for parameter '{id}': {reason}")]
    InvalidValue {
        /// Parameter id.
        id: String,
        /// The text as given.
        value: String,
        /// Description of the format error.
        reason: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", join_errors(.0))]
    Multiple(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Folds a list of problems into one result: none is `Ok`, one is returned
/// as is, more become [`ValidationError::Multiple`] (flattened).
pub(crate) fn collect(errors: Vec<ValidationError>) -> ValidationResult<()> {
    let mut flat: Vec<ValidationError> = Vec::with_capacity(errors.len());
    for error in errors {
        match error {
            ValidationError::Multiple(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    match flat.len() {
        0 => Ok(()),
        1 => Err(flat.remove(0)),
        _ => Err(ValidationError::Multiple(flat)),
    }
}

/// Validate one parameter and build its converter.
pub fn validate_parameter(config: &ParameterConfig) -> ValidationResult<AudioParameter> {
    let definition = config.to_definition()?;
    AudioParameter::new(definition).map_err(|source| ValidationError::InvalidParameter {
        id: config.id.clone(),
        source,
    })
}

/// Validate a whole sheet and build a converter for each parameter, in order.
pub fn validate_sheet(sheet: &ParameterSheet) -> ValidationResult<Vec<AudioParameter>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut params = Vec::with_capacity(sheet.parameters.len());

    for (index, config) in sheet.parameters.iter().enumerate() {
        if config.id.trim().is_empty() {
            errors.push(ValidationError::EmptyId { index });
        } else if !seen.insert(config.id.as_str()) {
            errors.push(ValidationError::DuplicateId(config.id.clone()));
        }

        match validate_parameter(config) {
            Ok(param) => params.push(param),
            Err(e) => errors.push(e),
        }
    }

    collect(errors)?;
    tracing::debug!(
        "validated sheet '{}': {} parameters",
        sheet.name,
        params.len()
    );
    Ok(params)
}

fn invalid_value(
    param: &AudioParameter,
    text: &str,
    reason: impl Into<String>,
) -> ValidationError {
    ValidationError::InvalidValue {
        id: param.id().to_string(),
        value: text.to_string(),
        reason: reason.into(),
    }
}

/// Parse user-entered text as a value of `param`.
///
/// Supports:
/// - Continuous: plain numbers, optionally followed by the parameter's unit
///   (`"-6"`, `"-6 dB"`, `"440Hz"`)
/// - Boolean: `true/false`, `on/off`, `yes/no`, `1/0`, or the parameter's
///   own labels (case-insensitive)
/// - Enum: an option label (case-insensitive) or an option value
///
/// The result is not clamped; converters do that.
pub fn parse_value(param: &AudioParameter, text: &str) -> ValidationResult<ParamValue> {
    let s = text.trim();

    match &param.config().kind {
        ParameterKind::Continuous(c) => {
            let number = c
                .unit
                .as_deref()
                .filter(|unit| !unit.is_empty())
                .and_then(|unit| strip_suffix_ignore_case(s, unit))
                .unwrap_or(s)
                .trim();
            match number.parse::<f64>() {
                Ok(n) => Ok(ParamValue::Number(n)),
                Err(_) => {
                    let reason = format!("cannot parse '{number}' as number");
                    Err(invalid_value(param, text, reason))
                }
            }
        }
        ParameterKind::Boolean(b) => {
            let lower = s.to_lowercase();
            let label_is = |label: &Option<String>| {
                label.as_deref().is_some_and(|l| l.to_lowercase() == lower)
            };
            if label_is(&b.true_label) {
                return Ok(ParamValue::Bool(true));
            }
            if label_is(&b.false_label) {
                return Ok(ParamValue::Bool(false));
            }
            match lower.as_str() {
                "true" | "on" | "yes" | "1" => Ok(ParamValue::Bool(true)),
                "false" | "off" | "no" | "0" => Ok(ParamValue::Bool(false)),
                _ => Err(invalid_value(param, text, "expected on/off")),
            }
        }
        ParameterKind::Enum(e) => {
            let by_label = e.options.iter().find(|o| o.label.eq_ignore_ascii_case(s));
            let by_value = || {
                let numeric = s.parse::<f64>().ok();
                e.options.iter().find(|o| match &o.value {
                    OptionValue::Text(v) => v == s,
                    OptionValue::Number(n) => numeric == Some(*n),
                })
            };
            by_label
                .or_else(by_value)
                .map(|o| ParamValue::Choice(o.value.clone()))
                .ok_or_else(|| {
                    let labels: Vec<&str> = e.options.iter().map(|o| o.label.as_str()).collect();
                    let reason = format!("expected one of: {}", labels.join(", "));
                    invalid_value(param, text, reason)
                })
        }
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (head, tail) = (s.get(..split)?, s.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
