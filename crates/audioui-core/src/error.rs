//! Errors raised while building a converter from a parameter definition.
//!
//! Conversion itself never fails: every numeric input is clamped. The only
//! failure point is construction, where a definition that cannot describe a
//! usable domain is rejected up front.

use alloc::string::String;

/// Reasons a [`ParameterDefinition`](crate::ParameterDefinition) cannot be
/// turned into a converter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Continuous bounds are not finite, `min >= max`, or `max − min`
    /// overflows.
    InvalidRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// `step` is zero, negative, or not finite.
    InvalidStep(f64),
    /// An enum parameter declares no options.
    EmptyOptions,
    /// Custom MIDI mapping requires every option to carry a `midi_value`.
    MissingMidiValue {
        /// Label of the offending option.
        label: String,
    },
    /// A custom `midi_value` does not fit the parameter's resolution.
    MidiValueOutOfRange {
        /// Label of the offending option.
        label: String,
        /// The declared MIDI value.
        value: u64,
        /// Largest value the resolution can carry.
        max_midi: u64,
    },
    /// MIDI resolution other than 7, 8, 14, 16, 32 or 64 bits.
    UnsupportedResolution(u32),
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range [{min}, {max}]: min must be below max")
            }
            Self::InvalidStep(step) => write!(f, "step must be positive, got {step}"),
            Self::EmptyOptions => write!(f, "enum parameter has no options"),
            Self::MissingMidiValue { label } => write!(
                f,
                "option '{label}' has no midi_value (required by custom mapping)"
            ),
            Self::MidiValueOutOfRange {
                label,
                value,
                max_midi,
            } => write!(
                f,
                "option '{label}' midi_value {value} exceeds resolution maximum {max_midi}"
            ),
            Self::UnsupportedResolution(bits) => write!(
                f,
                "unsupported MIDI resolution {bits} (expected 7, 8, 14, 16, 32 or 64)"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParameterError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            ParameterError::InvalidRange { min: 1.0, max: 0.0 }.to_string(),
            "invalid range [1, 0]: min must be below max"
        );
        assert_eq!(
            ParameterError::UnsupportedResolution(12).to_string(),
            "unsupported MIDI resolution 12 (expected 7, 8, 14, 16, 32 or 64)"
        );
        assert_eq!(
            ParameterError::MissingMidiValue {
                label: "Saw".to_string()
            }
            .to_string(),
            "option 'Saw' has no midi_value (required by custom mapping)"
        );
    }
}
