//! Validated, ready-to-convert parameter collections.

use std::collections::HashMap;
use std::path::Path;

use audioui_core::AudioParameter;

use crate::error::ConfigError;
use crate::sheet::ParameterSheet;
use crate::validation::validate_sheet;

/// The converters of a validated sheet, in sheet order, addressable by id.
///
/// # Example
///
/// ```rust
/// use audioui_config::{ParameterBank, ParameterSheet};
/// use audioui_core::ParamValue;
///
/// let sheet = ParameterSheet::from_toml(r#"
/// name = "Strip"
///
/// [[parameters]]
/// id = "gain"
/// name = "Gain"
/// type = "continuous"
/// min = -60.0
/// max = 6.0
/// step = 0.5
/// unit = "dB"
/// midi_resolution = 7
/// "#).unwrap();
///
/// let bank = ParameterBank::from_sheet(&sheet).unwrap();
/// let gain = bank.require("gain").unwrap();
/// assert_eq!(gain.to_midi(&ParamValue::Number(-27.0)), 64);
/// ```
#[derive(Debug, Clone)]
pub struct ParameterBank {
    name: String,
    parameters: Vec<AudioParameter>,
    index: HashMap<String, usize>,
}

impl ParameterBank {
    /// Validate a sheet and build every converter.
    pub fn from_sheet(sheet: &ParameterSheet) -> Result<Self, ConfigError> {
        let parameters = validate_sheet(sheet)?;
        let index = parameters
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id().to_string(), i))
            .collect();
        tracing::debug!(
            "built bank '{}' with {} parameters",
            sheet.name,
            parameters.len()
        );
        Ok(Self {
            name: sheet.name.clone(),
            parameters,
            index,
        })
    }

    /// Load, validate and build a sheet file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_sheet(&ParameterSheet::load(path)?)
    }

    /// Sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a parameter by id.
    pub fn get(&self, id: &str) -> Option<&AudioParameter> {
        self.index.get(id).map(|&i| &self.parameters[i])
    }

    /// Get a parameter by id, or [`ConfigError::UnknownParameter`].
    pub fn require(&self, id: &str) -> Result<&AudioParameter, ConfigError> {
        self.get(id)
            .ok_or_else(|| ConfigError::UnknownParameter(id.to_string()))
    }

    /// Check whether a parameter id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over parameters in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = &AudioParameter> {
        self.parameters.iter()
    }

    /// Parameter ids in sheet order.
    pub fn ids(&self) -> Vec<&str> {
        self.parameters.iter().map(AudioParameter::id).collect()
    }

    /// Get the number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the bank is empty.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParameterBank {
    type Item = &'a AudioParameter;
    type IntoIter = std::slice::Iter<'a, AudioParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use audioui_core::{BooleanMode, ParamValue, factory};

    fn strip() -> ParameterSheet {
        ParameterSheet::from_definitions(
            "Channel Strip",
            &[
                factory::bipolar_7bit("Pan"),
                factory::switch("Mute", BooleanMode::Toggle),
                factory::selector("Input", ["Mic", "Line", "Inst"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bank_lookup() {
        let bank = ParameterBank::from_sheet(&strip()).unwrap();
        assert_eq!(bank.name(), "Channel Strip");
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.ids(), vec!["pan", "mute", "input"]);
        assert!(bank.contains("mute"));
        assert!(!bank.contains("solo"));

        let pan = bank.get("pan").unwrap();
        assert_eq!(pan.to_midi(&ParamValue::Number(0.0)), 64);
    }

    #[test]
    fn test_require_unknown() {
        let bank = ParameterBank::from_sheet(&strip()).unwrap();
        let err = bank.require("solo").unwrap_err();
        let ConfigError::UnknownParameter(id) = &err else {
            panic!("expected UnknownParameter, got {err:?}");
        };
        assert_eq!(id, "solo");
    }

    #[test]
    fn test_iteration_keeps_sheet_order() {
        let bank = ParameterBank::from_sheet(&strip()).unwrap();
        let names: Vec<_> = (&bank).into_iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Pan", "Mute", "Input"]);
        assert_eq!(bank.iter().count(), 3);
    }

    #[test]
    fn test_invalid_sheet_is_rejected() {
        let mut sheet = strip();
        let duplicate = sheet.parameters[0].clone();
        sheet.parameters.push(duplicate);
        let err = ParameterBank::from_sheet(&sheet).unwrap_err();
        let ConfigError::Validation(ValidationError::DuplicateId(id)) = &err else {
            panic!("expected a duplicate id, got {err:?}");
        };
        assert_eq!(id, "pan");
    }

    #[test]
    fn test_empty_bank() {
        let bank = ParameterBank::from_sheet(&ParameterSheet::new("Empty")).unwrap();
        assert!(bank.is_empty());
        assert!(bank.ids().is_empty());
    }
}
