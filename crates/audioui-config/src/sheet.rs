//! Parameter sheet file format and operations.

use audioui_core::ParameterDefinition;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::parameter_config::ParameterConfig;

/// On-disk encoding of a sheet, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl SheetFormat {
    /// Format for a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A named list of parameter definitions, as stored in a TOML or JSON file.
///
/// A sheet is plain data; [`ParameterBank::from_sheet`](crate::ParameterBank::from_sheet)
/// validates it and builds the converters.
///
/// # TOML Format
///
/// ```toml
/// name = "Mono Synth"
/// description = "Filter and oscillator controls"
///
/// [[parameters]]
/// id = "cutoff"
/// name = "Cutoff"
/// type = "continuous"
/// min = 20.0
/// max = 20000.0
/// scale = "log"
/// unit = "Hz"
///
/// [[parameters]]
/// id = "bypass"
/// name = "Bypass"
/// type = "boolean"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterSheet {
    /// Name of the sheet.
    pub name: String,

    /// Optional description of the sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters in display order.
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

impl ParameterSheet {
    /// Create a new empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters: Vec::new(),
        }
    }

    /// Create a sheet with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a parameter to the sheet.
    pub fn with_parameter(mut self, parameter: ParameterConfig) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Build a sheet from in-memory definitions.
    ///
    /// Fails if a definition uses a custom scale function.
    pub fn from_definitions<'a>(
        name: impl Into<String>,
        definitions: impl IntoIterator<Item = &'a ParameterDefinition>,
    ) -> Result<Self, ConfigError> {
        let parameters = definitions
            .into_iter()
            .map(ParameterConfig::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            description: None,
            parameters,
        })
    }

    /// Load a sheet from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = SheetFormat::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let sheet = match format {
            SheetFormat::Toml => Self::from_toml(&content)?,
            SheetFormat::Json => Self::from_json(&content)?,
        };
        tracing::debug!(
            "loaded sheet '{}' from {}: {} parameters",
            sheet.name,
            path.display(),
            sheet.parameters.len()
        );
        Ok(sheet)
    }

    /// Load a sheet from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a sheet from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Save the sheet, choosing TOML or JSON by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = match SheetFormat::from_path(path)? {
            SheetFormat::Toml => self.to_toml()?,
            SheetFormat::Json => self.to_json()?,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!("saved sheet '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Convert the sheet to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert the sheet to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the number of parameters in the sheet.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Get a parameter by id.
    pub fn get(&self, id: &str) -> Option<&ParameterConfig> {
        self.parameters.iter().find(|p| p.id == id)
    }
}

impl Default for ParameterSheet {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter_config::{KindConfig, OptionValueConfig};
    use audioui_core::{EnumOption, MidiMapping, MidiResolution, ScaleType};

    const SYNTH: &str = r#"
name = "Mono Synth"
description = "Filter and oscillator"

[[parameters]]
id = "cutoff"
name = "Cutoff"
type = "continuous"
midi_resolution = 14
min = 20
max = 20000
scale = "log"
unit = "Hz"

[[parameters]]
id = "bypass"
name = "Bypass"
type = "boolean"
mode = "momentary"

[[parameters]]
id = "wave"
name = "Waveform"
type = "enum"
midi_mapping = "custom"
default_value = "tri"

[[parameters.options]]
value = "sine"
label = "Sine"
midi_value = 10

[[parameters.options]]
value = "tri"
label = "Triangle"
midi_value = 50
"#;

    #[test]
    fn test_sheet_from_toml() {
        let sheet = ParameterSheet::from_toml(SYNTH).unwrap();
        assert_eq!(sheet.name, "Mono Synth");
        assert_eq!(sheet.description.as_deref(), Some("Filter and oscillator"));
        assert_eq!(sheet.len(), 3);

        let cutoff = sheet.get("cutoff").unwrap();
        assert_eq!(cutoff.midi_resolution, Some(14));
        // integers are accepted for float fields
        let KindConfig::Continuous { min, max, .. } = cutoff.kind else {
            panic!("cutoff is continuous");
        };
        assert_eq!((min, max), (20.0, 20000.0));

        let KindConfig::Enum {
            options,
            default_value,
            ..
        } = &sheet.get("wave").unwrap().kind
        else {
            panic!("expected enum kind");
        };
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].midi_value, Some(50));
        assert_eq!(
            default_value,
            &Some(OptionValueConfig::Text("tri".to_string()))
        );
    }

    #[test]
    fn test_sheet_from_json() {
        let json = r#"{
            "name": "Mixer",
            "parameters": [
                { "id": "level", "name": "Level", "type": "continuous", "min": -60, "max": 6, "step": 0.5 },
                { "id": "ratio", "name": "Ratio", "type": "enum",
                  "options": [ { "value": 2, "label": "2:1" }, { "value": 4, "label": "4:1" } ] }
            ]
        }"#;
        let sheet = ParameterSheet::from_json(json).unwrap();
        assert_eq!(sheet.len(), 2);
        let KindConfig::Enum { options, .. } = &sheet.parameters[1].kind else {
            panic!("expected enum kind");
        };
        assert_eq!(options[0].value, OptionValueConfig::Number(2.0));
    }

    #[test]
    fn test_unknown_type_is_a_parse_error() {
        let toml = r#"
name = "Bad"

[[parameters]]
id = "x"
name = "X"
type = "slider"
"#;
        assert!(matches!(
            ParameterSheet::from_toml(toml),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let original = ParameterSheet::from_toml(SYNTH).unwrap();
        let toml = original.to_toml().unwrap();
        assert!(toml.contains("type = \"continuous\""), "got:\n{toml}");
        assert!(toml.contains("scale = \"log\""), "got:\n{toml}");
        assert_eq!(ParameterSheet::from_toml(&toml).unwrap(), original);
    }

    #[test]
    fn test_json_round_trip() {
        let original = ParameterSheet::from_toml(SYNTH).unwrap();
        let json = original.to_json().unwrap();
        assert!(json.contains("\"type\": \"enum\""), "got:\n{json}");
        assert_eq!(ParameterSheet::from_json(&json).unwrap(), original);
    }

    #[test]
    fn test_from_definitions() {
        let defs = [
            ParameterDefinition::continuous("gain", "Gain", -60.0, 6.0)
                .with_step(0.5)
                .with_scale(ScaleType::Exp)
                .with_resolution(MidiResolution::Bits7),
            ParameterDefinition::enumeration(
                "mode",
                "Mode",
                [EnumOption::new("a", "A"), EnumOption::new("b", "B")],
            )
            .with_mapping(MidiMapping::Sequential),
        ];
        let sheet = ParameterSheet::from_definitions("Strip", &defs).unwrap();
        assert_eq!(sheet.name, "Strip");
        let rebuilt: Vec<_> = sheet
            .parameters
            .iter()
            .map(|p| p.to_definition().unwrap())
            .collect();
        assert_eq!(rebuilt, defs);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SheetFormat::from_path(Path::new("a/synth.toml")).unwrap(),
            SheetFormat::Toml
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("synth.JSON")).unwrap(),
            SheetFormat::Json
        );
        assert!(matches!(
            SheetFormat::from_path(Path::new("synth.yaml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(SheetFormat::from_path(Path::new("synth")).is_err());
    }

    #[test]
    fn test_sheet_default() {
        let sheet = ParameterSheet::default();
        assert_eq!(sheet.name, "Untitled");
        assert!(sheet.is_empty());
    }
}
