//! Parameter sheets for audioui.
//!
//! This crate stores [`audioui_core`] parameter definitions in files and turns
//! them back into ready-to-use converters.
//!
//! # Features
//!
//! - **Sheets**: Load and save parameter lists as TOML or JSON
//! - **Validation**: Strict names, unique ids, domain checks, all reported at once
//! - **Banks**: Validated converters addressable by parameter id
//! - **Value parsing**: Read user text such as `"-6 dB"`, `"on"` or `"Saw"`
//!
//! # Example
//!
//! ```rust,no_run
//! use audioui_config::{ParameterBank, ParameterSheet, parse_value};
//! use audioui_core::{BooleanMode, factory};
//!
//! // Write a sheet built from factory controls
//! let sheet = ParameterSheet::from_definitions(
//!     "Channel Strip",
//!     &[
//!         factory::bipolar_7bit("Pan"),
//!         factory::switch("Mute", BooleanMode::Toggle),
//!     ],
//! )
//! .unwrap();
//! sheet.save("strip.toml").unwrap();
//!
//! // Load it back and convert
//! let bank = ParameterBank::load("strip.toml").unwrap();
//! let pan = bank.require("pan").unwrap();
//! let value = parse_value(pan, "-12").unwrap();
//! println!("{} → MIDI {}", pan.format(&value), pan.to_midi(&value));
//! ```

mod bank;
mod error;
mod parameter_config;
mod sheet;

/// Sheet validation and value parsing.
pub mod validation;

pub use bank::ParameterBank;
pub use error::ConfigError;
pub use parameter_config::{KindConfig, OptionConfig, OptionValueConfig, ParameterConfig};
pub use sheet::{ParameterSheet, SheetFormat};
pub use validation::{
    ValidationError, ValidationResult, parse_value, validate_parameter, validate_sheet,
};
