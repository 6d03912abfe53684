//! audioui Core - parameter model for audio control widgets
//!
//! Knobs, sliders, buttons and keybeds all edit a *parameter*. This crate
//! defines what a parameter is and how its value moves between the three
//! representations a widget needs:
//!
//! - the **real** value a user reads and a DSP engine consumes
//! - the **normalized** position in \[0.0, 1.0\] a widget draws
//! - the **MIDI** integer that quantizes both and bridges to controllers
//!
//! # Core Abstractions
//!
//! ## Definitions
//!
//! - [`ParameterDefinition`] - identity, resolution and [`ParameterKind`]
//! - [`ContinuousParameter`], [`BooleanParameter`], [`EnumParameter`] - per-kind domains
//! - [`MidiResolution`] - 7, 8, 14, 16, 32 or 64-bit quantization grid
//!
//! ## Scales
//!
//! - [`ScaleType`] - linear, log, exp or a custom [`ScaleFunction`] pair
//!
//! ## Conversion
//!
//! - [`Converter`] - typed conversion trait; normalization is derived from MIDI
//! - [`ContinuousConverter`], [`BooleanConverter`], [`EnumConverter`]
//! - [`AudioParameter`] - definition + converter over dynamic [`ParamValue`]s
//!
//! ## Factories
//!
//! - [`factory`] - `standard_7bit`, `bipolar_14bit`, `switch`, `selector`, ...
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for labels and option
//! lists). Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! audioui-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use audioui_core::{AudioParameter, ParamValue, ScaleType, ParameterDefinition};
//!
//! let cutoff = AudioParameter::new(
//!     ParameterDefinition::continuous("cutoff", "Cutoff", 20.0, 20000.0)
//!         .with_scale(ScaleType::Log)
//!         .with_step(1.0)
//!         .with_unit("Hz"),
//! )
//! .unwrap();
//!
//! // A knob at 12 o'clock
//! let value = cutoff.denormalize(0.5);
//! let label = cutoff.format(&value);
//! assert!(label.ends_with(" Hz"));
//! ```
//!
//! # Design Principles
//!
//! - **MIDI is the pivot**: normalize/denormalize always pass through the integer grid
//! - **Pure**: converters are immutable after construction, `Send + Sync`
//! - **Total**: conversion never fails; inputs are clamped, unknown values degrade
//! - **Validated once**: bad definitions are rejected when the converter is built

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod converter;
pub mod definition;
pub mod error;
pub mod factory;
pub mod scale;

// Re-export main types at crate root
pub use converter::{
    AudioParameter, BooleanConverter, ContinuousConverter, Converter, EnumConverter, KindConverter,
    midi_to_unit, unit_to_midi,
};
pub use definition::{
    BooleanMode, BooleanParameter, ContinuousParameter, EnumOption, EnumParameter, MidiMapping,
    MidiResolution, OptionValue, ParamValue, ParameterDefinition, ParameterKind,
};
pub use error::ParameterError;
pub use scale::{ScaleFunction, ScaleType, resolve_scale};
