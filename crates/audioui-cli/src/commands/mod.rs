//! CLI subcommands.

pub mod common;
pub mod convert;
pub mod inspect;
pub mod sweep;
pub mod template;
