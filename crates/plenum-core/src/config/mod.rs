//! Config variable subsystem types and service

pub mod handler;
pub mod service;
pub mod types;
pub mod validators;

pub use types::{
	Choices, ConfigChoice, ConfigRegistry, ConfigValue, ConfigVariable, ConfigVariableBuilder,
	FrozenConfigRegistry, InputType,
};

// vim: ts=4
