//! Core config variable registration
//!
//! Registers the instance-level variables every assembly carries, regardless
//! of which feature modules are enabled.

use crate::config::{ConfigRegistry, ConfigValue, ConfigVariable};
use crate::prelude::*;

/// Register the core module's config variables
pub fn register_config(registry: &mut ConfigRegistry) -> PlResult<()> {
	registry.register(
		ConfigVariable::builder("general_event_name")
			.label("Event name")
			.default(ConfigValue::String("Plenum".into()))
			.weight(100)
			.group("General")
			.subgroup("Event")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("general_event_description")
			.label("Short description of event")
			.default(ConfigValue::String("Presentation and assembly system".into()))
			.weight(105)
			.group("General")
			.subgroup("Event")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("general_system_enable_anonymous")
			.label("Allow access for anonymous guest users")
			.default(ConfigValue::Bool(false))
			.input_type(crate::config::InputType::Boolean)
			.weight(110)
			.group("General")
			.subgroup("System")
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
