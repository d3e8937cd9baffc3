//! Core infrastructure for the Plenum platform: app state and the config
//! variable subsystem (registry, value service, HTTP handlers).

pub mod app;
pub mod config;
pub mod core_config;
pub mod prelude;

use crate::prelude::*;

/// Register the core module's config variables
pub fn register_config(registry: &mut config::ConfigRegistry) -> PlResult<()> {
	core_config::register_config(registry)
}

// vim: ts=4
