//! Legislative motions module. Motions are formal proposals submitted for
//! assembly decision; this crate declares the module's admin-configurable
//! variables (workflow selection, identifier numbering, line numbering,
//! supporters, voting and export knobs) and a few typed accessors over the
//! config service.

pub mod config;

pub use config::workflow_choices;

use plenum_core::config::service::ConfigService;
use plenum_types::prelude::*;

/// Register the motions module's config variables
pub fn register_config(registry: &mut plenum_core::config::ConfigRegistry) -> PlResult<()> {
	config::register_config(registry)
}

// Typed accessors for the variables other parts of the module read often
//*************************************************************************

/// Identifier of the workflow assigned to newly created motions
pub async fn default_workflow_id(config: &ConfigService) -> PlResult<i64> {
	let raw = config.get_string("motions_workflow").await?;
	raw.parse()
		.map_err(|_| Error::ValidationError(format!("Invalid workflow identifier: {}", raw)))
}

/// Maximum number of characters per line when line numbering is enabled
pub async fn line_length(config: &ConfigService) -> PlResult<i64> {
	config.get_int("motions_line_length").await
}

/// Minimum number of supporters a motion needs; 0 disables the supporting
/// system
pub async fn min_supporters(config: &ConfigService) -> PlResult<i64> {
	config.get_int("motions_min_supporters").await
}

/// Whether amendments are activated for this assembly
pub async fn amendments_enabled(config: &ConfigService) -> PlResult<bool> {
	config.get_bool("motions_amendments_enabled").await
}

// vim: ts=4
