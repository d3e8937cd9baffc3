//! App state type

use std::sync::Arc;

use plenum_types::store_adapter::StoreAdapter;

use crate::config::service::ConfigService;
use crate::config::types::FrozenConfigRegistry;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub store_adapter: Arc<dyn StoreAdapter>,

	// Config subsystem
	pub config: Arc<ConfigService>,
	pub config_registry: Arc<FrozenConfigRegistry>,
}

pub type App = Arc<AppState>;

// vim: ts=4
