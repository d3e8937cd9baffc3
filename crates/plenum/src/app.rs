//! App builder - assembles the config catalog and constructs the application

use std::sync::Arc;

use crate::prelude::*;
use crate::store_adapter::StoreAdapter;
use plenum_core::app::AppState;
use plenum_core::config::ConfigRegistry;
use plenum_core::config::service::ConfigService;

pub use plenum_core::app::{App, VERSION};

/// Install the global tracing subscriber. Call once, before building the app.
pub fn init_logging() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();
}

pub struct AppBuilder {
	store_adapter: Option<Arc<dyn StoreAdapter>>,
	config_cache_size: usize,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder { store_adapter: None, config_cache_size: 1000 }
	}

	pub fn store_adapter(&mut self, store_adapter: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store_adapter = Some(store_adapter);
		self
	}

	pub fn config_cache_size(&mut self, size: usize) -> &mut Self {
		self.config_cache_size = size;
		self
	}

	pub async fn build(self) -> PlResult<App> {
		let Some(store_adapter) = self.store_adapter else {
			error!("FATAL: No store adapter configured");
			return Err(Error::Internal("No store adapter configured".to_string()));
		};

		// Register config variables from all modules
		let mut config_registry = ConfigRegistry::new();
		plenum_core::register_config(&mut config_registry)?;
		plenum_motions::register_config(&mut config_registry)?;

		info!("Registered {} config variables", config_registry.len());

		// Freeze the registry
		let frozen_registry = Arc::new(config_registry.freeze());

		// Create the config service
		let config = Arc::new(ConfigService::new(
			frozen_registry.clone(),
			store_adapter.clone(),
			self.config_cache_size,
		));

		info!("Config subsystem initialized (V{})", VERSION);

		Ok(Arc::new(AppState { store_adapter, config, config_registry: frozen_registry }))
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
