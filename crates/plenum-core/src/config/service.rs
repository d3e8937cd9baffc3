//! Config service with caching and validation

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

use plenum_types::store_adapter::StoreAdapter;

use crate::prelude::*;

use super::types::{Choices, ConfigChoice, ConfigValue, ConfigVariable, FrozenConfigRegistry};

/// LRU cache for resolved config values
pub struct ConfigCache {
	cache: parking_lot::RwLock<LruCache<String, ConfigValue>>,
}

impl ConfigCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
		Self { cache: parking_lot::RwLock::new(LruCache::new(capacity)) }
	}

	pub fn get(&self, name: &str) -> Option<ConfigValue> {
		let mut cache = self.cache.write();
		cache.get(name).cloned()
	}

	pub fn put(&self, name: String, value: ConfigValue) {
		let mut cache = self.cache.write();
		cache.put(name, value);
	}

	pub fn remove(&self, name: &str) {
		let mut cache = self.cache.write();
		cache.pop(name);
	}
}

/// Config service - main interface for reading and updating config values.
/// Descriptors come from the frozen registry, values from the store adapter;
/// a variable without a persisted value resolves to its declared default.
pub struct ConfigService {
	registry: Arc<FrozenConfigRegistry>,
	cache: ConfigCache,
	store: Arc<dyn StoreAdapter>,
}

impl ConfigService {
	pub fn new(
		registry: Arc<FrozenConfigRegistry>,
		store: Arc<dyn StoreAdapter>,
		cache_size: usize,
	) -> Self {
		Self { registry, cache: ConfigCache::new(cache_size), store }
	}

	/// Get a config value: persisted value if one exists, declared default
	/// otherwise
	pub async fn get(&self, name: &str) -> PlResult<ConfigValue> {
		if let Some(value) = self.cache.get(name) {
			debug!("Config cache hit: {}", name);
			return Ok(value);
		}

		let variable = self
			.registry
			.get(name)
			.ok_or_else(|| Error::ValidationError(format!("Unknown config variable: {}", name)))?;

		if let Some(json_value) = self.store.read_config_value(name).await? {
			let value = serde_json::from_value::<ConfigValue>(json_value).map_err(|e| {
				Error::ValidationError(format!("Invalid stored value for '{}': {}", name, e))
			})?;
			self.cache.put(name.to_string(), value.clone());
			return Ok(value);
		}

		let value = variable.default.clone();
		self.cache.put(name.to_string(), value.clone());
		Ok(value)
	}

	/// Set a config value. The value is type checked against the variable's
	/// input type and run through its validators before being persisted; on
	/// rejection the previously persisted value is retained.
	pub async fn set(&self, name: &str, value: ConfigValue) -> PlResult<()> {
		let variable = self
			.registry
			.get(name)
			.ok_or_else(|| Error::ValidationError(format!("Unknown config variable: {}", name)))?;

		if !variable.input_type.accepts(&value) {
			return Err(Error::ValidationError(format!(
				"Type mismatch for config variable '{}': expected {}, got {}",
				name,
				variable.input_type.expected_type(),
				value.type_name()
			)));
		}

		// A fixed choice list doubles as the accepted value set. Deferred
		// lists stay unchecked here; their producer owns the source data.
		if let (Some(Choices::Fixed(choices)), ConfigValue::String(s)) = (&variable.choices, &value)
		{
			if !choices.iter().any(|c| c.value == *s) {
				return Err(Error::ValidationError(format!(
					"'{}' is not a valid choice for config variable '{}'",
					s, name
				)));
			}
		}

		for validator in &variable.validators {
			validator(&value)?;
		}

		let json_value = serde_json::to_value(&value).map_err(|e| {
			Error::ValidationError(format!("Failed to serialize config value: {}", e))
		})?;
		self.store.update_config_value(name, Some(json_value)).await?;
		self.cache.put(name.to_string(), value);

		info!("Config variable '{}' updated", name);
		Ok(())
	}

	/// Delete the persisted value; the variable falls back to its default
	pub async fn reset(&self, name: &str) -> PlResult<()> {
		let variable = self
			.registry
			.get(name)
			.ok_or_else(|| Error::ValidationError(format!("Unknown config variable: {}", name)))?;

		self.store.update_config_value(name, None).await?;
		self.cache.put(name.to_string(), variable.default.clone());

		info!("Config variable '{}' reset to default", name);
		Ok(())
	}

	/// Resolve a variable's choice list: fixed lists are returned as-is,
	/// deferred producers are evaluated against the store adapter
	pub async fn resolve_choices(
		&self,
		variable: &ConfigVariable,
	) -> PlResult<Option<Vec<ConfigChoice>>> {
		match &variable.choices {
			None => Ok(None),
			Some(Choices::Fixed(choices)) => Ok(Some(choices.clone())),
			Some(Choices::Deferred(producer)) => Ok(Some(producer(self.store.clone()).await?)),
		}
	}

	// Type-safe getters
	//*******************
	pub async fn get_string(&self, name: &str) -> PlResult<String> {
		match self.get(name).await? {
			ConfigValue::String(s) => Ok(s),
			v => Err(Error::ValidationError(format!(
				"Config variable '{}' is not a string, got {}",
				name,
				v.type_name()
			))),
		}
	}

	pub async fn get_int(&self, name: &str) -> PlResult<i64> {
		match self.get(name).await? {
			ConfigValue::Int(i) => Ok(i),
			v => Err(Error::ValidationError(format!(
				"Config variable '{}' is not an integer, got {}",
				name,
				v.type_name()
			))),
		}
	}

	pub async fn get_bool(&self, name: &str) -> PlResult<bool> {
		match self.get(name).await? {
			ConfigValue::Bool(b) => Ok(b),
			v => Err(Error::ValidationError(format!(
				"Config variable '{}' is not a boolean, got {}",
				name,
				v.type_name()
			))),
		}
	}

	pub async fn get_map(&self, name: &str) -> PlResult<std::collections::HashMap<String, String>> {
		match self.get(name).await? {
			ConfigValue::Map(m) => Ok(m),
			v => Err(Error::ValidationError(format!(
				"Config variable '{}' is not a map, got {}",
				name,
				v.type_name()
			))),
		}
	}

	/// Get reference to the frozen registry (for listing all variables)
	pub fn registry(&self) -> &Arc<FrozenConfigRegistry> {
		&self.registry
	}
}


// vim: ts=4
