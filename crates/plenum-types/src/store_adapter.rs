//! Store adapter trait: persisted config values and workflow records
//!
//! Config variable *descriptors* live in the in-process registry; this trait
//! covers the mutable part: the persisted value of each variable (keyed by
//! name, JSON encoded) and the workflow records some choice lists are
//! projected from.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::PlResult;

/// A motion workflow as persisted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
	pub id: i64,
	pub name: String,
}

#[async_trait]
pub trait StoreAdapter: Send + Sync {
	// Config values
	//***************
	/// Read a single persisted config value by name
	async fn read_config_value(&self, name: &str) -> PlResult<Option<serde_json::Value>>;

	/// Update a persisted config value, or delete it when `value` is `None`
	/// (the variable falls back to its declared default)
	async fn update_config_value(
		&self,
		name: &str,
		value: Option<serde_json::Value>,
	) -> PlResult<()>;

	/// List all persisted config values
	async fn list_config_values(&self) -> PlResult<HashMap<String, serde_json::Value>>;

	// Workflows
	//***********
	/// List all workflow records in store order
	async fn list_workflows(&self) -> PlResult<Vec<WorkflowRecord>>;

	/// Create a workflow record, returning its persisted identifier
	async fn create_workflow(&self, name: &str) -> PlResult<i64>;
}

// vim: ts=4
