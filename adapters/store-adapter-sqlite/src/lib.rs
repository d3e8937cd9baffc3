//! SQLite-backed store adapter
//!
//! Persists config values and workflow records in a single SQLite database.

use std::{collections::HashMap, path::Path, sync::Arc};

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use plenum::prelude::*;
use plenum::store_adapter::{StoreAdapter, WorkflowRecord};

mod config;
mod schema;
mod workflow;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> PlResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}

	pub async fn new_shared(path: impl AsRef<Path>) -> PlResult<Arc<dyn StoreAdapter>> {
		Ok(Arc::new(Self::new(path).await?))
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Config values
	//***************
	async fn read_config_value(&self, name: &str) -> PlResult<Option<serde_json::Value>> {
		config::read(&self.db, name).await
	}

	async fn update_config_value(
		&self,
		name: &str,
		value: Option<serde_json::Value>,
	) -> PlResult<()> {
		config::update(&self.db, name, value).await
	}

	async fn list_config_values(&self) -> PlResult<HashMap<String, serde_json::Value>> {
		config::list(&self.db).await
	}

	// Workflows
	//***********
	async fn list_workflows(&self) -> PlResult<Vec<WorkflowRecord>> {
		workflow::list(&self.db).await
	}

	async fn create_workflow(&self, name: &str) -> PlResult<i64> {
		workflow::create(&self.db, name).await
	}
}

// vim: ts=4
