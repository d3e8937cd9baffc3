//! Config key-value store management
//!
//! Handles persistent storage of config values as JSON text.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use plenum::prelude::*;

use crate::inspect;

/// List all persisted config values
pub(crate) async fn list(db: &SqlitePool) -> PlResult<HashMap<String, serde_json::Value>> {
	let rows = sqlx::query("SELECT name, value FROM config")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut values = HashMap::new();
	for row in rows {
		let name: String = row.get("name");
		let value: Option<String> = row.get("value");
		values.insert(
			name,
			value.and_then(|v| serde_json::from_str(&v).ok()).unwrap_or(serde_json::Value::Null),
		);
	}

	Ok(values)
}

/// Read a single config value by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> PlResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM config WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| serde_json::from_str(&v).ok())
	}))
}

/// Update or create a config value
pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	value: Option<serde_json::Value>,
) -> PlResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query("INSERT OR REPLACE INTO config (name, value) VALUES (?, ?)")
			.bind(name)
			.bind(value_str)
			.execute(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	} else {
		// Delete the row if value is None, falling back to the declared default
		sqlx::query("DELETE FROM config WHERE name = ?")
			.bind(name)
			.execute(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
