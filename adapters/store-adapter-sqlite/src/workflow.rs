//! Workflow record management

use sqlx::{Row, SqlitePool};

use plenum::prelude::*;
use plenum::store_adapter::WorkflowRecord;

use crate::inspect;

/// List workflows in creation order
pub(crate) async fn list(db: &SqlitePool) -> PlResult<Vec<WorkflowRecord>> {
	let rows = sqlx::query("SELECT id, name FROM workflows ORDER BY id")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut workflows = Vec::with_capacity(rows.len());
	for row in rows {
		workflows.push(WorkflowRecord { id: row.get("id"), name: row.get("name") });
	}

	Ok(workflows)
}

/// Create a workflow and return its id
pub(crate) async fn create(db: &SqlitePool, name: &str) -> PlResult<i64> {
	let row = sqlx::query("INSERT INTO workflows (name) VALUES (?) RETURNING id")
		.bind(name)
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.get("id"))
}

// vim: ts=4
