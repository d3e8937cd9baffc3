//! Database schema initialization

use sqlx::{Row, SqlitePool};

/// Stock workflows available on a fresh database
const STOCK_WORKFLOWS: &[&str] = &["Simple Workflow", "Complex Workflow"];

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS config (
			name text NOT NULL,
			value text,
			PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS workflows (
			id integer PRIMARY KEY AUTOINCREMENT,
			name text NOT NULL,
			created_at datetime DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Seed the stock workflows on first init only
	let count: i64 = sqlx::query("SELECT count(*) AS cnt FROM workflows")
		.fetch_one(&mut *tx)
		.await?
		.get("cnt");
	if count == 0 {
		for name in STOCK_WORKFLOWS {
			sqlx::query("INSERT INTO workflows (name) VALUES (?)")
				.bind(name)
				.execute(&mut *tx)
				.await?;
		}
	}

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
