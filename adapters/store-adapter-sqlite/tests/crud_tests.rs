//! Store adapter CRUD operation tests
//!
//! Tests persistence of config values and workflow records against a
//! temporary SQLite database.

use plenum::store_adapter::StoreAdapter;
use plenum_store_adapter_sqlite::StoreAdapterSqlite;
use tempfile::TempDir;

async fn create_test_adapter() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = StoreAdapterSqlite::new(temp_dir.path().join("store.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_read_missing_config_value() {
	let (adapter, _temp) = create_test_adapter().await;

	let value = adapter.read_config_value("motions_line_length").await.expect("read");
	assert!(value.is_none(), "Fresh database should hold no values");
}

#[tokio::test]
async fn test_update_and_read_config_value() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter
		.update_config_value("motions_line_length", Some(serde_json::json!(120)))
		.await
		.expect("update");

	let value = adapter.read_config_value("motions_line_length").await.expect("read");
	assert_eq!(value, Some(serde_json::json!(120)));

	// Replacing an existing value keeps a single row
	adapter
		.update_config_value("motions_line_length", Some(serde_json::json!(80)))
		.await
		.expect("update");

	let value = adapter.read_config_value("motions_line_length").await.expect("read");
	assert_eq!(value, Some(serde_json::json!(80)));
}

#[tokio::test]
async fn test_update_with_none_deletes_the_value() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter
		.update_config_value("motions_preamble", Some(serde_json::json!("Proposed:")))
		.await
		.expect("update");
	adapter.update_config_value("motions_preamble", None).await.expect("delete");

	let value = adapter.read_config_value("motions_preamble").await.expect("read");
	assert!(value.is_none());
}

#[tokio::test]
async fn test_list_config_values() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter
		.update_config_value("motions_identifier", Some(serde_json::json!("serially_numbered")))
		.await
		.expect("update");
	adapter
		.update_config_value("motions_min_supporters", Some(serde_json::json!(3)))
		.await
		.expect("update");

	let values = adapter.list_config_values().await.expect("list");
	assert_eq!(values.len(), 2);
	assert_eq!(values["motions_identifier"], serde_json::json!("serially_numbered"));
	assert_eq!(values["motions_min_supporters"], serde_json::json!(3));
}

#[tokio::test]
async fn test_stock_workflows_are_seeded() {
	let (adapter, _temp) = create_test_adapter().await;

	let workflows = adapter.list_workflows().await.expect("list");
	assert_eq!(workflows.len(), 2);
	assert_eq!(workflows[0].name, "Simple Workflow");
	assert_eq!(workflows[1].name, "Complex Workflow");
}

#[tokio::test]
async fn test_seeding_happens_only_once() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let path = temp_dir.path().join("store.db");

	let adapter = StoreAdapterSqlite::new(&path).await.expect("create");
	drop(adapter);

	// Reopening the same database must not re-seed
	let adapter = StoreAdapterSqlite::new(&path).await.expect("reopen");
	let workflows = adapter.list_workflows().await.expect("list");
	assert_eq!(workflows.len(), 2);
}

#[tokio::test]
async fn test_create_workflow_appends_in_order() {
	let (adapter, _temp) = create_test_adapter().await;

	let id = adapter.create_workflow("Urgent").await.expect("create");
	assert_eq!(id, 3, "New workflows continue after the stock ones");

	let workflows = adapter.list_workflows().await.expect("list");
	assert_eq!(workflows.len(), 3);
	assert_eq!(workflows[2].name, "Urgent");
	assert_eq!(workflows[2].id, 3);
}
