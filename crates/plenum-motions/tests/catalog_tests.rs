//! Motions catalog behavior tests
//!
//! Exercises the catalog through the config service: value bounds, choice
//! rendering, and fallback behavior after rejected updates.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use plenum_core::config::service::ConfigService;
use plenum_core::config::{ConfigRegistry, ConfigValue};
use plenum_types::error::{Error, PlResult};
use plenum_types::store_adapter::{StoreAdapter, WorkflowRecord};

/// In-memory store adapter; each test file owns its own test fixtures
#[derive(Default)]
struct MemoryStore {
	values: parking_lot::Mutex<HashMap<String, serde_json::Value>>,
	workflows: parking_lot::Mutex<Vec<WorkflowRecord>>,
}

#[async_trait]
impl StoreAdapter for MemoryStore {
	async fn read_config_value(&self, name: &str) -> PlResult<Option<serde_json::Value>> {
		Ok(self.values.lock().get(name).cloned())
	}

	async fn update_config_value(
		&self,
		name: &str,
		value: Option<serde_json::Value>,
	) -> PlResult<()> {
		let mut values = self.values.lock();
		match value {
			Some(value) => {
				values.insert(name.to_string(), value);
			}
			None => {
				values.remove(name);
			}
		}
		Ok(())
	}

	async fn list_config_values(&self) -> PlResult<HashMap<String, serde_json::Value>> {
		Ok(self.values.lock().clone())
	}

	async fn list_workflows(&self) -> PlResult<Vec<WorkflowRecord>> {
		Ok(self.workflows.lock().clone())
	}

	async fn create_workflow(&self, name: &str) -> PlResult<i64> {
		let mut workflows = self.workflows.lock();
		let id = workflows.len() as i64 + 1;
		workflows.push(WorkflowRecord { id, name: name.to_string() });
		Ok(id)
	}
}

fn create_test_service() -> (ConfigService, Arc<MemoryStore>) {
	let mut registry = ConfigRegistry::new();
	plenum_motions::register_config(&mut registry).expect("catalog registers");

	let store = Arc::new(MemoryStore::default());
	let service = ConfigService::new(Arc::new(registry.freeze()), store.clone(), 100);
	(service, store)
}

#[tokio::test]
async fn workflow_choices_with_empty_store_yield_an_empty_sequence() {
	let (_, store) = create_test_service();
	let choices = plenum_motions::workflow_choices(store).await.expect("choices");
	assert!(choices.is_empty());
}

#[tokio::test]
async fn workflow_choices_preserve_store_order() {
	let (_, store) = create_test_service();
	store.create_workflow("Simple Workflow").await.expect("create");
	store.create_workflow("Complex Workflow").await.expect("create");
	store.create_workflow("Urgent").await.expect("create");

	let choices = plenum_motions::workflow_choices(store).await.expect("choices");
	assert_eq!(choices.len(), 3);
	assert_eq!(
		choices.iter().map(|c| c.value.as_str()).collect::<Vec<_>>(),
		["1", "2", "3"]
	);
	assert_eq!(
		choices.iter().map(|c| c.display_name.as_str()).collect::<Vec<_>>(),
		["Simple Workflow", "Complex Workflow", "Urgent"]
	);
}

#[tokio::test]
async fn workflow_choice_list_is_rendered_lazily() {
	let (service, store) = create_test_service();
	let registry = service.registry().clone();
	let variable = registry.get("motions_workflow").expect("variable");

	store.create_workflow("Simple Workflow").await.expect("create");
	let choices = service.resolve_choices(variable).await.expect("resolve").expect("choices");
	assert_eq!(choices.len(), 1);
	assert_eq!(choices[0].value, "1");
}

#[tokio::test]
async fn line_length_enforces_its_lower_bound() {
	let (service, _store) = create_test_service();

	let res = service.set("motions_line_length", ConfigValue::Int(39)).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	service.set("motions_line_length", ConfigValue::Int(40)).await.expect("40 is accepted");
	assert_eq!(service.get_int("motions_line_length").await.expect("get"), 40);
}

#[tokio::test]
async fn min_supporters_enforces_its_lower_bound() {
	let (service, _store) = create_test_service();

	let res = service.set("motions_min_supporters", ConfigValue::Int(-1)).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	service.set("motions_min_supporters", ConfigValue::Int(0)).await.expect("0 is accepted");
	assert_eq!(service.get_int("motions_min_supporters").await.expect("get"), 0);
}

#[tokio::test]
async fn ballot_papers_number_enforces_its_lower_bound() {
	let (service, _store) = create_test_service();

	let res = service.set("motions_pdf_ballot_papers_number", ConfigValue::Int(0)).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	service
		.set("motions_pdf_ballot_papers_number", ConfigValue::Int(1))
		.await
		.expect("1 is accepted");
	assert_eq!(service.get_int("motions_pdf_ballot_papers_number").await.expect("get"), 1);
}

#[tokio::test]
async fn majority_method_accepts_known_methods_only() {
	let (service, _store) = create_test_service();

	let res = service
		.set("motions_poll_default_majority_method", ConfigValue::String("plurality".into()))
		.await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	service
		.set("motions_poll_default_majority_method", ConfigValue::String("two_thirds".into()))
		.await
		.expect("two_thirds is accepted");
}

#[tokio::test]
async fn rejected_updates_retain_the_previous_value() {
	let (service, _store) = create_test_service();

	service.set("motions_line_length", ConfigValue::Int(120)).await.expect("set");
	let res = service.set("motions_line_length", ConfigValue::Int(10)).await;
	assert!(res.is_err());
	assert_eq!(service.get_int("motions_line_length").await.expect("get"), 120);
}

#[tokio::test]
async fn defaults_resolve_without_any_persisted_values() {
	let (service, _store) = create_test_service();

	assert_eq!(service.get_string("motions_identifier").await.expect("get"), "per_category");
	assert_eq!(service.get_int("motions_line_length").await.expect("get"), 90);
	assert!(service.get_bool("motions_amendments_enabled").await.expect("get"));
	assert!(service.get_map("motions_comments").await.expect("get").is_empty());
	assert_eq!(service.get_string("motions_amendments_prefix").await.expect("get"), "-ÄA");
}

#[tokio::test]
async fn typed_accessors_read_through_the_service() {
	let (service, _store) = create_test_service();

	assert_eq!(plenum_motions::default_workflow_id(&service).await.expect("workflow id"), 1);
	assert_eq!(plenum_motions::line_length(&service).await.expect("line length"), 90);
	assert_eq!(plenum_motions::min_supporters(&service).await.expect("supporters"), 5);
	assert!(plenum_motions::amendments_enabled(&service).await.expect("amendments"));
}

// vim: ts=4
