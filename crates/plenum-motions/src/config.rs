//! Motions config variable catalog
//!
//! Declares every admin-configurable variable owned by the motions module,
//! grouped into General, Amendments, Supporters, Comments, Voting and ballot
//! papers, and Export. Registered once during app assembly; see the app
//! builder in the plenum crate.

use std::collections::HashMap;
use std::sync::Arc;

use plenum_core::config::{
	ConfigChoice, ConfigRegistry, ConfigValue, ConfigVariable, InputType, validators,
};
use plenum_types::prelude::*;
use plenum_types::store_adapter::StoreAdapter;

/// Majority methods accepted for `motions_poll_default_majority_method`
pub const MAJORITY_METHODS: &[&str] =
	&["simple_majority", "two_thirds", "three_quarters", "disabled"];

/// Choice list for `motions_workflow`: one (persisted id, display name) pair
/// per workflow record. Evaluated at render time because workflows may not
/// exist yet when the catalog is registered.
pub async fn workflow_choices(store: Arc<dyn StoreAdapter>) -> PlResult<Vec<ConfigChoice>> {
	Ok(store
		.list_workflows()
		.await?
		.into_iter()
		.map(|wf| ConfigChoice { value: wf.id.to_string(), display_name: wf.name })
		.collect())
}

/// Register all config variables of the motions module
pub fn register_config(registry: &mut ConfigRegistry) -> PlResult<()> {
	// General
	registry.register(
		ConfigVariable::builder("motions_workflow")
			.label("Workflow of new motions")
			.default(ConfigValue::String("1".into()))
			.input_type(InputType::Choice)
			.choices_deferred(|store| Box::pin(workflow_choices(store)))
			.weight(310)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_identifier")
			.label("Identifier")
			.default(ConfigValue::String("per_category".into()))
			.input_type(InputType::Choice)
			.choices([
				("per_category", "Numbered per category"),
				("serially_numbered", "Serially numbered"),
				("manually", "Set it manually"),
			])
			.weight(315)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_preamble")
			.label("Motion preamble")
			.default(ConfigValue::String("The assembly may decide:".into()))
			.weight(320)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_default_line_numbering")
			.label("Default line numbering")
			.default(ConfigValue::String("outside".into()))
			.input_type(InputType::Choice)
			.choices([("outside", "Outside"), ("inline", "Inline"), ("none", "Disabled")])
			.weight(322)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_line_length")
			.label("Line length")
			.default(ConfigValue::Int(90))
			.input_type(InputType::Integer)
			.help_text(
				"The maximum number of characters per line. Relevant when line numbering is enabled. Min: 40",
			)
			.validator(validators::min_value(40))
			.weight(323)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_disable_reason_on_projector")
			.label("Hide reason on projector")
			.default(ConfigValue::Bool(true))
			.input_type(InputType::Boolean)
			.weight(325)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_disable_sidebox_on_projector")
			.label("Hide meta information box on projector")
			.default(ConfigValue::Bool(false))
			.input_type(InputType::Boolean)
			.weight(326)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_disable_recommendation_on_projector")
			.label("Hide recommendation on projector")
			.default(ConfigValue::Bool(false))
			.input_type(InputType::Boolean)
			.weight(327)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_allow_disable_versioning")
			.label("Allow to disable versioning")
			.default(ConfigValue::Bool(false))
			.input_type(InputType::Boolean)
			.weight(329)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_stop_submitting")
			.label("Stop submitting new motions by non-staff users")
			.default(ConfigValue::Bool(false))
			.input_type(InputType::Boolean)
			.weight(331)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_recommendations_by")
			.label("Name of recommender")
			.default(ConfigValue::String("Empfehlung der Antragskommission".into()))
			.help_text(
				"Will be displayed as label before selected recommendation. Use an empty value to disable the recommendation system.",
			)
			.weight(332)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_recommendation_text_mode")
			.label("Default text version for change recommendations")
			.default(ConfigValue::String("diff".into()))
			.input_type(InputType::Choice)
			.choices([
				("original", "Original version"),
				("changed", "Changed version"),
				("diff", "Diff version"),
				("agreed", "Final version"),
			])
			.weight(333)
			.group("Motions")
			.subgroup("General")
			.build()?,
	)?;

	// Amendments
	registry.register(
		ConfigVariable::builder("motions_amendments_enabled")
			.label("Activate amendments")
			.default(ConfigValue::Bool(true))
			.input_type(InputType::Boolean)
			.weight(335)
			.group("Motions")
			.subgroup("Amendments")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_amendments_prefix")
			.label("Prefix for the identifier for amendments")
			.default(ConfigValue::String("-ÄA".into()))
			.weight(340)
			.group("Motions")
			.subgroup("Amendments")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_amendments_text_mode")
			.label("How to create new amendments")
			.default(ConfigValue::String("paragraph".into()))
			.input_type(InputType::Choice)
			.choices([
				("freestyle", "Empty text field"),
				("fulltext", "Edit the whole motion text"),
				("paragraph", "Paragraph-based, Diff-enabled"),
			])
			.weight(342)
			.group("Motions")
			.subgroup("Amendments")
			.build()?,
	)?;

	// Supporters
	registry.register(
		ConfigVariable::builder("motions_min_supporters")
			.label("Number of (minimum) required supporters for a motion")
			.default(ConfigValue::Int(5))
			.input_type(InputType::Integer)
			.help_text("Choose 0 to disable the supporting system.")
			.validator(validators::min_value(0))
			.weight(345)
			.group("Motions")
			.subgroup("Supporters")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_remove_supporters")
			.label("Remove all supporters of a motion if a submitter edits his motion in early state")
			.default(ConfigValue::Bool(false))
			.input_type(InputType::Boolean)
			.weight(350)
			.group("Motions")
			.subgroup("Supporters")
			.build()?,
	)?;

	// Comments
	registry.register(
		ConfigVariable::builder("motions_comments")
			.label("Comment fields for motions")
			.default(ConfigValue::Map(HashMap::new()))
			.input_type(InputType::Comments)
			.weight(353)
			.group("Motions")
			.subgroup("Comments")
			.build()?,
	)?;

	// Voting and ballot papers
	registry.register(
		ConfigVariable::builder("motions_poll_100_percent_base")
			.label("The 100 % base of a voting result consists of")
			.default(ConfigValue::String("YES_NO_ABSTAIN".into()))
			.input_type(InputType::Choice)
			.choices([
				("YES_NO_ABSTAIN", "Yes/No/Abstain"),
				("YES_NO", "Yes/No"),
				("VALID", "All valid ballots"),
				("CAST", "All casted ballots"),
				("DISABLED", "Disabled (no percents)"),
			])
			.weight(355)
			.group("Motions")
			.subgroup("Voting and ballot papers")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_poll_default_majority_method")
			.label("Required majority")
			.default(ConfigValue::String("simple_majority".into()))
			.input_type(InputType::MajorityMethod)
			.help_text(
				"Default method to check whether a motion has reached the required majority.",
			)
			.validator(validators::one_of(MAJORITY_METHODS))
			.weight(357)
			.group("Motions")
			.subgroup("Voting and ballot papers")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_pdf_ballot_papers_selection")
			.label("Number of ballot papers (selection)")
			.default(ConfigValue::String("CUSTOM_NUMBER".into()))
			.input_type(InputType::Choice)
			.choices([
				("NUMBER_OF_DELEGATES", "Number of all delegates"),
				("NUMBER_OF_ALL_PARTICIPANTS", "Number of all participants"),
				("CUSTOM_NUMBER", "Use the following custom number"),
			])
			.weight(360)
			.group("Motions")
			.subgroup("Voting and ballot papers")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_pdf_ballot_papers_number")
			.label("Custom number of ballot papers")
			.default(ConfigValue::Int(8))
			.input_type(InputType::Integer)
			.validator(validators::min_value(1))
			.weight(365)
			.group("Motions")
			.subgroup("Voting and ballot papers")
			.build()?,
	)?;

	// PDF and DOCX export
	registry.register(
		ConfigVariable::builder("motions_export_title")
			.label("Title for PDF and DOCX documents (all motions)")
			.default(ConfigValue::String("Motions".into()))
			.weight(370)
			.group("Motions")
			.subgroup("Export")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_export_preamble")
			.label("Preamble text for PDF and DOCX documents (all motions)")
			.default(ConfigValue::String("".into()))
			.weight(375)
			.group("Motions")
			.subgroup("Export")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_export_category_sorting")
			.label("Sort categories by")
			.default(ConfigValue::String("prefix".into()))
			.input_type(InputType::Choice)
			.choices([("prefix", "Prefix"), ("name", "Name")])
			.weight(380)
			.group("Motions")
			.subgroup("Export")
			.build()?,
	)?;

	registry.register(
		ConfigVariable::builder("motions_export_sequential_number")
			.label("Include the sequential number in PDF and DOCX")
			.default(ConfigValue::Bool(true))
			.input_type(InputType::Boolean)
			.weight(385)
			.group("Motions")
			.subgroup("Export")
			.build()?,
	)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_registers_cleanly() {
		let mut registry = ConfigRegistry::new();
		register_config(&mut registry).expect("catalog registers");
		assert_eq!(registry.len(), 26);
	}

	#[test]
	fn catalog_names_are_unique() {
		// A second registration collides on every name; the first collision
		// is reported as a fatal config error.
		let mut registry = ConfigRegistry::new();
		register_config(&mut registry).expect("catalog registers");
		let res = register_config(&mut registry);
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn catalog_is_ordered_by_weight() {
		let mut registry = ConfigRegistry::new();
		register_config(&mut registry).expect("catalog registers");
		let frozen = registry.freeze();

		let weights: Vec<i32> = frozen.list().map(|v| v.weight).collect();
		let mut sorted = weights.clone();
		sorted.sort_unstable();
		assert_eq!(weights, sorted);

		let names: Vec<&str> = frozen.list().map(|v| v.name.as_str()).collect();
		assert_eq!(names.first(), Some(&"motions_workflow"));
		assert_eq!(names.last(), Some(&"motions_export_sequential_number"));
	}

	#[test]
	fn catalog_variables_belong_to_the_motions_group() {
		let mut registry = ConfigRegistry::new();
		register_config(&mut registry).expect("catalog registers");
		let frozen = registry.freeze();

		assert!(frozen.list().all(|v| v.group == "Motions"));
		assert!(frozen.list().all(|v| v.name.starts_with("motions_")));
		assert!(frozen.list().all(|v| v.subgroup.is_some()));
	}
}

// vim: ts=4
