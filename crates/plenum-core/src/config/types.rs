//! Config variable types and definitions
//!
//! Core types for the config subsystem. Each module declares its
//! admin-configurable variables as `ConfigVariable` descriptors and hands
//! them to the process-wide `ConfigRegistry` during startup; the registry is
//! frozen before serving requests and descriptors are never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use plenum_types::store_adapter::StoreAdapter;

use crate::prelude::*;

/// Type alias for config variable validator functions
pub type ConfigValidator = Box<dyn Fn(&ConfigValue) -> PlResult<()> + Send + Sync>;

/// Future returned by a deferred choice producer
pub type ChoiceFuture = Pin<Box<dyn Future<Output = PlResult<Vec<ConfigChoice>>> + Send>>;

/// Type alias for deferred choice producers. The producer is handed the
/// store adapter and evaluated at render time, not at declaration time,
/// because the records it projects from may not exist yet when the catalog
/// is registered.
pub type ChoiceProducer = Box<dyn Fn(Arc<dyn StoreAdapter>) -> ChoiceFuture + Send + Sync>;

/// Config value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from the variable's input type
pub enum ConfigValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
	Map(HashMap<String, String>),
}

impl ConfigValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			ConfigValue::Bool(_) => "bool",
			ConfigValue::Int(_) => "int",
			ConfigValue::String(_) => "string",
			ConfigValue::Map(_) => "map",
		}
	}
}

/// UI input hint for a config variable. Also pins down the storage type
/// accepted for the variable's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
	/// Plain text field (the default)
	#[serde(rename = "string")]
	Text,
	#[serde(rename = "integer")]
	Integer,
	#[serde(rename = "boolean")]
	Boolean,
	/// Single choice from a fixed or deferred choice list
	#[serde(rename = "choice")]
	Choice,
	/// Structured comment field definitions (string -> string map)
	#[serde(rename = "comments")]
	Comments,
	/// Majority method selector rendered by the poll UI
	#[serde(rename = "majorityMethod")]
	MajorityMethod,
}

impl InputType {
	/// Check whether a value has the storage type this input expects
	pub fn accepts(self, value: &ConfigValue) -> bool {
		matches!(
			(self, value),
			(
				InputType::Text | InputType::Choice | InputType::MajorityMethod,
				ConfigValue::String(_)
			) | (InputType::Integer, ConfigValue::Int(_))
				| (InputType::Boolean, ConfigValue::Bool(_))
				| (InputType::Comments, ConfigValue::Map(_))
		)
	}

	/// Expected storage type name for error messages
	pub fn expected_type(self) -> &'static str {
		match self {
			InputType::Text | InputType::Choice | InputType::MajorityMethod => "string",
			InputType::Integer => "int",
			InputType::Boolean => "bool",
			InputType::Comments => "map",
		}
	}
}

/// One selectable option of a single-choice variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigChoice {
	pub value: String,
	pub display_name: String,
}

/// Choice list of a single-choice variable: either fixed at declaration
/// time, or produced from live data when the settings UI needs it
pub enum Choices {
	Fixed(Vec<ConfigChoice>),
	Deferred(ChoiceProducer),
}

impl Debug for Choices {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Choices::Fixed(choices) => f.debug_tuple("Fixed").field(choices).finish(),
			Choices::Deferred(_) => f.debug_tuple("Deferred").field(&"<producer>").finish(),
		}
	}
}

/// Config variable descriptor - declares metadata and the default value of
/// one admin-configurable setting
pub struct ConfigVariable {
	/// Unique name, namespaced by module (e.g. "motions_workflow")
	pub name: String,

	/// Default value, used until a value is persisted for this name
	pub default: ConfigValue,

	/// UI input hint; also determines the accepted storage type
	pub input_type: InputType,

	/// Human-readable display label
	pub label: String,

	/// Optional explanatory text shown next to the input
	pub help_text: Option<String>,

	/// Choice list for single-choice inputs
	pub choices: Option<Choices>,

	/// Sort key for display ordering; ties are broken by declaration order
	pub weight: i32,

	/// Group and subgroup used to cluster variables in the settings UI
	pub group: String,
	pub subgroup: Option<String>,

	/// Constraint predicates applied before a new value is persisted
	pub validators: Vec<ConfigValidator>,
}

impl Debug for ConfigVariable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConfigVariable")
			.field("name", &self.name)
			.field("default", &self.default)
			.field("input_type", &self.input_type)
			.field("label", &self.label)
			.field("help_text", &self.help_text)
			.field("choices", &self.choices)
			.field("weight", &self.weight)
			.field("group", &self.group)
			.field("subgroup", &self.subgroup)
			.field("validators", &self.validators.len())
			.finish()
	}
}

impl ConfigVariable {
	/// Create a builder for constructing a ConfigVariable
	pub fn builder(name: impl Into<String>) -> ConfigVariableBuilder {
		ConfigVariableBuilder::new(name)
	}
}

/// Builder for ConfigVariable with fluent API
pub struct ConfigVariableBuilder {
	name: String,
	default: Option<ConfigValue>,
	input_type: InputType,
	label: Option<String>,
	help_text: Option<String>,
	choices: Option<Choices>,
	weight: i32,
	group: String,
	subgroup: Option<String>,
	validators: Vec<ConfigValidator>,
}

impl ConfigVariableBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			default: None,
			input_type: InputType::Text, // Absent input type means plain text
			label: None,
			help_text: None,
			choices: None,
			weight: 0,
			group: "General".into(),
			subgroup: None,
			validators: Vec::new(),
		}
	}

	/// Set the default value (required)
	pub fn default(mut self, value: ConfigValue) -> Self {
		self.default = Some(value);
		self
	}

	/// Set the UI input hint (defaults to plain text)
	pub fn input_type(mut self, input_type: InputType) -> Self {
		self.input_type = input_type;
		self
	}

	/// Set the display label (required)
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the optional help text
	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set a fixed, ordered choice list from (value, display_name) pairs
	pub fn choices<I, V, D>(mut self, choices: I) -> Self
	where
		I: IntoIterator<Item = (V, D)>,
		V: Into<String>,
		D: Into<String>,
	{
		self.choices = Some(Choices::Fixed(
			choices
				.into_iter()
				.map(|(value, display_name)| ConfigChoice {
					value: value.into(),
					display_name: display_name.into(),
				})
				.collect(),
		));
		self
	}

	/// Set a deferred choice producer, evaluated against the store adapter
	/// when the choice list is actually rendered
	pub fn choices_deferred<F>(mut self, f: F) -> Self
	where
		F: Fn(Arc<dyn StoreAdapter>) -> ChoiceFuture + Send + Sync + 'static,
	{
		self.choices = Some(Choices::Deferred(Box::new(f)));
		self
	}

	/// Set the display sort weight
	pub fn weight(mut self, weight: i32) -> Self {
		self.weight = weight;
		self
	}

	/// Set the settings UI group (defaults to "General")
	pub fn group(mut self, group: impl Into<String>) -> Self {
		self.group = group.into();
		self
	}

	/// Set the settings UI subgroup
	pub fn subgroup(mut self, subgroup: impl Into<String>) -> Self {
		self.subgroup = Some(subgroup.into());
		self
	}

	/// Add a validation function, run before a new value is persisted
	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&ConfigValue) -> PlResult<()> + Send + Sync + 'static,
	{
		self.validators.push(Box::new(f));
		self
	}

	/// Build the ConfigVariable
	pub fn build(self) -> PlResult<ConfigVariable> {
		let label = self.label.ok_or_else(|| {
			Error::ConfigError(format!("Config variable '{}' has no label", self.name))
		})?;
		let default = self.default.ok_or_else(|| {
			Error::ConfigError(format!("Config variable '{}' has no default value", self.name))
		})?;

		// The default must be consistent with the input type's storage type
		if !self.input_type.accepts(&default) {
			return Err(Error::ConfigError(format!(
				"Config variable '{}' declares a {} default but its input type expects {}",
				self.name,
				default.type_name(),
				self.input_type.expected_type()
			)));
		}

		// Choice lists belong to single-choice inputs only
		match (self.input_type, &self.choices) {
			(InputType::Choice, None) => {
				return Err(Error::ConfigError(format!(
					"Config variable '{}' is a choice input but declares no choices",
					self.name
				)));
			}
			(InputType::Choice, Some(_)) => {}
			(_, Some(_)) => {
				return Err(Error::ConfigError(format!(
					"Config variable '{}' declares choices but is not a choice input",
					self.name
				)));
			}
			(_, None) => {}
		}

		// A default that fails its own validators is a catalog bug
		for validator in &self.validators {
			if let Err(err) = validator(&default) {
				return Err(Error::ConfigError(format!(
					"Default value of config variable '{}' fails validation: {}",
					self.name, err
				)));
			}
		}

		Ok(ConfigVariable {
			name: self.name,
			default,
			input_type: self.input_type,
			label,
			help_text: self.help_text,
			choices: self.choices,
			weight: self.weight,
			group: self.group,
			subgroup: self.subgroup,
			validators: self.validators,
		})
	}
}

/// Mutable registry used during app initialization. Each module registers
/// its catalog exactly once; duplicate names are rejected here, at assembly
/// time, so collisions between modules fail the startup instead of a later
/// request.
pub struct ConfigRegistry {
	variables: Vec<ConfigVariable>,
	index: HashMap<String, usize>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self { variables: Vec::new(), index: HashMap::new() }
	}

	/// Register a new config variable, preserving declaration order
	pub fn register(&mut self, variable: ConfigVariable) -> PlResult<()> {
		if self.index.contains_key(&variable.name) {
			return Err(Error::ConfigError(format!(
				"Config variable '{}' is already registered",
				variable.name
			)));
		}

		debug!("Registering config variable: {}", variable.name);
		self.index.insert(variable.name.clone(), self.variables.len());
		self.variables.push(variable);
		Ok(())
	}

	/// Freeze the registry (make it immutable). Variables are ordered by
	/// weight; the sort is stable, so equal weights keep declaration order.
	pub fn freeze(self) -> FrozenConfigRegistry {
		info!("Freezing config registry with {} variables", self.variables.len());
		let mut variables = self.variables;
		variables.sort_by_key(|v| v.weight);
		let index =
			variables.iter().enumerate().map(|(i, v)| (v.name.clone(), i)).collect();
		FrozenConfigRegistry { variables, index }
	}

	/// Get number of registered variables
	pub fn len(&self) -> usize {
		self.variables.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry stored in AppState
pub struct FrozenConfigRegistry {
	variables: Vec<ConfigVariable>,
	index: HashMap<String, usize>,
}

impl FrozenConfigRegistry {
	/// Get a config variable descriptor by name
	pub fn get(&self, name: &str) -> Option<&ConfigVariable> {
		self.index.get(name).map(|&i| &self.variables[i])
	}

	/// List all variables in display order (weight, then declaration order)
	pub fn list(&self) -> impl Iterator<Item = &ConfigVariable> {
		self.variables.iter()
	}

	/// List variables of a specific group, in display order
	pub fn list_by_group<'a>(
		&'a self,
		group: &'a str,
	) -> impl Iterator<Item = &'a ConfigVariable> {
		self.variables.iter().filter(move |v| v.group == group)
	}

	/// Get number of registered variables
	pub fn len(&self) -> usize {
		self.variables.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}
}


// vim: ts=4
