//! Config management handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

use super::types::{ConfigChoice, ConfigValue, ConfigVariable, InputType};

/// One config variable with its resolved value and rendered choices
#[derive(Serialize)]
pub struct ConfigResponse {
	pub name: String,
	pub value: ConfigValue,
	pub input_type: InputType,
	pub label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub help_text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub choices: Option<Vec<ConfigChoice>>,
	pub weight: i32,
	pub group: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subgroup: Option<String>,
}

async fn render_variable(app: &App, variable: &ConfigVariable) -> PlResult<ConfigResponse> {
	let value = app.config.get(&variable.name).await?;
	let choices = app.config.resolve_choices(variable).await?;

	Ok(ConfigResponse {
		name: variable.name.clone(),
		value,
		input_type: variable.input_type,
		label: variable.label.clone(),
		help_text: variable.help_text.clone(),
		choices,
		weight: variable.weight,
		group: variable.group.clone(),
		subgroup: variable.subgroup.clone(),
	})
}

/// GET /api/config - List all config variables in display order, with
/// resolved values and choices, for the settings UI
pub async fn list_config(
	State(app): State<App>,
) -> PlResult<(StatusCode, Json<Vec<ConfigResponse>>)> {
	let mut response = Vec::with_capacity(app.config_registry.len());

	for variable in app.config_registry.list() {
		response.push(render_variable(&app, variable).await?);
	}

	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/config/{name} - Get a single config variable
pub async fn get_config(
	State(app): State<App>,
	Path(name): Path<String>,
) -> PlResult<(StatusCode, Json<ConfigResponse>)> {
	let variable = app.config_registry.get(&name).ok_or(Error::NotFound)?;
	let response = render_variable(&app, variable).await?;

	Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/config/{name} - Update a config variable's value
#[derive(Deserialize)]
pub struct UpdateConfigRequest {
	pub value: ConfigValue,
}

pub async fn update_config(
	State(app): State<App>,
	Path(name): Path<String>,
	Json(req): Json<UpdateConfigRequest>,
) -> PlResult<(StatusCode, Json<ConfigResponse>)> {
	let variable = app.config_registry.get(&name).ok_or(Error::NotFound)?;

	// Validation failures leave the previously persisted value in place
	app.config.set(&name, req.value).await?;

	let response = render_variable(&app, variable).await?;

	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
