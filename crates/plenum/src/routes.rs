//! API route definitions

use axum::{
	Router,
	routing::{get, put},
};

use crate::prelude::*;
use plenum_core::config::handler;

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/config", get(handler::list_config))
		.route("/api/config/{name}", get(handler::get_config))
		.route("/api/config/{name}", put(handler::update_config))
		.with_state(app)
}

// vim: ts=4
