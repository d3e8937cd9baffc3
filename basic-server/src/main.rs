use std::{env, path};

use plenum::AppBuilder;
use plenum_store_adapter_sqlite::StoreAdapterSqlite;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
	};
	plenum::init_logging();

	tokio::fs::create_dir_all(&config.db_dir).await.unwrap();
	let store_adapter =
		StoreAdapterSqlite::new_shared(config.db_dir.join("store.db")).await.unwrap();

	let mut builder = AppBuilder::new();
	builder.store_adapter(store_adapter);
	let app = builder.build().await.unwrap();

	let router = plenum::routes::init(app);
	let listener = tokio::net::TcpListener::bind(&config.listen).await.unwrap();
	axum::serve(listener, router).await.unwrap();
}

// vim: ts=4
