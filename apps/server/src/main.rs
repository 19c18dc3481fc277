use std::{env, net::SocketAddr, path::Path, sync::Arc};

use cm_core::{auth, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod gate;
mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
	pub(crate) db: DatabaseConnection,
	pub(crate) session_secret: Arc<Vec<u8>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
		.init();

	let data_dir = match env::var("DATA_DIR") {
		Ok(path) => Path::new(&path).to_path_buf(),
		Err(_) => env::current_dir()?.join("cmserver_data"),
	};

	let port = env::var("PORT")
		.ok()
		.and_then(|port| port.parse::<u16>().ok())
		.unwrap_or(8080);

	let session_secret = env::var("SESSION_SECRET")
		.map_err(|_| anyhow::anyhow!("'$SESSION_SECRET' is not set"))?;

	let db_path = data_dir.join("costmap.db");
	let database = if db_path.exists() {
		Database::open(&db_path).await?
	} else {
		Database::create(&db_path).await?
	};
	database.migrate().await?;

	// Bootstrap credential, replacing a separate seed step
	if let Ok(code) = env::var("ACCESS_CODE") {
		auth::ensure_access_code(database.conn(), &code).await?;
		info!("Seeded access code from environment");
	}

	let state = AppState {
		db: database.conn().clone(),
		session_secret: Arc::new(session_secret.into_bytes()),
	};

	let app = routes::router(state);

	let mut addr = "[::]:8080".parse::<SocketAddr>()?; // This listens on IPv6 and IPv4
	addr.set_port(port);
	info!("Listening on http://localhost:{}", port);

	let listener = tokio::net::TcpListener::bind(addr).await?;
	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

async fn shutdown_signal() {
	tokio::signal::ctrl_c()
		.await
		.expect("Failed to listen for shutdown signal");
	info!("Shutting down");
}
