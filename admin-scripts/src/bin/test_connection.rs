//! Test Connection - Connects and lists every collection in the database.
//!
//! Reads the connection string from `MONGO_URI`, not `MONGODB_URI`.

use std::process::ExitCode;

use shared::{Config, Connection, Result, LEGACY_URI_VAR};
use tracing::info;

async fn run() -> Result<()> {
    let config = Config::from_env_var(LEGACY_URI_VAR)?;
    println!("🔌 Connecting to {}", config.redacted_uri());

    let conn = Connection::open(&config).await?;
    let result = conn.collection_names().await;
    conn.close().await;
    let names = result?;

    info!(collections = names.len(), "Connection succeeded");
    println!("✅ Connected. {} collections:", names.len());
    for name in &names {
        println!("   - {}", name);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    shared::cli::init();
    shared::cli::exit_code(run().await)
}
