//! Inspect Event - Dumps every field of one event, looked up by exact name.
//!
//! Usage: `inspect_event [event name]` (defaults to the photography event).

use std::process::ExitCode;

use shared::report::render_event_detail;
use shared::{Config, Connection, Error, EventRepository, MongoEventRepository, Result, PHOTOGRAPHY_EVENT};
use tracing::info;

async fn inspect(conn: &Connection, name: &str) -> Result<()> {
    let repo = MongoEventRepository::new(conn);
    let event = repo
        .find_by_name(name)
        .await?
        .ok_or_else(|| Error::NotFound(format!("event '{}'", name)))?;
    info!(event = %event.name, categories = event.registration_categories.len(), "Fetched event");

    print!("{}", render_event_detail(&event));
    Ok(())
}

async fn run(name: &str) -> Result<()> {
    let config = Config::from_env()?;
    let conn = Connection::open(&config).await?;
    let result = inspect(&conn, name).await;
    conn.close().await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    shared::cli::init();
    let name = shared::cli::first_arg_or(PHOTOGRAPHY_EVENT);
    shared::cli::exit_code(run(&name).await)
}
