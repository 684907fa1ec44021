//! List Events - Prints every event with its department, status and image type.

use std::process::ExitCode;

use shared::report::render_event_list;
use shared::{Config, Connection, EventFilter, EventRepository, MongoEventRepository, Result};
use tracing::info;

async fn list_events(conn: &Connection) -> Result<()> {
    let repo = MongoEventRepository::new(conn);
    let events = repo.list_summaries(EventFilter::All).await?;
    info!(count = events.len(), "Fetched events");

    print!("{}", render_event_list(&events));
    Ok(())
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let conn = Connection::open(&config).await?;
    let result = list_events(&conn).await;
    conn.close().await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    shared::cli::init();
    shared::cli::exit_code(run().await)
}
