//! Check Images - Classifies the image reference of every active event.

use std::process::ExitCode;

use shared::report::render_image_report;
use shared::{Config, Connection, EventFilter, EventRepository, MongoEventRepository, Result};
use tracing::info;

async fn check_images(conn: &Connection) -> Result<()> {
    let repo = MongoEventRepository::new(conn);
    let events = repo.list_summaries(EventFilter::ActiveOnly).await?;
    info!(count = events.len(), "Fetched active events");

    print!("{}", render_image_report(&events));
    Ok(())
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let conn = Connection::open(&config).await?;
    let result = check_images(&conn).await;
    conn.close().await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    shared::cli::init();
    shared::cli::exit_code(run().await)
}
