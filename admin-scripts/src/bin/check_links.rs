//! Check Links - Verifies the local image folder and samples event image links.
//!
//! Used while moving event images from local storage to the media host. The
//! database query is deliberately untyped so it works regardless of the
//! current Event schema.

use std::path::Path;
use std::process::ExitCode;

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use shared::media::{image_folder, render_folder_report, scan_images};
use shared::models::EVENTS_COLLECTION;
use shared::{Config, Connection, ImageSource, Result, LEGACY_URI_VAR};
use tracing::{info, warn};

const DEFAULT_IMAGE_FOLDER: &str = "/var/www/event-portal/public/uploads/events";

const SAMPLE_SIZE: i64 = 5;

fn check_folder(folder: &Path) {
    let scan = scan_images(folder);
    match &scan {
        Ok(Some(inventory)) => info!(folder = %folder.display(), images = inventory.total(), "Scanned image folder"),
        Ok(None) => warn!(folder = %folder.display(), "Image folder does not exist"),
        Err(e) => warn!(folder = %folder.display(), error = %e, "Image folder scan failed"),
    }
    print!("{}", render_folder_report(folder, &scan));
}

async fn sample_events(conn: &Connection) -> Result<()> {
    let events = conn.database().collection::<Document>(EVENTS_COLLECTION);
    let docs: Vec<Document> = events
        .find(doc! {})
        .projection(doc! { "name": 1, "image": 1 })
        .limit(SAMPLE_SIZE)
        .await?
        .try_collect()
        .await?;
    info!(count = docs.len(), "Sampled events");

    println!("\n🔗 Sample of {} events:", docs.len());
    for event in &docs {
        let name = event.get_str("name").unwrap_or("(unnamed)");
        let image = event.get_str("image").ok();
        let source = ImageSource::classify(image);
        println!("   {} {} -> {}", source.marker(), name, image.unwrap_or("-"));
    }
    Ok(())
}

async fn run() -> Result<()> {
    let folder = image_folder(std::env::var("IMAGE_FOLDER").ok(), DEFAULT_IMAGE_FOLDER);
    check_folder(&folder);

    let config = Config::from_env_var(LEGACY_URI_VAR)?;
    let conn = Connection::open(&config).await?;
    let result = sample_events(&conn).await;
    conn.close().await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    shared::cli::init();
    shared::cli::exit_code(run().await)
}
