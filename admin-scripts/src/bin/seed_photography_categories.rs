//! Seed Photography Categories - Writes the initial DSLR and Mobile categories.
//!
//! Usage: `seed_photography_categories [event name]`. Overwrites the event's category list and
//! zeroes its base fee. Safe to re-run.

use std::process::ExitCode;

use shared::catalog::SEED_PRICING;
use shared::report::render_category_update;
use shared::{apply_categories, Config, Connection, MongoEventRepository, Result, PHOTOGRAPHY_EVENT};

async fn run(event_name: &str) -> Result<()> {
    let config = Config::from_env()?;
    let conn = Connection::open(&config).await?;
    let repo = MongoEventRepository::new(&conn);
    let result = apply_categories(&repo, event_name, SEED_PRICING.categories()).await;
    conn.close().await;

    print!("{}", render_category_update(&result?));
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    shared::cli::init();
    let event_name = shared::cli::first_arg_or(PHOTOGRAPHY_EVENT);
    shared::cli::exit_code(run(&event_name).await)
}
