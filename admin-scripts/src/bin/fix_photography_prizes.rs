//! Fix Photography Prizes - Applies the corrected DSLR and Mobile prize text.

use std::process::ExitCode;

use shared::catalog::CORRECTED_PRIZES;
use shared::report::render_category_update;
use shared::{apply_categories, Config, Connection, MongoEventRepository, Result, PHOTOGRAPHY_EVENT};

async fn run(event_name: &str) -> Result<()> {
    let config = Config::from_env()?;
    let conn = Connection::open(&config).await?;
    let repo = MongoEventRepository::new(&conn);
    let result = apply_categories(&repo, event_name, CORRECTED_PRIZES.categories()).await;
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
