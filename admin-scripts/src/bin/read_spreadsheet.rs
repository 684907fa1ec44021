//! Read Spreadsheet - Prints the first worksheet of a workbook as records.
//!
//! Usage: `read_spreadsheet [path]`. Row 1 is treated as the header row.

use std::process::ExitCode;

use shared::spreadsheet::read_first_sheet;
use shared::Result;
use tracing::info;

const DEFAULT_WORKBOOK: &str = "/home/admin/Downloads/events.xlsx";

const PREVIEW_RECORDS: usize = 3;

fn run(path: &str) -> Result<()> {
    let sheet = read_first_sheet(path)?;
    info!(path, sheet = %sheet.name, records = sheet.records.len(), "Read worksheet");

    println!("📄 Sheet: {}", sheet.name);
    println!("   Rows: {}", sheet.row_count);
    println!("   Headers: {}", sheet.headers.join(", "));
    println!("   Records: {}", sheet.records.len());

    for (i, record) in sheet.records.iter().take(PREVIEW_RECORDS).enumerate() {
        println!("\n--- Record {} ---", i + 1);
        println!("{}", serde_json::to_string_pretty(record)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    shared::cli::init();
    let path = shared::cli::first_arg_or(DEFAULT_WORKBOOK);
    shared::cli::exit_code(run(&path))
}
