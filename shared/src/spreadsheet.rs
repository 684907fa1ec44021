//! Reading worksheets into header-keyed records.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::{Map, Number, Value};

use crate::{Error, Result};

/// One worksheet row keyed by column header.
pub type Record = Map<String, Value>;

/// The first worksheet of a workbook, parsed into records.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    /// Rows in the used range, header row included.
    pub row_count: usize,
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Open a workbook and parse its first worksheet.
pub fn read_first_sheet(path: impl AsRef<Path>) -> Result<Sheet> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::Validation(format!("{} has no worksheets", path.display())))?;
    let range = workbook.worksheet_range(&name)?;

    let rows: Vec<Vec<Value>> = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    let (headers, records) = records_from_rows(&rows);

    Ok(Sheet {
        name,
        row_count: range.height(),
        headers,
        records,
    })
}

/// Treat the first row as headers and map every later row onto them.
///
/// Empty cells are left out of a record, rows with no values are skipped and
/// cells beyond the last header are ignored.
pub fn records_from_rows(rows: &[Vec<Value>]) -> (Vec<String>, Vec<Record>) {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return (Vec::new(), Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    let records = data_rows
        .iter()
        .filter_map(|row| {
            let record: Record = headers
                .iter()
                .zip(row)
                .filter(|(header, value)| !header.is_empty() && !value.is_null())
                .map(|(header, value)| (header.clone(), value.clone()))
                .collect();
            (!record.is_empty()).then_some(record)
        })
        .collect();

    (headers, records)
}

fn header_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string()),
    }
}
