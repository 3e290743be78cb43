use crate::core::{Collection, Record, RecordSource};
use crate::utils::error::Result;
use serde_json::{Map, Number, Value};
use std::io::Read;
use std::path::PathBuf;

/// Reads records from a local CSV export of the stall spreadsheet.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Integers first, then finite floats, otherwise the trimmed text.
pub fn parse_cell(cell: &str) -> Option<Value> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(int) = cell.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    if let Some(float) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Some(Value::Number(float));
    }
    Some(Value::String(cell.to_string()))
}

pub fn read_records<R: Read>(reader: R) -> Result<Collection> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let mut data = Map::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if let Some(value) = parse_cell(cell) {
                data.insert(header.trim().to_string(), value);
            }
        }
        if data.is_empty() {
            tracing::warn!("Skipping empty row {}", records.len() + 1);
            continue;
        }
        records.push(Record::from(data));
    }

    Ok(records)
}

impl RecordSource for CsvFileSource {
    fn load(&self) -> Result<Collection> {
        tracing::debug!("Reading records from {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        let records = read_records(file)?;
        tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(" 50 "), Some(json!(50)));
        assert_eq!(parse_cell("4.5"), Some(json!(4.5)));
        assert_eq!(parse_cell("Burger Hub"), Some(json!("Burger Hub")));
        assert_eq!(parse_cell("NaN"), Some(json!("NaN")));
        assert_eq!(parse_cell("  "), None);
    }

    #[test]
    fn test_read_records_keeps_column_order_and_drops_blank_cells() {
        let data = "stall_id,stall_name,lowest_price,promo\n1,Burger Hub,50,\n2,Noodle Bar,45.5,Free soup\n,,,\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            serde_json::to_value(&records[0]).unwrap(),
            json!({"stall_id": 1, "stall_name": "Burger Hub", "lowest_price": 50})
        );
        let keys: Vec<&str> = records[1].data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["stall_id", "stall_name", "lowest_price", "promo"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvFileSource::new("/definitely/not/here.csv");
        assert!(matches!(
            source.load(),
            Err(crate::utils::error::BrowseError::Io(_))
        ));
    }
}
