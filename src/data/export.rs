use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::errors::ParquetError;
use thiserror::Error;

use super::model::Customer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write customers to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – one row per customer with a header
/// * `.json`    – `[{ "id": 1, "gender": "Male", ... }, ...]`
/// * `.parquet` – flat columns, one row group
pub fn export_file(path: &Path, customers: &[Customer]) -> Result<(), ExportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(BufWriter::new(File::create(path)?), customers),
        "json" => write_json(BufWriter::new(File::create(path)?), customers),
        "parquet" | "pq" => write_parquet(File::create(path)?, customers),
        other => Err(ExportError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV / JSON
// ---------------------------------------------------------------------------

pub fn write_csv<W: Write>(writer: W, customers: &[Customer]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for c in customers {
        wtr.serialize(CsvRow::from(c))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Flat CSV row; `segment` is always written so the column is never empty.
#[derive(serde::Serialize)]
struct CsvRow<'a> {
    id: u32,
    gender: &'a str,
    age: u32,
    annual_income: u32,
    spending_score: u32,
    churn: bool,
    segment: &'a str,
}

impl<'a> From<&'a Customer> for CsvRow<'a> {
    fn from(c: &'a Customer) -> Self {
        CsvRow {
            id: c.id,
            gender: c.gender.as_str(),
            age: c.age,
            annual_income: c.annual_income,
            spending_score: c.spending_score,
            churn: c.churn,
            segment: c.segment(),
        }
    }
}

pub fn write_json<W: Write>(mut writer: W, customers: &[Customer]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, customers)?;
    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet
// ---------------------------------------------------------------------------

fn customer_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("gender", DataType::Utf8, false),
        Field::new("age", DataType::Int64, false),
        Field::new("annual_income", DataType::Int64, false),
        Field::new("spending_score", DataType::Int64, false),
        Field::new("churn", DataType::Boolean, false),
        Field::new("segment", DataType::Utf8, false),
    ])
}

/// Columnar view of the customers as a single Arrow batch.
pub fn to_record_batch(customers: &[Customer]) -> Result<RecordBatch, ExportError> {
    let int_column = |f: fn(&Customer) -> u32| -> ArrayRef {
        Arc::new(Int64Array::from_iter_values(
            customers.iter().map(|c| i64::from(f(c))),
        ))
    };

    let columns: Vec<ArrayRef> = vec![
        int_column(|c| c.id),
        Arc::new(StringArray::from_iter_values(
            customers.iter().map(|c| c.gender.as_str()),
        )),
        int_column(|c| c.age),
        int_column(|c| c.annual_income),
        int_column(|c| c.spending_score),
        Arc::new(BooleanArray::from(
            customers.iter().map(|c| c.churn).collect::<Vec<_>>(),
        )),
        Arc::new(StringArray::from_iter_values(
            customers.iter().map(|c| c.segment()),
        )),
    ];

    Ok(RecordBatch::try_new(Arc::new(customer_schema()), columns)?)
}

pub fn write_parquet<W: Write + Send>(writer: W, customers: &[Customer]) -> Result<(), ExportError> {
    let batch = to_record_batch(customers)?;
    let mut writer = ArrowWriter::try_new(writer, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Gender;

    fn sample() -> Vec<Customer> {
        vec![
            Customer {
                id: 1,
                gender: Gender::Female,
                age: 34,
                annual_income: 72,
                spending_score: 81,
                churn: false,
                segment: Some("General".to_string()),
            },
            Customer {
                id: 2,
                gender: Gender::Male,
                age: 58,
                annual_income: 40,
                spending_score: 22,
                churn: true,
                segment: None,
            },
        ]
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,gender,age,annual_income,spending_score,churn,segment")
        );
        assert_eq!(lines.next(), Some("1,Female,34,72,81,false,General"));
        assert_eq!(lines.next(), Some("2,Male,58,40,22,true,General"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_reads_back() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();
        let parsed: Vec<Customer> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn record_batch_shape() {
        let batch = to_record_batch(&sample()).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 7);
        assert_eq!(batch.schema().field(6).name(), "segment");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_file(&dir.path().join("out.xlsx"), &sample()).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedExtension(ext) if ext == "xlsx"));
    }
}
