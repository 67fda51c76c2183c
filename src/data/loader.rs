use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::SchemaError;
use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch columns, extra columns ignored
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – the same column names
///
/// Any schema violation fails the whole load; an empty dataset is an error too.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    let dataset = LaunchDataset::from_records(records);
    if dataset.is_empty() {
        bail!("{} contains no launch records", path.display());
    }

    Ok(dataset)
}

/// Validate one row and assemble the record.
fn build_record(
    row: usize,
    site: String,
    payload_mass_kg: f64,
    outcome: Outcome,
    booster_category: String,
) -> Result<LaunchRecord, SchemaError> {
    if site.trim().is_empty() {
        return Err(SchemaError::EmptySite { row });
    }
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(SchemaError::InvalidPayload {
            row,
            value: payload_mass_kg,
        });
    }
    Ok(LaunchRecord {
        site,
        payload_mass_kg,
        outcome,
        booster_category,
    })
}

/// `class` as written by pandas: `1`, `0`, or their float forms.
fn outcome_from_f64(class: f64) -> Option<Outcome> {
    if class == 1.0 {
        Some(Outcome::Success)
    } else if class == 0.0 {
        Some(Outcome::Failure)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(SchemaError::MissingColumn(name))
    };
    let site_idx = column(SITE_COLUMN)?;
    let payload_idx = column(PAYLOAD_COLUMN)?;
    let class_idx = column(CLASS_COLUMN)?;
    let booster_idx = column(BOOSTER_COLUMN)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let payload_raw = field(payload_idx);
        let payload = payload_raw
            .parse::<f64>()
            .map_err(|_| SchemaError::NonNumericPayload {
                row: row_no,
                value: payload_raw.to_string(),
            })?;

        let class_raw = field(class_idx);
        let outcome = class_raw
            .parse::<i64>()
            .ok()
            .and_then(Outcome::from_class)
            .or_else(|| class_raw.parse::<f64>().ok().and_then(outcome_from_f64))
            .ok_or_else(|| SchemaError::InvalidClass {
                row: row_no,
                value: class_raw.to_string(),
            })?;

        records.push(build_record(
            row_no,
            field(site_idx).to_string(),
            payload,
            outcome,
            field(booster_idx).to_string(),
        )?);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 1,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let site = json_string(obj, i, SITE_COLUMN)?;
        let booster = json_string(obj, i, BOOSTER_COLUMN)?;

        let payload = match json_field(obj, i, PAYLOAD_COLUMN)? {
            JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            other => {
                return Err(SchemaError::NonNumericPayload {
                    row: i,
                    value: other.to_string(),
                }
                .into());
            }
        };

        let class = json_field(obj, i, CLASS_COLUMN)?;
        let outcome = match class {
            JsonValue::Number(n) => n.as_f64().and_then(outcome_from_f64),
            JsonValue::Bool(true) => Some(Outcome::Success),
            JsonValue::Bool(false) => Some(Outcome::Failure),
            _ => None,
        }
        .ok_or_else(|| SchemaError::InvalidClass {
            row: i,
            value: class.to_string(),
        })?;

        records.push(build_record(i, site, payload, outcome, booster)?);
    }

    Ok(records)
}

fn json_field<'a>(
    obj: &'a Map<String, JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<&'a JsonValue, SchemaError> {
    match obj.get(column) {
        None => Err(SchemaError::MissingColumn(column)),
        Some(JsonValue::Null) => Err(SchemaError::MissingValue { row, column }),
        Some(v) => Ok(v),
    }
}

fn json_string(
    obj: &Map<String, JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<String, SchemaError> {
    Ok(match json_field(obj, row, column)? {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Accepted column types:
/// - site / booster category: Utf8 or LargeUtf8
/// - payload: Float64, Float32, Int64 or Int32
/// - class: Int64, Int32, Float64 or Boolean
///
/// Works with files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut row_offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map(|i| batch.column(i))
                .map_err(|_| SchemaError::MissingColumn(name))
        };
        let site_col = column(SITE_COLUMN)?;
        let payload_col = column(PAYLOAD_COLUMN)?;
        let class_col = column(CLASS_COLUMN)?;
        let booster_col = column(BOOSTER_COLUMN)?;

        for i in 0..batch.num_rows() {
            let row = row_offset + i;
            let site = string_at(site_col, i, row, SITE_COLUMN)?;
            let booster = string_at(booster_col, i, row, BOOSTER_COLUMN)?;
            let payload = payload_at(payload_col, i, row)?;
            let outcome = outcome_at(class_col, i, row)?;
            records.push(build_record(row, site, payload, outcome, booster)?);
        }

        row_offset += batch.num_rows();
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn unsupported(col: &ArrayRef, column: &'static str) -> SchemaError {
    SchemaError::UnsupportedType {
        column,
        data_type: format!("{:?}", col.data_type()),
    }
}

fn check_null(col: &ArrayRef, i: usize, row: usize, column: &'static str) -> Result<(), SchemaError> {
    if col.is_null(i) {
        Err(SchemaError::MissingValue { row, column })
    } else {
        Ok(())
    }
}

fn string_at(col: &ArrayRef, i: usize, row: usize, column: &'static str) -> Result<String, SchemaError> {
    check_null(col, i, row, column)?;
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(i).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(i).to_string()),
        _ => Err(unsupported(col, column)),
    }
}

fn payload_at(col: &ArrayRef, i: usize, row: usize) -> Result<f64, SchemaError> {
    check_null(col, i, row, PAYLOAD_COLUMN)?;
    match col.data_type() {
        DataType::Float64 => Ok(col.as_primitive::<Float64Type>().value(i)),
        DataType::Float32 => Ok(col.as_primitive::<Float32Type>().value(i) as f64),
        DataType::Int64 => Ok(col.as_primitive::<Int64Type>().value(i) as f64),
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(i) as f64),
        _ => Err(unsupported(col, PAYLOAD_COLUMN)),
    }
}

fn outcome_at(col: &ArrayRef, i: usize, row: usize) -> Result<Outcome, SchemaError> {
    check_null(col, i, row, CLASS_COLUMN)?;
    let (outcome, raw) = match col.data_type() {
        DataType::Int64 => {
            let v = col.as_primitive::<Int64Type>().value(i);
            (Outcome::from_class(v), v.to_string())
        }
        DataType::Int32 => {
            let v = col.as_primitive::<Int32Type>().value(i);
            (Outcome::from_class(v as i64), v.to_string())
        }
        DataType::Float64 => {
            let v = col.as_primitive::<Float64Type>().value(i);
            (outcome_from_f64(v), v.to_string())
        }
        DataType::Boolean => {
            let v = col.as_boolean().value(i);
            (Some(if v { Outcome::Success } else { Outcome::Failure }), v.to_string())
        }
        _ => return Err(unsupported(col, CLASS_COLUMN)),
    };
    outcome.ok_or(SchemaError::InvalidClass { row, value: raw })
}
