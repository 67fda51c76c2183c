use thiserror::Error;

/// A launch file whose contents do not match the expected schema.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: missing value in column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    #[error("row {row}: payload '{value}' is not a number")]
    NonNumericPayload { row: usize, value: String },

    #[error("row {row}: payload {value} kg is negative or not finite")]
    InvalidPayload { row: usize, value: f64 },

    #[error("row {row}: class '{value}' is not 0 or 1")]
    InvalidClass { row: usize, value: String },

    #[error("row {row}: empty launch site")]
    EmptySite { row: usize },

    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedType {
        column: &'static str,
        data_type: String,
    },
}
