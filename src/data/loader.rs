use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::WeightTable;

// ---------------------------------------------------------------------------
// Parse policy
// ---------------------------------------------------------------------------

/// What to do with malformed numeric content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Non-numeric tokens become `NaN`, ragged rows are `NaN`-padded.
    /// Matches the behavior of the original tooling that wrote these files.
    #[default]
    Tolerant,
    /// Any non-numeric token or ragged row fails the whole load.
    Strict,
}

/// Typed error for strict-mode parsing, carried inside the `anyhow` chain.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("row {row}, column {col}: '{token}' is not a number")]
    BadToken {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a weight table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – headerless comma-delimited numeric rows
/// * `.json`         – top-level array of numeric arrays `[[...], [...]]`
pub fn load_table(path: &Path, mode: ParseMode) -> Result<WeightTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_csv(file, mode).with_context(|| format!("parsing {}", path.display()))
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_json(&text, mode).with_context(|| format!("parsing {}", path.display()))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse headerless comma-delimited numeric rows.
///
/// The weight files have no header row, so every record is data. The reader
/// is configured flexible so ragged rows reach the policy layer instead of
/// failing inside the csv crate.
fn load_csv<R: Read>(reader: R, mode: ParseMode) -> Result<WeightTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        // Skip fully blank lines (e.g. a trailing newline).
        if record.len() == 1 && record.get(0).unwrap_or("").is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(record.len());
        for (col_no, token) in record.iter().enumerate() {
            match token.parse::<f64>() {
                Ok(v) => row.push(v),
                Err(_) => match mode {
                    ParseMode::Tolerant => row.push(f64::NAN),
                    ParseMode::Strict => {
                        return Err(TableError::BadToken {
                            row: row_no,
                            col: col_no,
                            token: token.to_string(),
                        }
                        .into());
                    }
                },
            }
        }

        if mode == ParseMode::Strict {
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(TableError::RaggedRow {
                        row: row_no,
                        got: row.len(),
                        expected: first.len(),
                    }
                    .into());
                }
            }
        }

        rows.push(row);
    }

    Ok(WeightTable::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of numeric arrays,
///
/// ```json
/// [[0.1, -0.2, 0.3],
///  [0.4,  0.5, 0.6]]
/// ```
fn load_json(text: &str, mode: ParseMode) -> Result<WeightTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(records.len());

    for (row_no, rec) in records.iter().enumerate() {
        let arr = rec
            .as_array()
            .with_context(|| format!("Row {row_no} is not a JSON array"))?;

        let mut row = Vec::with_capacity(arr.len());
        for (col_no, v) in arr.iter().enumerate() {
            match v.as_f64() {
                Some(f) => row.push(f),
                None => match mode {
                    ParseMode::Tolerant => row.push(f64::NAN),
                    ParseMode::Strict => {
                        return Err(TableError::BadToken {
                            row: row_no,
                            col: col_no,
                            token: v.to_string(),
                        }
                        .into());
                    }
                },
            }
        }

        if mode == ParseMode::Strict {
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(TableError::RaggedRow {
                        row: row_no,
                        got: row.len(),
                        expected: first.len(),
                    }
                    .into());
                }
            }
        }

        rows.push(row);
    }

    Ok(WeightTable::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_table(text: &str, mode: ParseMode) -> Result<WeightTable> {
        load_csv(text.as_bytes(), mode)
    }

    #[test]
    fn parses_rectangular_csv() {
        let table = csv_table("1,2,3\n3,4,5\n", ParseMode::Tolerant).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(table.column_means(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn end_to_end_means_for_both_sample_shapes() {
        // The two original inputs: a 2×3 hidden layer and a 2×2 output layer.
        let hidden = csv_table("1,2,3\n3,4,5\n", ParseMode::Tolerant).unwrap();
        let output = csv_table("10,20\n30,40\n", ParseMode::Tolerant).unwrap();
        assert_eq!(hidden.column_means(), vec![2.0, 3.0, 4.0]);
        assert_eq!(output.column_means(), vec![20.0, 30.0]);
    }

    #[test]
    fn tolerant_mode_turns_bad_token_into_nan() {
        let table = csv_table("1,x,3\n1,2,3\n", ParseMode::Tolerant).unwrap();
        let means = table.column_means();
        assert_eq!(means[0], 1.0);
        assert!(means[1].is_nan());
        assert_eq!(means[2], 3.0);
    }

    #[test]
    fn strict_mode_rejects_bad_token() {
        let err = csv_table("1,x,3\n", ParseMode::Strict).unwrap_err();
        let table_err = err.downcast_ref::<TableError>().unwrap();
        assert_eq!(
            *table_err,
            TableError::BadToken {
                row: 0,
                col: 1,
                token: "x".into()
            }
        );
    }

    #[test]
    fn strict_mode_rejects_ragged_row() {
        let err = csv_table("1,2,3\n4,5\n", ParseMode::Strict).unwrap_err();
        let table_err = err.downcast_ref::<TableError>().unwrap();
        assert_eq!(
            *table_err,
            TableError::RaggedRow {
                row: 1,
                got: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn tolerant_mode_pads_ragged_row() {
        let table = csv_table("1,2,3\n4,5\n", ParseMode::Tolerant).unwrap();
        assert_eq!(table.n_cols(), 3);
        let means = table.column_means();
        assert_eq!(means[0], 2.5);
        assert!(means[2].is_nan());
    }

    #[test]
    fn empty_input_loads_as_empty_table() {
        let table = csv_table("", ParseMode::Tolerant).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.n_cols(), 0);
    }

    #[test]
    fn negative_and_scientific_notation_parse() {
        let table = csv_table("-1.5,2e3\n", ParseMode::Strict).unwrap();
        assert_eq!(table.column_means(), vec![-1.5, 2000.0]);
    }

    #[test]
    fn json_array_of_arrays_parses() {
        let table = load_json("[[1,2,3],[3,4,5]]", ParseMode::Strict).unwrap();
        assert_eq!(table.column_means(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn json_non_numeric_cell_follows_mode() {
        let table = load_json("[[1, \"x\"]]", ParseMode::Tolerant).unwrap();
        assert!(table.column_means()[1].is_nan());

        let err = load_json("[[1, \"x\"]]", ParseMode::Strict).unwrap_err();
        assert!(err.downcast_ref::<TableError>().is_some());
    }

    #[test]
    fn json_top_level_must_be_array() {
        assert!(load_json("{\"a\": 1}", ParseMode::Tolerant).is_err());
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let err = load_table(Path::new("does_not_exist.csv"), ParseMode::Tolerant).unwrap_err();
        assert!(err.to_string().contains("does_not_exist.csv"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_table(Path::new("weights.parquet"), ParseMode::Tolerant).unwrap_err();
        assert!(err.to_string().contains("parquet"));
    }
}
