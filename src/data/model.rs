use std::path::PathBuf;

// ---------------------------------------------------------------------------
// WeightTable – one parsed weight matrix
// ---------------------------------------------------------------------------

/// A 2-D numeric table parsed from one input file.
///
/// Rows are samples/neurons, columns are weight indices. Rows shorter than
/// the widest row are padded with `NaN` at load time so the table is always
/// rectangular (`n_cols` wide).
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    rows: Vec<Vec<f64>>,
    n_cols: usize,
}

impl WeightTable {
    /// Build a rectangular table from raw parsed rows, padding ragged rows
    /// with `NaN` up to the widest row.
    pub fn from_rows(mut rows: Vec<Vec<f64>>) -> Self {
        let n_cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(n_cols, f64::NAN);
        }
        WeightTable { rows, n_cols }
    }

    /// Number of rows (samples).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (weight indices).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column-wise arithmetic means, one per column.
    ///
    /// A `NaN` anywhere in a column propagates into that column's mean.
    /// Summation runs in row order, so repeated calls on the same table are
    /// bit-identical.
    pub fn column_means(&self) -> Vec<f64> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let n = self.rows.len() as f64;
        (0..self.n_cols)
            .map(|col| self.rows.iter().map(|row| row[col]).sum::<f64>() / n)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// MeanTrace – one line series on the figure
// ---------------------------------------------------------------------------

/// One labeled line trace: the mean vector of a single weight table.
/// X is implicitly the column index `0..values.len()`.
#[derive(Debug, Clone)]
pub struct MeanTrace {
    /// Base label, e.g. "Hidden"; the legend shows `"{label} Mean Weights"`.
    pub label: String,
    /// Column-wise means of the source table.
    pub values: Vec<f64>,
    /// File the table was loaded from (shown in the side panel).
    pub source: PathBuf,
    /// Whether the trace is currently drawn.
    pub visible: bool,
}

impl MeanTrace {
    pub fn new(label: impl Into<String>, source: PathBuf, table: &WeightTable) -> Self {
        MeanTrace {
            label: label.into(),
            values: table.column_means(),
            source,
            visible: true,
        }
    }

    /// Legend text for the figure.
    pub fn legend_name(&self) -> String {
        format!("{} Mean Weights", self.label)
    }

    /// Number of plotted points (== source table column count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Min/max over the finite values, for the side-panel summary.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.values {
            if !v.is_finite() {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }
}
