use std::path::Path;

use crate::data::loader::{self, ParseMode};
use crate::data::model::{MeanTrace, WeightTable};

// ---------------------------------------------------------------------------
// Figure state
// ---------------------------------------------------------------------------

/// The figure being built, independent of rendering.
///
/// This is the explicit handle that every plotting call mutates; traces,
/// axis labels and the title all live here rather than in any process-wide
/// drawing context.
pub struct FigureState {
    /// All traces added so far, in insertion order.
    pub traces: Vec<MeanTrace>,

    /// Plot title shown above the figure.
    pub title: String,

    /// X-axis label.
    pub x_label: String,

    /// Y-axis label.
    pub y_label: String,

    /// Draw point markers on top of the lines.
    pub show_points: bool,

    /// How malformed numeric content is handled on load.
    pub parse_mode: ParseMode,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for FigureState {
    fn default() -> Self {
        Self {
            traces: Vec::new(),
            title: "Comparison of Mean Weights for Hidden and Output Layers".to_string(),
            x_label: "Neuron Index".to_string(),
            y_label: "Mean Weight Value".to_string(),
            show_points: false,
            parse_mode: ParseMode::default(),
            status_message: None,
        }
    }
}

impl FigureState {
    /// Reduce a loaded table to its mean vector and append it as a trace.
    /// Traces are independent; tables of different widths coexist.
    pub fn add_table(&mut self, label: impl Into<String>, path: &Path, table: &WeightTable) {
        self.traces
            .push(MeanTrace::new(label, path.to_path_buf(), table));
    }

    /// Load a weight file and add its trace, reporting failures in the
    /// status bar instead of aborting. `label` falls back to the file stem.
    pub fn load_and_add(&mut self, path: &Path, label: Option<String>) {
        let label = label.unwrap_or_else(|| label_from_path(path));
        match loader::load_table(path, self.parse_mode) {
            Ok(table) => {
                log::info!(
                    "Loaded {} ({} rows x {} cols)",
                    path.display(),
                    table.n_rows(),
                    table.n_cols()
                );
                self.add_table(label, path, &table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                // Append rather than overwrite so one bad input stays
                // visible after later inputs load fine.
                let msg = format!("Error: {e:#}");
                self.status_message = Some(match self.status_message.take() {
                    Some(prev) => format!("{prev}; {msg}"),
                    None => msg,
                });
            }
        }
    }

    /// Remove the trace at `index` (no-op when out of range).
    pub fn remove_trace(&mut self, index: usize) {
        if index < self.traces.len() {
            self.traces.remove(index);
        }
    }

    /// Number of currently visible traces.
    pub fn visible_count(&self) -> usize {
        self.traces.iter().filter(|t| t.visible).count()
    }
}

/// Derive a display label from a file name: the stem with its first letter
/// upper-cased and a trailing `_weights` suffix dropped, so
/// `hidden_weights.csv` becomes `Hidden`.
pub fn label_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unnamed");
    let stem = stem.strip_suffix("_weights").unwrap_or(stem);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Unnamed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_figure_matches_original_annotations() {
        let state = FigureState::default();
        assert_eq!(state.x_label, "Neuron Index");
        assert_eq!(state.y_label, "Mean Weight Value");
        assert_eq!(
            state.title,
            "Comparison of Mean Weights for Hidden and Output Layers"
        );
        assert!(state.traces.is_empty());
    }

    #[test]
    fn differently_shaped_tables_keep_independent_traces() {
        let mut state = FigureState::default();
        let hidden = WeightTable::from_rows(vec![vec![1.0, 2.0, 3.0], vec![3.0, 4.0, 5.0]]);
        let output = WeightTable::from_rows(vec![vec![10.0, 20.0], vec![30.0, 40.0]]);

        state.add_table("Hidden", &PathBuf::from("hidden_weights.csv"), &hidden);
        state.add_table("Output", &PathBuf::from("output_weights.csv"), &output);

        assert_eq!(state.traces.len(), 2);
        assert_eq!(state.traces[0].legend_name(), "Hidden Mean Weights");
        assert_eq!(state.traces[1].legend_name(), "Output Mean Weights");
        assert_eq!(state.traces[0].values, vec![2.0, 3.0, 4.0]);
        assert_eq!(state.traces[1].values, vec![20.0, 30.0]);
        assert_eq!(state.traces[0].len(), 3);
        assert_eq!(state.traces[1].len(), 2);
    }

    #[test]
    fn load_failure_sets_status_and_keeps_existing_traces() {
        let mut state = FigureState::default();
        let table = WeightTable::from_rows(vec![vec![1.0]]);
        state.add_table("Ok", &PathBuf::from("ok.csv"), &table);

        state.load_and_add(&PathBuf::from("missing_weights.csv"), None);

        assert_eq!(state.traces.len(), 1);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn load_failure_survives_a_later_successful_load() {
        let good = std::env::temp_dir().join("weightlens_state_test_good.csv");
        std::fs::write(&good, "1,2\n3,4\n").unwrap();

        let mut state = FigureState::default();
        state.load_and_add(&PathBuf::from("missing_weights.csv"), None);
        state.load_and_add(&good, Some("Good".to_string()));

        std::fs::remove_file(&good).ok();

        assert_eq!(state.traces.len(), 1);
        assert_eq!(state.traces[0].values, vec![2.0, 3.0]);
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("missing_weights.csv"));
    }

    #[test]
    fn multiple_load_failures_accumulate_in_status() {
        let mut state = FigureState::default();
        state.load_and_add(&PathBuf::from("first_missing.csv"), None);
        state.load_and_add(&PathBuf::from("second_missing.csv"), None);

        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("first_missing.csv"));
        assert!(msg.contains("second_missing.csv"));
    }

    #[test]
    fn labels_derive_from_file_stems() {
        assert_eq!(label_from_path(Path::new("hidden_weights.csv")), "Hidden");
        assert_eq!(label_from_path(Path::new("output_weights.csv")), "Output");
        assert_eq!(label_from_path(Path::new("/tmp/epoch3.json")), "Epoch3");
    }

    #[test]
    fn remove_trace_ignores_out_of_range() {
        let mut state = FigureState::default();
        state.remove_trace(0);
        let table = WeightTable::from_rows(vec![vec![1.0]]);
        state.add_table("t", &PathBuf::from("t.csv"), &table);
        state.remove_trace(5);
        assert_eq!(state.traces.len(), 1);
        state.remove_trace(0);
        assert!(state.traces.is_empty());
    }
}
