use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::trace_color;
use crate::state::FigureState;

// ---------------------------------------------------------------------------
// Left side panel – trace list
// ---------------------------------------------------------------------------

/// Render the trace panel: one row per loaded trace with visibility toggle,
/// colour-coded legend text, point count and value range.
pub fn side_panel(ui: &mut Ui, state: &mut FigureState) {
    ui.heading("Traces");
    ui.separator();

    if state.traces.is_empty() {
        ui.label("No weight files loaded.");
        return;
    }

    let n_traces = state.traces.len();
    let mut to_remove: Option<usize> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, trace) in state.traces.iter_mut().enumerate() {
                let color = trace_color(idx, n_traces);
                let text = RichText::new(trace.legend_name()).color(color).strong();
                ui.checkbox(&mut trace.visible, text);

                ui.indent(idx, |ui: &mut Ui| {
                    let file = trace
                        .source
                        .file_name()
                        .map(|f| f.to_string_lossy().into_owned())
                        .unwrap_or_else(|| trace.source.display().to_string());
                    ui.label(RichText::new(file).weak());

                    match trace.finite_range() {
                        Some((lo, hi)) => {
                            ui.label(format!(
                                "{} points, range {lo:.4} … {hi:.4}",
                                trace.len()
                            ));
                        }
                        None => {
                            ui.label(format!("{} points, no finite values", trace.len()));
                        }
                    }

                    if ui.small_button("Remove").clicked() {
                        to_remove = Some(idx);
                    }
                });

                ui.separator();
            }
        });

    if let Some(idx) = to_remove {
        state.remove_trace(idx);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut FigureState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.traces.is_empty() {
            ui.label(format!(
                "{} traces loaded, {} visible",
                state.traces.len(),
                state.visible_count()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_points, "Show Points")
            .clicked()
        {
            state.show_points = !state.show_points;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut FigureState) {
    let file = rfd::FileDialog::new()
        .set_title("Open weight matrix")
        .add_filter("Supported files", &["csv", "txt", "json"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_and_add(&path, None);
    }
}
