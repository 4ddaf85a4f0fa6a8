use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::trace_color;
use crate::state::FigureState;

// ---------------------------------------------------------------------------
// Mean-weight figure (central panel)
// ---------------------------------------------------------------------------

/// Render the figure in the central panel: one line per visible trace,
/// x = neuron/column index, y = mean weight value.
pub fn figure_plot(ui: &mut Ui, state: &FigureState) {
    if state.traces.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a weight file to plot its column means  (File → Open…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.title.as_str());
    });

    let n_traces = state.traces.len();

    Plot::new("mean_weights_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label(state.x_label.clone())
        .y_axis_label(state.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, trace) in state.traces.iter().enumerate() {
                if !trace.visible {
                    continue;
                }

                let color = trace_color(idx, n_traces);
                let name = trace.legend_name();

                // NaN means (from malformed cells) stay in the series and
                // simply leave a gap, matching how the original rendered them.
                let points: Vec<[f64; 2]> = trace
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();

                let line = Line::new(PlotPoints::from(points.clone()))
                    .name(&name)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);

                if state.show_points {
                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .name(&name)
                            .color(color)
                            .radius(2.5),
                    );
                }
            }
        });
}
