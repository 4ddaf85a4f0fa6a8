mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use app::WeightLensApp;
use clap::Parser;
use eframe::egui;
use state::FigureState;

fn main() -> eframe::Result {
    env_logger::init();

    let args = cli::Args::parse();

    let mut figure = FigureState {
        parse_mode: args.parse_mode(),
        ..FigureState::default()
    };
    if let Some(title) = &args.title {
        figure.title = title.clone();
    }

    // Load every requested input up front; failures land in the status bar
    // so the window still opens with whatever did load.
    for input in args.effective_inputs() {
        figure.load_and_add(&input.path, input.label);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "WeightLens – Mean Weight Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(WeightLensApp::new(figure)))),
    )
}
