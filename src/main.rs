//! Distribution Chart Viewer
//!
//! Desktop viewer for probability distribution bar charts: loads a
//! distribution JSON and drives the chart component lifecycle.

use eframe::egui;
use probchart::gui::ViewerApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Distribution Chart"),
        ..Default::default()
    };

    eframe::run_native(
        "Distribution Chart",
        options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
    )
}
