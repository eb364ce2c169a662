//! Chart Plotter Module
//! Interactive mirror of a configured bar chart using egui_plot: hover
//! tooltips, category axis labels, percent ticks, entrance animation.

use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

use crate::chart::ChartOptions;

fn color32(rgb: (u8, u8, u8), alpha: f64) -> Color32 {
    Color32::from_rgba_unmultiplied(rgb.0, rgb.1, rgb.2, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Draws configured charts into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the vertical bar chart described by `options`.
    ///
    /// `progress` is the eased entrance-animation progress in [0, 1]; bar
    /// heights are scaled by it while tooltips keep showing the raw values.
    pub fn draw_bar_chart(ui: &mut egui::Ui, options: &ChartOptions, progress: f64, height: f32) {
        let dataset = &options.dataset;
        let n = dataset.labels.len().min(dataset.values.len());
        let progress = progress.clamp(0.0, 1.0);

        let fill = color32(options.fill.color, 0.6);
        let border = color32(dataset.border_color, 1.0);
        let tick_color = color32(options.x_axis.tick_color, 1.0);

        let bars: Vec<Bar> = dataset
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, &value)| {
                Bar::new(i as f64, value * progress)
                    .width(0.8)
                    .fill(fill)
                    .stroke(egui::Stroke::new(dataset.border_width as f32, border))
                    .name(dataset.labels[i].clone())
            })
            .collect();

        let tooltip = options.tooltip.clone();
        let values: Vec<f64> = dataset.values.iter().take(n).copied().collect();
        let chart = BarChart::new(bars)
            .name(dataset.label.clone())
            .element_formatter(Box::new(move |bar, _chart| {
                // Raw configured value, not the animation-scaled height
                let idx = bar.argument.round() as usize;
                let value = values.get(idx).copied().unwrap_or(bar.value);
                tooltip.format(value)
            }));

        let x_labels: Vec<String> = dataset.labels.iter().take(n).cloned().collect();
        let y_axis = options.y_axis.clone();

        let mut plot = Plot::new("distribution_bar_chart")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(move |mark, _range| {
                y_axis.format_tick((mark.value * 1000.0).round() / 1000.0)
            });

        if options.y_axis.begin_at_zero {
            plot = plot.include_y(0.0);
        }

        ui.visuals_mut().widgets.noninteractive.fg_stroke.color = tick_color;
        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
    }
}
