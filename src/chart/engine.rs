//! Chart Engine Module
//! The chart-rendering object: one configured vertical bar chart that draws
//! itself into a canvas context with plotters.

use std::sync::atomic::{AtomicU64, Ordering};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use thiserror::Error;

use crate::canvas::Context2d;
use crate::chart::ChartOptions;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("chart drawing failed: {0}")]
    Backend(String),
}

/// Bands per bar used to emulate the vertical gradient fill.
const GRADIENT_BANDS: usize = 24;

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

/// A live vertical bar chart bound to whatever context it is drawn into.
///
/// Instances carry a unique id so callers can tell an in-place mutation
/// (`update`) from a replacement (`render`).
#[derive(Debug)]
pub struct BarChart {
    id: u64,
    options: ChartOptions,
}

impl BarChart {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            id: NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed),
            options,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Replace the dataset in place. The chart identity is unchanged; the
    /// next `draw` shows the new bars.
    pub fn set_data(&mut self, labels: Vec<String>, values: Vec<f64>) {
        self.options.dataset.labels = labels;
        self.options.dataset.values = values;
    }

    /// Render the configured chart into the context's pixel buffer.
    pub fn draw(&self, ctx: &mut Context2d<'_>) -> Result<(), DrawError> {
        let (width, height) = (ctx.width(), ctx.height());
        Self::render_into(&self.options, ctx.buffer_mut(), width, height)
            .map_err(|e| DrawError::Backend(e.to_string()))
    }

    fn render_into(
        options: &ChartOptions,
        buf: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::with_buffer(buf, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let dataset = &options.dataset;
        let n = dataset.labels.len().min(dataset.values.len());
        let y_top = options.y_max();

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(44)
            .y_label_area_size(50)
            .build_cartesian_2d(-0.5f64..(n.max(1) as f64 - 0.5), 0f64..y_top)?;

        let tick = options.x_axis.tick_color;
        let tick_color = RGBColor(tick.0, tick.1, tick.2);
        // The bitmap backend only rotates text in quarter turns; a configured
        // slant becomes the nearest vertical layout.
        let transform = if options.x_axis.tick_rotation != 0.0 {
            FontTransform::Rotate90
        } else {
            FontTransform::None
        };
        let x_label_style = ("sans-serif", 12)
            .into_font()
            .color(&tick_color)
            .transform(transform)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let labels = dataset.labels.clone();
        let y_axis = options.y_axis.clone();

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.max(1))
            .x_label_style(x_label_style)
            .x_label_formatter(&move |x| {
                let i = x.round();
                if (x - i).abs() > 0.25 || i < 0.0 {
                    return String::new();
                }
                labels.get(i as usize).cloned().unwrap_or_default()
            })
            .y_label_formatter(&move |y| y_axis.format_tick((y * 1000.0).round() / 1000.0))
            .draw()?;

        let fill = options.fill;
        let base = RGBColor(fill.color.0, fill.color.1, fill.color.2);
        let border = RGBColor(
            dataset.border_color.0,
            dataset.border_color.1,
            dataset.border_color.2,
        );

        for (i, &value) in dataset.values.iter().take(n).enumerate() {
            if value <= 0.0 {
                continue;
            }
            let x0 = i as f64 - 0.4;
            let x1 = i as f64 + 0.4;

            // Banded fill: alpha follows the gradient over the chart area,
            // not just the bar, so short bars stay faint at their base.
            let band = value / GRADIENT_BANDS as f64;
            for k in 0..GRADIENT_BANDS {
                let y_lo = band * k as f64;
                let y_hi = band * (k + 1) as f64;
                let mid = (y_lo + y_hi) / 2.0;
                let alpha = fill.alpha_at(1.0 - mid / y_top);
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(x0, y_lo), (x1, y_hi)],
                    base.mix(alpha).filled(),
                )))?;
            }

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x0, 0.0), (x1, value)],
                border.stroke_width(dataset.border_width),
            )))?;
        }

        // Dataset legend, as the original engine shows above the chart
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0)],
                base.mix(0.0),
            )))?
            .label(dataset.label.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], base.mix(0.6).filled())
            });
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(tick_color)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ChartData;

    #[test]
    fn ids_are_unique_and_stable_across_set_data() {
        let data = ChartData::new(vec!["A".into()], vec![1.0]);
        let mut a = BarChart::new(ChartOptions::bar(&data));
        let b = BarChart::new(ChartOptions::bar(&data));
        assert_ne!(a.id(), b.id());

        let before = a.id();
        a.set_data(vec!["B".into()], vec![2.0]);
        assert_eq!(a.id(), before);
        assert_eq!(a.options().dataset.labels, vec!["B".to_string()]);
        assert_eq!(a.options().dataset.values, vec![2.0]);
    }

    #[test]
    fn set_data_keeps_configuration() {
        let data = ChartData::new(vec!["A".into()], vec![1.0]);
        let mut chart = BarChart::new(ChartOptions::bar(&data));
        chart.set_data(vec!["B".into(), "C".into()], vec![3.0, 4.0]);
        assert_eq!(chart.options().dataset.label, "Probabilidad (%)");
        assert_eq!(chart.options().tooltip.format(3.0), "Probabilidad: 3.0000%");
    }
}
