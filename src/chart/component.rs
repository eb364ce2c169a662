//! Distribution Chart Component
//! Binds one canvas to one live bar chart and mediates its whole lifecycle:
//! render replaces, update mutates in place, destroy releases.

use crate::canvas::{CanvasError, CanvasHandle, CanvasRegistry};
use crate::chart::{BarChart, ChartOptions};
use crate::data::ChartData;

/// Element id the module-level entry point looks up.
pub const DISTRIBUTION_CANVAS_ID: &str = "distributionChart";

/// One canvas, at most one live chart-rendering object.
#[derive(Debug)]
pub struct DistributionChart {
    canvas: CanvasHandle,
    chart: Option<BarChart>,
}

impl DistributionChart {
    /// Bind to the canvas registered under `canvas_id`. Nothing is drawn yet.
    pub fn new(registry: &CanvasRegistry, canvas_id: &str) -> Result<Self, CanvasError> {
        let canvas = registry
            .get(canvas_id)
            .ok_or_else(|| CanvasError::NotFound(canvas_id.to_string()))?;
        Ok(Self {
            canvas,
            chart: None,
        })
    }

    /// Create (or replace) the chart for `data` and draw it.
    ///
    /// Any existing chart is released first so the canvas never carries two
    /// live rendering objects. When the drawing context is unavailable the
    /// call returns silently and the chart area stays blank.
    pub fn render(&mut self, data: &ChartData) {
        self.chart = None;

        let mut canvas = self.canvas.borrow_mut();
        let Some(mut ctx) = canvas.context_2d() else {
            return;
        };

        let chart = BarChart::new(ChartOptions::bar(data));
        let _ = chart.draw(&mut ctx);
        self.chart = Some(chart);
    }

    /// Mutate the live chart's labels and values in place and redraw;
    /// without a live chart this is a first `render`.
    pub fn update(&mut self, data: &ChartData) {
        match self.chart.as_mut() {
            Some(chart) => {
                chart.set_data(data.labels.clone(), data.values.clone());
                let mut canvas = self.canvas.borrow_mut();
                if let Some(mut ctx) = canvas.context_2d() {
                    let _ = chart.draw(&mut ctx);
                }
            }
            None => self.render(data),
        }
    }

    /// Release the chart and blank the surface. The instance stays usable;
    /// a later `update` behaves like a fresh `render`.
    pub fn destroy(&mut self) {
        if self.chart.take().is_some() {
            self.canvas.borrow_mut().clear();
        }
    }

    /// The live chart-rendering object, if any.
    pub fn chart(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }

    pub fn canvas(&self) -> &CanvasHandle {
        &self.canvas
    }
}

impl Drop for DistributionChart {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Entry point for host code: build a [`DistributionChart`] on the fixed-id
/// canvas and render `data` in one call.
///
/// Returns `None`, with no side effects, when `data` is absent or the canvas
/// id is not registered.
pub fn initialize_chart(
    registry: &CanvasRegistry,
    data: Option<&ChartData>,
) -> Option<DistributionChart> {
    let data = data?;
    if !registry.contains(DISTRIBUTION_CANVAS_ID) {
        return None;
    }
    let mut chart = DistributionChart::new(registry, DISTRIBUTION_CANVAS_ID).ok()?;
    chart.render(data);
    Some(chart)
}
