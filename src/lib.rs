//! probchart - Probability distribution bar chart component.
//!
//! The library half of the crate: the [`DistributionChart`] component that
//! binds one named canvas to one live bar chart, the chart configuration and
//! static rendering engine behind it, and [`initialize_chart`], the one-call
//! entry point host code uses to stand a chart up on the fixed-id canvas.

pub mod canvas;
pub mod chart;
pub mod data;
pub mod gui;

pub use canvas::{Canvas, CanvasError, CanvasRegistry};
pub use chart::{initialize_chart, ChartOptions, DistributionChart, DISTRIBUTION_CANVAS_ID};
pub use data::ChartData;
