//! Chart module - configuration, engine, component, interactive plotter

mod component;
mod engine;
mod options;
mod plotter;

pub use component::{initialize_chart, DistributionChart, DISTRIBUTION_CANVAS_ID};
pub use engine::{BarChart, DrawError};
pub use options::{
    AnimationOptions, ChartOptions, DatasetOptions, Easing, GradientFill, TooltipOptions,
    XAxisOptions, YAxisOptions,
};
pub use plotter::ChartPlotter;
