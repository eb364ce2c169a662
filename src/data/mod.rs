//! Data module - chart input shape

mod model;

pub use model::ChartData;
