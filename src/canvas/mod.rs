//! Canvas module - drawing surfaces and lookup

mod registry;
mod surface;

pub use registry::{CanvasHandle, CanvasRegistry};
pub use surface::{Canvas, CanvasError, Context2d};
