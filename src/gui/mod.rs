//! GUI module - viewer application components

mod app;
mod control_panel;

pub use app::ViewerApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
