//! Control Panel Widget
//! Left side panel: data source selection, chart lifecycle controls, export.

use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel driving the chart component.
pub struct ControlPanel {
    pub json_path: Option<PathBuf>,
    /// Multiplier applied to the values when updating in place.
    pub scale: f64,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            json_path: None,
            scale: 1.0,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        has_data: bool,
        has_chart: bool,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Distribution Chart")
                    .size(22.0)
                    .color(Color32::from_rgb(75, 192, 192)),
            );
            ui.label(
                RichText::new("Probability viewer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .json_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.json_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseJson;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Lifecycle Section =====
        ui.label(RichText::new("🔄 Chart Lifecycle").size(14.0).strong());
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(has_data, |ui| {
                let button = egui::Button::new(RichText::new("▶ Render").size(15.0))
                    .min_size(egui::vec2(180.0, 32.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Render;
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() / 2.0 - 90.0).max(0.0));
                ui.label("Value scale:");
                ui.add(
                    egui::DragValue::new(&mut self.scale)
                        .range(0.1..=10.0)
                        .speed(0.05),
                );
            });

            ui.add_space(5.0);

            ui.add_enabled_ui(has_data, |ui| {
                let button = egui::Button::new(RichText::new("⟳ Update in place").size(14.0))
                    .min_size(egui::vec2(180.0, 28.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Update;
                }
            });

            ui.add_space(5.0);

            ui.add_enabled_ui(has_chart, |ui| {
                let button = egui::Button::new(RichText::new("🗑 Destroy").size(14.0))
                    .min_size(egui::vec2(180.0, 28.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Destroy;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(has_chart, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("rendered") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseJson,
    Render,
    Update,
    Destroy,
    ExportPng,
}
