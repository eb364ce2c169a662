//! Viewer Application
//! Main window: control panel on the left, the chart (interactive mirror plus
//! the rendered canvas surface) in the center. Plays the host page's role:
//! it obtains distribution data and drives the component through its API.

use std::path::Path;
use std::time::Instant;

use anyhow::Context as _;
use egui::{RichText, ScrollArea, SidePanel};

use crate::canvas::{Canvas, CanvasRegistry};
use crate::chart::{initialize_chart, ChartPlotter, DistributionChart, DISTRIBUTION_CANVAS_ID};
use crate::data::ChartData;
use crate::gui::{ControlPanel, ControlPanelAction};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;

/// Main application window.
pub struct ViewerApp {
    registry: CanvasRegistry,
    control_panel: ControlPanel,
    data: Option<ChartData>,
    component: Option<DistributionChart>,
    rendered_at: Option<Instant>,
    preview: Option<egui::TextureHandle>,
    surface_dirty: bool,
}

impl ViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut registry = CanvasRegistry::new();
        registry.insert(Canvas::new(DISTRIBUTION_CANVAS_ID, CANVAS_WIDTH, CANVAS_HEIGHT));

        Self {
            registry,
            control_panel: ControlPanel::new(),
            data: None,
            component: None,
            rendered_at: None,
            preview: None,
            surface_dirty: false,
        }
    }

    /// Loaded data with the panel's value scale applied.
    fn scaled_data(&self) -> Option<ChartData> {
        let data = self.data.as_ref()?;
        let scale = self.control_panel.scale;
        Some(ChartData {
            labels: data.labels.clone(),
            values: data.values.iter().map(|v| v * scale).collect(),
            x_values: data.x_values.clone(),
        })
    }

    fn handle_browse_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON Files", &["json"])
            .pick_file()
        else {
            return;
        };

        match load_chart_data(&path) {
            Ok(data) => {
                let bars = data.len();
                self.control_panel.json_path = Some(path);
                self.data = Some(data);
                match self.component.as_mut() {
                    Some(component) => {
                        if let Some(data) = self.data.as_ref() {
                            component.render(data);
                        }
                    }
                    None => {
                        self.component = initialize_chart(&self.registry, self.data.as_ref());
                    }
                }
                self.rendered_at = Some(Instant::now());
                self.surface_dirty = true;
                self.control_panel
                    .set_status(format!("Chart rendered: {} bars", bars));
            }
            Err(e) => {
                self.control_panel.set_status(format!("Error: {e:#}"));
            }
        }
    }

    fn handle_render(&mut self) {
        let Some(data) = self.scaled_data() else {
            self.control_panel.set_status("No data loaded");
            return;
        };
        match self.component.as_mut() {
            Some(component) => component.render(&data),
            None => self.component = initialize_chart(&self.registry, Some(&data)),
        }
        self.rendered_at = Some(Instant::now());
        self.surface_dirty = true;
        self.control_panel
            .set_status(format!("Chart rendered: {} bars", data.len()));
    }

    fn handle_update(&mut self) {
        let Some(data) = self.scaled_data() else {
            self.control_panel.set_status("No data loaded");
            return;
        };
        match self.component.as_mut() {
            Some(component) => component.update(&data),
            None => self.component = initialize_chart(&self.registry, Some(&data)),
        }
        // No animation restart: an in-place update keeps continuity
        if self.rendered_at.is_none() {
            self.rendered_at = Some(Instant::now());
        }
        self.surface_dirty = true;
        self.control_panel
            .set_status(format!("Chart rendered in place: {} bars", data.len()));
    }

    fn handle_destroy(&mut self) {
        if let Some(component) = self.component.as_mut() {
            component.destroy();
        }
        self.rendered_at = None;
        self.surface_dirty = true;
        self.control_panel.set_status("Chart destroyed");
    }

    fn handle_export_png(&mut self) {
        let Some(component) = self.component.as_ref() else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("distribution_chart.png")
            .save_file()
        else {
            return;
        };

        let canvas = component.canvas().borrow();
        match export_png(&canvas, &path) {
            Ok(()) => self
                .control_panel
                .set_status(format!("Exported {}", path.display())),
            Err(e) => self.control_panel.set_status(format!("Error: {e:#}")),
        }
    }

    /// Rebuild the rendered-surface texture from the canvas pixels.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let Some(component) = self.component.as_ref() else {
            self.preview = None;
            return;
        };
        let canvas = component.canvas().borrow();
        let size = [canvas.width() as usize, canvas.height() as usize];
        let image = egui::ColorImage::from_rgb(size, canvas.pixels());
        self.preview = Some(ctx.load_texture(
            "canvas_preview",
            image,
            egui::TextureOptions::NEAREST,
        ));
    }

    fn show_chart_area(&mut self, ui: &mut egui::Ui, progress: f64) {
        let options = self
            .component
            .as_ref()
            .and_then(|c| c.chart())
            .map(|chart| chart.options().clone());

        let Some(options) = options else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new(&options.dataset.label).size(16.0).strong());
            ui.add_space(5.0);

            let chart_height = (ui.available_height() * 0.6).max(240.0);
            ChartPlotter::draw_bar_chart(ui, &options, progress, chart_height);

            ui.add_space(10.0);
            egui::CollapsingHeader::new("Rendered surface")
                .default_open(true)
                .show(ui, |ui| {
                    if let Some(texture) = &self.preview {
                        ui.image((texture.id(), texture.size_vec2()));
                    }
                });
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.surface_dirty {
            self.refresh_preview(ctx);
            self.surface_dirty = false;
        }

        // Entrance animation progress of the live chart
        let progress = match (self.component.as_ref().and_then(|c| c.chart()), self.rendered_at) {
            (Some(chart), Some(started)) => chart
                .options()
                .animation
                .progress_at(started.elapsed().as_millis() as u64),
            _ => 1.0,
        };
        if progress < 1.0 {
            ctx.request_repaint();
        }

        let has_data = self.data.is_some();
        let has_chart = self
            .component
            .as_ref()
            .map(|c| c.chart().is_some())
            .unwrap_or(false);

        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, has_data, has_chart);

                    match action {
                        ControlPanelAction::BrowseJson => self.handle_browse_json(),
                        ControlPanelAction::Render => self.handle_render(),
                        ControlPanelAction::Update => self.handle_update(),
                        ControlPanelAction::Destroy => self.handle_destroy(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_chart_area(ui, progress);
        });
    }
}

fn load_chart_data(path: &Path) -> anyhow::Result<ChartData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let data = ChartData::from_json(&json)
        .with_context(|| format!("parsing {}", path.display()))?;
    anyhow::ensure!(!data.is_empty(), "no renderable bars in the file");
    Ok(data)
}

fn export_png(canvas: &Canvas, path: &Path) -> anyhow::Result<()> {
    let image = image::RgbImage::from_raw(
        canvas.width(),
        canvas.height(),
        canvas.pixels().to_vec(),
    )
    .context("canvas buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
