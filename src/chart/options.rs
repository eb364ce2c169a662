//! Chart Options Module
//! Everything the component hands to the rendering engine, kept as plain
//! inspectable data: dataset, gradient fill, tooltip, axes, animation.

use crate::data::ChartData;

/// Bar fill and border color (RGB)
pub const TEAL: (u8, u8, u8) = (75, 192, 192);
/// Muted tick label color (RGB)
pub const MUTED: (u8, u8, u8) = (102, 102, 102);

pub const DATASET_LABEL: &str = "Probabilidad (%)";

/// One dataset of a vertical bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetOptions {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub border_color: (u8, u8, u8),
    pub border_width: u32,
}

/// Vertical gradient fill spanning the chart area, opaque at the top and
/// fading toward the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientFill {
    pub color: (u8, u8, u8),
    pub top_alpha: f64,
    pub bottom_alpha: f64,
}

impl GradientFill {
    /// Alpha at a vertical position, `frac` = 0.0 at the top of the chart
    /// area, 1.0 at the bottom.
    pub fn alpha_at(&self, frac: f64) -> f64 {
        let frac = frac.clamp(0.0, 1.0);
        self.top_alpha + (self.bottom_alpha - self.top_alpha) * frac
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOptions {
    pub prefix: String,
    pub decimals: usize,
    pub suffix: String,
}

impl TooltipOptions {
    /// Tooltip line for one bar, e.g. `Probabilidad: 10.1234%`.
    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, value, self.suffix
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XAxisOptions {
    /// Tick label slant in degrees.
    pub tick_rotation: f32,
    pub tick_color: (u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct YAxisOptions {
    pub begin_at_zero: bool,
    pub tick_suffix: String,
}

impl YAxisOptions {
    pub fn format_tick(&self, value: f64) -> String {
        format!("{}{}", value, self.tick_suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutQuart,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Entrance animation of the bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl AnimationOptions {
    /// Eased progress for a wall-clock offset since the chart was created.
    pub fn progress_at(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        self.easing.apply(t)
    }
}

/// Full configuration of one vertical bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub dataset: DatasetOptions,
    pub fill: GradientFill,
    pub tooltip: TooltipOptions,
    pub x_axis: XAxisOptions,
    pub y_axis: YAxisOptions,
    pub animation: AnimationOptions,
}

impl ChartOptions {
    /// The distribution bar chart configuration: teal gradient bars, raw
    /// values tooltip with four decimals, slanted muted category ticks, and
    /// a percent y axis starting at zero.
    pub fn bar(data: &ChartData) -> Self {
        Self {
            dataset: DatasetOptions {
                label: DATASET_LABEL.to_string(),
                labels: data.labels.clone(),
                values: data.values.clone(),
                border_color: TEAL,
                border_width: 1,
            },
            fill: GradientFill {
                color: TEAL,
                top_alpha: 1.0,
                bottom_alpha: 0.1,
            },
            tooltip: TooltipOptions {
                prefix: "Probabilidad: ".to_string(),
                decimals: 4,
                suffix: "%".to_string(),
            },
            x_axis: XAxisOptions {
                tick_rotation: 45.0,
                tick_color: MUTED,
            },
            y_axis: YAxisOptions {
                begin_at_zero: true,
                tick_suffix: "%".to_string(),
            },
            animation: AnimationOptions {
                duration_ms: 1000,
                easing: Easing::EaseOutQuart,
            },
        }
    }

    /// Upper bound of the y axis: a touch above the tallest bar so the top
    /// border is not clipped. Never below 1 so an empty dataset still builds
    /// a valid axis.
    pub fn y_max(&self) -> f64 {
        self.dataset
            .values
            .iter()
            .copied()
            .fold(0.0f64, f64::max)
            .max(1e-9)
            * 1.05
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_formats_four_decimals() {
        let opts = ChartOptions::bar(&ChartData::new(
            vec!["A".into(), "B".into()],
            vec![10.1234, 20.0],
        ));
        assert_eq!(opts.tooltip.format(10.1234), "Probabilidad: 10.1234%");
        assert_eq!(opts.tooltip.format(20.0), "Probabilidad: 20.0000%");
    }

    #[test]
    fn bar_options_carry_the_contract() {
        let data = ChartData::new(vec!["0".into()], vec![42.0]);
        let opts = ChartOptions::bar(&data);
        assert_eq!(opts.dataset.label, "Probabilidad (%)");
        assert_eq!(opts.dataset.border_width, 1);
        assert_eq!(opts.x_axis.tick_rotation, 45.0);
        assert!(opts.y_axis.begin_at_zero);
        assert_eq!(opts.y_axis.format_tick(25.0), "25%");
        assert_eq!(opts.animation.duration_ms, 1000);
        assert_eq!(opts.animation.easing, Easing::EaseOutQuart);
    }

    #[test]
    fn gradient_fades_top_to_bottom() {
        let fill = GradientFill {
            color: TEAL,
            top_alpha: 1.0,
            bottom_alpha: 0.1,
        };
        assert_eq!(fill.alpha_at(0.0), 1.0);
        assert!((fill.alpha_at(1.0) - 0.1).abs() < 1e-12);
        assert!(fill.alpha_at(0.5) < fill.alpha_at(0.0));
        assert!(fill.alpha_at(0.5) > fill.alpha_at(1.0));
    }

    #[test]
    fn ease_out_quart_front_loads_progress() {
        let anim = AnimationOptions {
            duration_ms: 1000,
            easing: Easing::EaseOutQuart,
        };
        assert_eq!(anim.progress_at(0), 0.0);
        assert!(anim.progress_at(500) > 0.9);
        assert_eq!(anim.progress_at(1000), 1.0);
        assert_eq!(anim.progress_at(5000), 1.0);
    }
}
