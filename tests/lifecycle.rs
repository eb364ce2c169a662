//! Lifecycle tests for the distribution chart component: render replaces,
//! update mutates in place, destroy resets, and the entry point's null cases.

use probchart::canvas::{Canvas, CanvasRegistry};
use probchart::chart::{initialize_chart, DISTRIBUTION_CANVAS_ID};
use probchart::{ChartData, DistributionChart};

fn registry_with(id: &str, width: u32, height: u32) -> CanvasRegistry {
    let mut registry = CanvasRegistry::new();
    registry.insert(Canvas::new(id, width, height));
    registry
}

fn sample_data() -> ChartData {
    ChartData {
        labels: vec!["A".into(), "B".into()],
        values: vec![10.1234, 20.0],
        x_values: vec![],
    }
}

#[test]
fn constructor_fails_for_unknown_canvas() {
    let registry = registry_with("chart", 200, 100);
    let err = DistributionChart::new(&registry, "nope").unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn constructor_succeeds_and_permits_immediate_render() {
    let registry = registry_with("chart", 200, 100);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();
    assert!(component.chart().is_none());

    component.render(&sample_data());
    assert!(component.chart().is_some());
}

#[test]
fn render_configures_dataset_in_order() {
    let registry = registry_with("chart", 200, 100);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();
    component.render(&sample_data());

    let options = component.chart().unwrap().options();
    assert_eq!(options.dataset.label, "Probabilidad (%)");
    assert_eq!(options.dataset.labels, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(options.dataset.values, vec![10.1234, 20.0]);
}

#[test]
fn render_twice_replaces_the_chart() {
    let registry = registry_with("chart", 200, 100);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();

    component.render(&sample_data());
    let first_id = component.chart().unwrap().id();
    component.render(&sample_data());
    let second_id = component.chart().unwrap().id();

    // the first object is released before the second exists
    assert_ne!(first_id, second_id);
}

#[test]
fn update_before_render_acts_as_render() {
    let registry = registry_with("chart", 200, 100);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();

    component.update(&sample_data());

    let options = component.chart().unwrap().options();
    assert_eq!(options.dataset.labels, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(options.dataset.values, vec![10.1234, 20.0]);
}

#[test]
fn update_mutates_in_place_preserving_identity() {
    let registry = registry_with("chart", 200, 100);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();

    component.render(&sample_data());
    let id = component.chart().unwrap().id();

    let next = ChartData {
        labels: vec!["C".into()],
        values: vec![99.5],
        x_values: vec![],
    };
    component.update(&next);

    let chart = component.chart().unwrap();
    assert_eq!(chart.id(), id);
    assert_eq!(chart.options().dataset.labels, vec!["C".to_string()]);
    assert_eq!(chart.options().dataset.values, vec![99.5]);
}

#[test]
fn destroy_then_update_behaves_as_fresh_render() {
    let registry = registry_with("chart", 200, 100);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();

    component.render(&sample_data());
    let first_id = component.chart().unwrap().id();

    component.destroy();
    assert!(component.chart().is_none());
    assert!(registry.get("chart").unwrap().borrow().is_blank());

    component.update(&sample_data());
    let chart = component.chart().unwrap();
    assert_ne!(chart.id(), first_id);
    assert_eq!(chart.options().dataset.values, vec![10.1234, 20.0]);
}

#[test]
fn render_without_drawing_context_degrades_to_blank() {
    // zero-sized surface: context acquisition fails
    let registry = registry_with("chart", 0, 0);
    let mut component = DistributionChart::new(&registry, "chart").unwrap();

    component.render(&sample_data());
    assert!(component.chart().is_none());

    // and a prior chart is still released first
    component.update(&sample_data());
    assert!(component.chart().is_none());
}

#[test]
fn initialize_chart_returns_none_without_data() {
    let registry = registry_with(DISTRIBUTION_CANVAS_ID, 200, 100);
    assert!(initialize_chart(&registry, None).is_none());
}

#[test]
fn initialize_chart_returns_none_without_fixed_canvas() {
    let registry = registry_with("someOtherChart", 200, 100);
    let data = sample_data();
    assert!(initialize_chart(&registry, Some(&data)).is_none());
}

#[test]
fn initialize_chart_renders_and_returns_the_component() {
    let registry = registry_with(DISTRIBUTION_CANVAS_ID, 200, 100);
    let data = sample_data();

    let component = initialize_chart(&registry, Some(&data)).unwrap();
    let chart = component.chart().unwrap();
    assert_eq!(chart.options().dataset.labels, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn tooltip_formats_the_documented_example() {
    let registry = registry_with(DISTRIBUTION_CANVAS_ID, 200, 100);
    let data = sample_data();

    let component = initialize_chart(&registry, Some(&data)).unwrap();
    let options = component.chart().unwrap().options();
    assert_eq!(
        options.tooltip.format(options.dataset.values[0]),
        "Probabilidad: 10.1234%"
    );
}
