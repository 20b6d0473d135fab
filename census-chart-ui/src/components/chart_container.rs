//! Mount point for one Highcharts chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to `js_bridge::render_chart`
    pub id: String,
    /// Accessible name of the chart region
    pub label: String,
    #[props(default = census_core::chart::CHART_HEIGHT)]
    pub min_height: u32,
}

/// Empty region Highcharts renders into. Its children belong to the renderer,
/// so the inner div is never given Dioxus content.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        section {
            role: "figure",
            aria_label: "{props.label}",
            style: "position: relative; width: 100%; padding-top: 32px; min-height: {props.min_height}px;",
            div { id: "{props.id}", style: "width: 100%;" }
        }
    }
}
