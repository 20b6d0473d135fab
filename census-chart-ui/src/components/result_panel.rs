//! "搜尋結果" section: empty message, error, or the two charts.

use super::{ChartContainer, ErrorDisplay};
use census_core::chart::{COLUMN_TITLE, PIE_TITLE};
use census_core::response::MESSAGE_NO_DATA;
use census_core::view::ResultView;
use dioxus::prelude::*;

/// Scroll target wrapping the result section.
pub const RESULT_ANCHOR_ID: &str = "census-result";
pub const COLUMN_CHART_ID: &str = "census-column-chart";
pub const PIE_CHART_ID: &str = "census-pie-chart";

#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    pub view: ResultView,
    /// Heading above the charts, e.g. `111年 臺北市 大安區`
    #[props(default = String::new())]
    pub title: String,
    #[props(default)]
    pub error: Option<String>,
}

/// Result region. `Idle` and `Loading` render only the divider; the page
/// shows its own full-screen loading view.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    rsx! {
        div {
            id: RESULT_ANCHOR_ID,
            div {
                style: "display: flex; align-items: center; padding-top: 36px; width: 100%;",
                hr { style: "flex-grow: 1; height: 1px; border: 0; background: #A5B1F9;" }
                div {
                    style: "width: 96px; margin: 0 10px; padding: 8px 12px; font-size: 13px; font-weight: 500; text-align: center; border: 1px solid #A5B1F9; border-radius: 9999px; color: #A5B1F9;",
                    p { style: "margin: 0;", "搜尋結果" }
                }
                hr { style: "flex-grow: 1; height: 1px; border: 0; background: #A5B1F9;" }
            }
            {match props.view {
                ResultView::Empty => rsx! {
                    div {
                        style: "padding: 64px 0; width: 100%;",
                        h2 { style: "font-size: 32px; font-weight: 400; text-align: center;", "{MESSAGE_NO_DATA}" }
                    }
                },
                ResultView::Chart => rsx! {
                    div {
                        style: "padding-top: 32px; width: 100%;",
                        h2 { style: "font-size: 32px; font-weight: 400; text-align: center;", "{props.title}" }
                        ChartContainer { id: COLUMN_CHART_ID.to_string(), label: COLUMN_TITLE.to_string() }
                        ChartContainer { id: PIE_CHART_ID.to_string(), label: PIE_TITLE.to_string() }
                    }
                },
                ResultView::Error => rsx! {
                    ErrorDisplay { message: props.error.clone().unwrap_or_default() }
                },
                ResultView::Idle | ResultView::Loading => rsx! {},
            }}
        }
    }
}
