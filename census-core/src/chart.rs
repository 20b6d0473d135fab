//! Declarative chart configurations for the external renderer.
//!
//! The typed configs are the stable contract; `to_options` turns them into
//! Highcharts options JSON. Non-finite values become `null` points, which the
//! renderer skips.

use crate::aggregate::HouseholdAggregate;
use serde::Serialize;
use serde_json::json;

pub const SHARED_LIVING: &str = "共同生活";
pub const INDEPENDENT_LIVING: &str = "獨立生活";

pub const MALE_COLOR: &str = "#7960AD";
pub const FEMALE_COLOR: &str = "#AD8AF8";
pub const ORDINARY_SLICE_COLOR: &str = "#656EAD";
pub const SINGLE_SLICE_COLOR: &str = "#A5B1F9";

/// Chart height in pixels, and the reduced height below `COMPACT_MAX_WIDTH`.
pub const CHART_HEIGHT: u32 = 650;
pub const COMPACT_CHART_HEIGHT: u32 = 400;
pub const COMPACT_MAX_WIDTH: u32 = 500;

pub const COLUMN_TITLE: &str = "人口數統計";
pub const PIE_TITLE: &str = "戶數統計";

const TITLE_FONT: &str = "Noto Sans TC";

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSeries {
    pub name: &'static str,
    pub color: &'static str,
    /// One value per category.
    pub data: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnChartConfig {
    pub title: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub categories: [&'static str; 2],
    pub series: Vec<ColumnSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub color: &'static str,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartConfig {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

/// Population by sex for shared vs independent living.
pub fn build_column_chart_config(aggregate: &HouseholdAggregate) -> ColumnChartConfig {
    ColumnChartConfig {
        title: COLUMN_TITLE,
        x_axis_title: "型態",
        y_axis_title: "數量",
        categories: [SHARED_LIVING, INDEPENDENT_LIVING],
        series: vec![
            ColumnSeries {
                name: "男",
                color: MALE_COLOR,
                data: vec![
                    finite(aggregate.household_ordinary_m),
                    finite(aggregate.household_single_m),
                ],
            },
            ColumnSeries {
                name: "女",
                color: FEMALE_COLOR,
                data: vec![
                    finite(aggregate.household_ordinary_f),
                    finite(aggregate.household_single_f),
                ],
            },
        ],
    }
}

/// Household share as a two-slice pie.
pub fn build_pie_chart_config(single_pct: f64, ordinary_pct: f64) -> PieChartConfig {
    PieChartConfig {
        title: PIE_TITLE,
        slices: vec![
            PieSlice {
                name: SHARED_LIVING,
                color: ORDINARY_SLICE_COLOR,
                y: finite(ordinary_pct),
            },
            PieSlice {
                name: INDEPENDENT_LIVING,
                color: SINGLE_SLICE_COLOR,
                y: finite(single_pct),
            },
        ],
    }
}

fn common_options(title: &str) -> serde_json::Value {
    json!({
        "accessibility": { "enabled": false },
        "credits": { "enabled": false },
        "chart": { "height": CHART_HEIGHT, "backgroundColor": "transparent" },
        "title": {
            "text": title,
            "style": { "fontSize": "32px", "fontFamily": TITLE_FONT, "fontWeight": "400" },
        },
        "responsive": {
            "rules": [{
                "condition": { "maxWidth": COMPACT_MAX_WIDTH },
                "chartOptions": { "chart": { "height": COMPACT_CHART_HEIGHT } },
            }],
        },
    })
}

fn merge(base: &mut serde_json::Value, extra: serde_json::Value) {
    if let (Some(base), serde_json::Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
}

impl ColumnChartConfig {
    pub fn to_options(&self) -> serde_json::Value {
        let series: Vec<serde_json::Value> = self
            .series
            .iter()
            .map(|s| json!({ "name": s.name, "type": "column", "data": s.data, "color": s.color }))
            .collect();

        let mut options = common_options(self.title);
        merge(
            &mut options,
            json!({
                "tooltip": {
                    "headerFormat": "<span style=\"font-size:10px\">{point.key}</span><table>",
                    "pointFormat": "<tr><td style=\"color:{series.color};padding:0\">{series.name}: </td><td><b>{point.y:,.f}</b></td></tr>",
                    "footerFormat": "</table>",
                    "shared": true,
                    "useHTML": true,
                },
                "xAxis": {
                    "categories": self.categories,
                    "crosshair": true,
                    "title": { "text": self.x_axis_title, "textAlign": "center", "x": -20, "y": -10, "style": { "fontSize": "20px" } },
                },
                "yAxis": {
                    "min": 0,
                    "title": {
                        "text": self.y_axis_title,
                        "align": "high",
                        "textAlign": "left",
                        "rotation": 0,
                        "offset": 0,
                        "margin": 0,
                        "y": -24,
                        "x": -50,
                        "style": { "fontSize": "20px" },
                    },
                },
                "series": series,
            }),
        );
        options
    }
}

impl PieChartConfig {
    pub fn to_options(&self) -> serde_json::Value {
        let data: Vec<serde_json::Value> = self
            .slices
            .iter()
            .map(|s| json!({ "name": s.name, "y": s.y, "color": s.color }))
            .collect();

        let mut options = common_options(self.title);
        merge(
            &mut options,
            json!({
                "tooltip": { "pointFormat": "<b>{point.percentage:.1f}%</b>" },
                "plotOptions": {
                    "pie": {
                        "allowPointSelect": true,
                        "cursor": "pointer",
                        "dataLabels": { "enabled": true, "format": "{point.percentage:.1f} %" },
                        "showInLegend": true,
                    },
                },
                "series": [{ "type": "pie", "data": data }],
            }),
        );
        options
    }
}
