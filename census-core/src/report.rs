//! The full pipeline from a route and its fetch result to chart data.

use crate::aggregate::{HouseholdAggregate, HouseholdShare};
use crate::chart::{build_column_chart_config, build_pie_chart_config, ColumnChartConfig, PieChartConfig};
use crate::fetch::FetchResult;
use crate::route::RouteParams;
use crate::view::{resolve, ResultView};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub view: ResultView,
    pub title: Option<String>,
    pub aggregate: HouseholdAggregate,
    pub share: HouseholdShare,
    pub column: ColumnChartConfig,
    pub pie: PieChartConfig,
}

impl SearchReport {
    pub fn build(route: &RouteParams, result: &FetchResult, loading_debounced: bool) -> Self {
        let aggregate = result.aggregate();
        let share = aggregate.share();
        Self {
            view: resolve(route.is_search_requested(), &result.status, loading_debounced),
            title: route.title(),
            aggregate,
            share,
            column: build_column_chart_config(&aggregate),
            pie: build_pie_chart_config(share.single_pct, share.ordinary_pct),
        }
    }

    /// Highcharts options for both charts, column first.
    pub fn chart_options(&self) -> serde_json::Value {
        serde_json::json!({
            "column": self.column.to_options(),
            "pie": self.pie.to_options(),
        })
    }
}
