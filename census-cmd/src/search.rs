//! One-shot search against the statistics API.

use census_core::catalog::Catalog;
use census_core::client::CensusClient;
use census_core::config::Config;
use census_core::fetch::{FetchResult, FetchStatus};
use census_core::report::SearchReport;
use census_core::response::MESSAGE_NO_DATA;
use census_core::route::RouteParams;
use census_core::selection::Selection;
use census_core::view::ResultView;
use log::info;

/// Validate the parameters against the catalog, fetch, and print the report.
pub async fn run_search(
    year: &str,
    city: &str,
    district: &str,
    endpoint: &str,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = Catalog::global();
    let route = validated_route(catalog, year, city, district)?;
    let Some(key) = route.query_key() else {
        anyhow::bail!("incomplete search parameters");
    };

    let config = Config::with_endpoint(endpoint);
    let client = CensusClient::new(&config)?;
    info!("Searching {:?} via {}", key, config.endpoint);

    let result = match client.fetch(&key).await {
        Ok(result) => result,
        Err(e) => FetchResult::failed(e),
    };
    let report = SearchReport::build(&route, &result, false);

    if let FetchStatus::Error(e) = &result.status {
        anyhow::bail!("search failed: {}", e);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}

/// Run the parameters through the same selection rules as the web form.
pub fn validated_route(
    catalog: &Catalog,
    year: &str,
    city: &str,
    district: &str,
) -> anyhow::Result<RouteParams> {
    // Unknown years fall back to the default in the form, so check first
    if !catalog.is_year(year.trim()) {
        anyhow::bail!(
            "unknown year {:?}; expected one of {}",
            year,
            catalog.years().join(", ")
        );
    }
    let selection = Selection::from_route(&RouteParams::new(year.trim(), city, district), catalog);
    let Some(chosen_city) = selection.city() else {
        anyhow::bail!("unknown city {:?}; run `census-cli catalog` for the list", city);
    };
    if selection.district().is_none() {
        anyhow::bail!(
            "{:?} is not a district of {}; run `census-cli catalog --city {}`",
            district,
            chosen_city,
            chosen_city
        );
    }
    selection
        .submit(catalog)
        .ok_or_else(|| anyhow::anyhow!("selection is not submittable"))
}

fn format_count(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        "-".to_string()
    }
}

fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", value)
    } else {
        "-".to_string()
    }
}

/// Plain-text summary: title, population by sex per household type, shares.
pub fn format_report(report: &SearchReport) -> String {
    let title = report.title.clone().unwrap_or_default();
    if report.view == ResultView::Empty {
        return format!("{}\n{}", title, MESSAGE_NO_DATA);
    }

    let agg = &report.aggregate;
    let share = &report.share;
    let mut lines = vec![title];
    lines.push(format!(
        "共同生活  男 {}  女 {}  戶數 {}",
        format_count(agg.household_ordinary_m),
        format_count(agg.household_ordinary_f),
        format_count(agg.household_ordinary_total),
    ));
    lines.push(format!(
        "獨立生活  男 {}  女 {}  戶數 {}",
        format_count(agg.household_single_m),
        format_count(agg.household_single_f),
        format_count(agg.household_single_total),
    ));
    lines.push(format!(
        "戶數比例  共同生活 {}  獨立生活 {}",
        format_percent(share.ordinary_pct),
        format_percent(share.single_pct),
    ));
    lines.join("\n")
}

/// JSON document with the title, totals, shares and both chart options.
pub fn report_json(report: &SearchReport) -> serde_json::Value {
    serde_json::json!({
        "title": report.title,
        "empty": report.view == ResultView::Empty,
        "aggregate": report.aggregate,
        "share": report.share,
        "charts": report.chart_options(),
    })
}
