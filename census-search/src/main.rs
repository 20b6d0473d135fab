//! Household census search
//!
//! Pick a year, city and district, submit, and see population by sex and
//! household type as a column chart plus the household share as a pie chart.
//!
//! Data flow:
//! 1. The location path `/{year}/{city}/{district}` seeds the route and the selectors.
//! 2. Submitting pushes a new path; the route is the only fetch trigger.
//! 3. The route's normalized query key is fetched from the statistics API
//!    (or served from the per-session cache). Responses and timeouts for a
//!    request that is no longer current are dropped.
//! 4. `SearchReport` derives the view state and chart options; Highcharts
//!    renders them through the JS bridge.

use census_chart_ui::components::{
    LoadingSpinner, PageLayout, ResultPanel, SearchForm, COLUMN_CHART_ID, PIE_CHART_ID,
    RESULT_ANCHOR_ID,
};
use census_chart_ui::js_bridge;
use census_chart_ui::state::AppState;
use census_core::catalog::Catalog;
use census_core::config::Config;
use census_core::fetch::FetchResult;
use census_core::report::SearchReport;
use census_core::response::classify_body;
use census_core::route::{Route, RouteParams};
use census_core::view::{ResultView, ScrollTrigger};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("census-search-root"))
        .launch(App);
}

/// Point the fetch slot at `route`'s key and start whatever work that needs.
///
/// Reads use `peek` so the calling effect only subscribes to the route.
fn start_fetch(mut state: AppState, route: &RouteParams) {
    let Some(key) = route.query_key() else {
        state.fetch.write().begin(None);
        state.loading.write().reset(false);
        state.controls.write().reset(true);
        return;
    };

    let cached = state.cache.peek().get(&key).cloned();
    if let Some(result) = cached {
        log::info!("serving {:?} from cache", key);
        state.fetch.write().show(key, result);
        state.loading.write().reset(false);
        state.controls.write().reset(true);
        return;
    }

    let config = state.config.peek().clone();
    let timings = config.timings;
    let url = key.url(&config.endpoint);
    log::info!("fetching {}", url);

    let ticket = state.fetch.write().begin(Some(key.clone()));
    state.controls.write().reset(false);
    state.loading.write().reset(false);
    let loading_ticket = state.loading.write().schedule(true);

    // Loading view appears only for slow requests
    spawn(async move {
        js_bridge::sleep(timings.loading_debounce).await;
        state.loading.write().fire(loading_ticket);
    });

    spawn(async move {
        js_bridge::sleep(timings.fetch_timeout).await;
        let timeout_ms = u64::try_from(timings.fetch_timeout.as_millis()).unwrap_or(u64::MAX);
        if state.fetch.write().expire(ticket, timeout_ms) {
            settle(state, timings.control_debounce).await;
        }
    });

    spawn(async move {
        let result = match js_bridge::fetch_text(&url).await {
            Ok(body) => classify_body(&body),
            Err(e) => {
                log::warn!("fetch of {} failed: {}", url, e);
                FetchResult::failed(e)
            }
        };
        state.cache.write().insert(key.clone(), result.clone());
        if state.fetch.write().accept(ticket, result) {
            settle(state, timings.control_debounce).await;
        }
    });
}

/// A request finished: drop the loading view now, re-enable the submit
/// button after the control debounce.
async fn settle(mut state: AppState, control_debounce: std::time::Duration) {
    state.loading.write().reset(false);
    let ticket = state.controls.write().schedule(true);
    js_bridge::sleep(control_debounce).await;
    state.controls.write().fire(ticket);
}

#[component]
fn App() -> Element {
    let mut state =
        use_context_provider(|| AppState::from_path(&js_bridge::current_path(), Config::from_build_env()));
    let mut scroll = use_signal(ScrollTrigger::default);

    // ─── Effect 1: one-time browser setup ───
    use_effect(move || {
        js_bridge::init_charts();

        if Route::parse(&js_bridge::current_path()) == Route::Redirect {
            js_bridge::replace_path("/");
        }

        js_bridge::on_popstate(move |path| match Route::parse(&path) {
            Route::Search(params) => state.navigate(params),
            Route::Redirect => {
                js_bridge::replace_path("/");
                state.navigate(RouteParams::default());
            }
        });
    });

    // ─── Effect 2: the route drives fetching ───
    use_effect(move || {
        let route = state.route.read().clone();
        start_fetch(state, &route);
    });

    let report = use_memo(move || {
        let route = state.route.read().clone();
        let fetch = state.fetch.read();
        SearchReport::build(&route, fetch.result(), *state.loading.read().value())
    });

    // ─── Effect 3: render charts when the report changes ───
    use_effect(move || {
        let report = report.read();
        if report.view == ResultView::Chart {
            js_bridge::render_chart(COLUMN_CHART_ID, &report.column.to_options());
            js_bridge::render_chart(PIE_CHART_ID, &report.pie.to_options());
        } else {
            js_bridge::destroy_chart(COLUMN_CHART_ID);
            js_bridge::destroy_chart(PIE_CHART_ID);
        }
    });

    let view_memo = use_memo(move || report.read().view);

    // ─── Effect 4: scroll to results ───
    use_effect(move || {
        let view = view_memo();
        let submitting = *state.submitting.read().value();
        if scroll.write().observe(view, submitting) {
            js_bridge::scroll_into_view(RESULT_ANCHOR_ID);
        }
    });

    let on_submit = move |_: ()| {
        let Some(route) = state.selection.peek().submit(Catalog::global()) else {
            return;
        };
        let delay = state.config.peek().timings.presentation_delay;
        js_bridge::push_path(&route.to_path());
        state.route.set(route);

        state.submitting.write().reset(true);
        let ticket = state.submitting.write().schedule(false);
        spawn(async move {
            js_bridge::sleep(delay).await;
            state.submitting.write().fire(ticket);
        });
    };

    let view = view_memo();
    let title = report.read().title.clone().unwrap_or_default();

    rsx! {
        PageLayout {
            div {
                style: "width: 100%; padding: 0 24px; box-sizing: border-box;",
                if view == ResultView::Loading {
                    div {
                        style: "display: flex; justify-content: center; align-items: center; width: 100%; height: 95vh;",
                        LoadingSpinner { label: "載入中...".to_string() }
                    }
                } else {
                    div {
                        style: "position: relative; padding: 16px 0; width: 100%;",
                        SearchForm { on_submit }
                        ResultPanel {
                            view,
                            title,
                            error: state.error_message(),
                        }
                    }
                }
            }
        }
    }
}
