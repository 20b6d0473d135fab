//! Typed wrappers around JS interop.
//!
//! Chart rendering goes through `assets/js/census-charts.js`, evaluated as
//! globals once Highcharts (loaded by `index.html`) is available. Fetching,
//! timers, history and scrolling use `web-sys` directly.

use census_core::error::FetchError;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed the chart JS at compile time
static CENSUS_CHARTS_JS: &str = include_str!("../assets/js/census-charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Census JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-Highcharts polling loop.
///
/// The script is evaluated at global scope via indirect eval once Highcharts
/// is loaded, and its functions are promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!("window.__censusChartScript = {};", js_string(CENSUS_CHARTS_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__censusChartsReady || window.__censusChartsPolling) return;
            window.__censusChartsPolling = true;
            var waitForHighcharts = setInterval(function() {
                if (typeof Highcharts !== 'undefined') {
                    clearInterval(waitForHighcharts);
                    (0, eval)(window.__censusChartScript);
                    delete window.__censusChartScript;
                    if (typeof renderCensusChart !== 'undefined') window.renderCensusChart = renderCensusChart;
                    if (typeof destroyCensusChart !== 'undefined') window.destroyCensusChart = destroyCensusChart;
                    window.__censusChartsReady = true;
                    console.log('Census charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render Highcharts `options` into the element with `container_id`.
///
/// Polls until the chart script is ready and the container exists.
pub fn render_chart(container_id: &str, options: &serde_json::Value) {
    let id = js_string(container_id);
    let options_json = js_string(&options.to_string());
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__censusChartsReady &&
                    typeof window.renderCensusChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderCensusChart({id}, {options_json});
                    }} catch(e) {{ console.error('[Census] renderCensusChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart rendered in the given container, if any.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyCensusChart) window.destroyCensusChart({});",
        js_string(container_id)
    ));
}

fn js_error(value: JsValue) -> FetchError {
    FetchError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// GET `url` and return the body text.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Transport("no window".to_string()))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response_value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| FetchError::Malformed("response body is not text".to_string()))
}

/// Resolve after `duration` using `setTimeout`.
pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Current location path with percent-encoding removed.
pub fn current_path() -> String {
    let raw = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    js_sys::decode_uri_component(&raw)
        .map(String::from)
        .unwrap_or(raw)
}

/// Percent-encode a decoded path; `/` separators are kept.
fn encode_path(path: &str) -> String {
    String::from(js_sys::encode_uri(path))
}

/// Add a history entry for `path`.
pub fn push_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&encode_path(path)));
    }
}

/// Replace the current history entry with `path`.
pub fn replace_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&encode_path(path)));
    }
}

/// Call `handler` with the decoded path on back/forward navigation.
pub fn on_popstate(mut handler: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(move || handler(current_path()));
    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    // Listener lives for the whole page
    closure.forget();
}

/// Smoothly scroll the element with `element_id` into view.
pub fn scroll_into_view(element_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
