//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use census_core::catalog::Catalog;
use census_core::config::Config;
use census_core::debounce::Debouncer;
use census_core::fetch::{FetchSlot, FetchStatus, ResultCache};
use census_core::route::{Route, RouteParams};
use census_core::selection::Selection;
use census_core::view::{submit_control, SubmitControl};
use dioxus::prelude::*;

/// Shared application state for the census search.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Endpoint and UI delays
    pub config: Signal<Config>,
    /// Year/city/district being edited
    pub selection: Signal<Selection>,
    /// Parameters of the current location path
    pub route: Signal<RouteParams>,
    /// Result for the current route's query key
    pub fetch: Signal<FetchSlot>,
    /// Completed results by query key
    pub cache: Signal<ResultCache>,
    /// True once a request has been in flight for the loading debounce
    pub loading: Signal<Debouncer<bool>>,
    /// False from request start until the control debounce after completion
    pub controls: Signal<Debouncer<bool>>,
    /// Cosmetic "submission in progress" flag
    pub submitting: Signal<Debouncer<bool>>,
}

impl AppState {
    /// Create the state for the page at `path`.
    pub fn from_path(path: &str, config: Config) -> Self {
        let route = match Route::parse(path) {
            Route::Search(params) => params,
            Route::Redirect => RouteParams::default(),
        };
        Self {
            config: Signal::new(config),
            selection: Signal::new(Selection::from_route(&route, Catalog::global())),
            route: Signal::new(route),
            fetch: Signal::new(FetchSlot::default()),
            cache: Signal::new(ResultCache::default()),
            loading: Signal::new(Debouncer::new(false)),
            controls: Signal::new(Debouncer::new(true)),
            submitting: Signal::new(Debouncer::new(false)),
        }
    }

    /// Follow a back/forward navigation: both the route and the selectors move.
    pub fn navigate(&mut self, params: RouteParams) {
        self.selection
            .set(Selection::from_route(&params, Catalog::global()));
        self.route.set(params);
    }

    pub fn submit_control(&self) -> SubmitControl {
        let submittable = self.selection.read().is_submittable(Catalog::global());
        let fetch = self.fetch.read();
        submit_control(
            submittable,
            *self.submitting.read().value(),
            *self.controls.read().value(),
            &fetch.result().status,
        )
    }

    /// User-facing message for the error view.
    pub fn error_message(&self) -> Option<String> {
        match &self.fetch.read().result().status {
            FetchStatus::Error(e) => Some(e.to_string()),
            _ => None,
        }
    }
}
