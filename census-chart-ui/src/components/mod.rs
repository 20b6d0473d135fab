//! Reusable Dioxus RSX components for the census search.

mod chart_container;
mod error_display;
mod layout;
mod loading_spinner;
mod result_panel;
mod search_form;
mod selector;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use layout::{PageHeader, PageLayout};
pub use loading_spinner::{LoadingSpinner, SpinnerSize};
pub use result_panel::{ResultPanel, COLUMN_CHART_ID, PIE_CHART_ID, RESULT_ANCHOR_ID};
pub use search_form::SearchForm;
pub use selector::{Selector, SelectorSize};
