//! Shared Dioxus components and Highcharts bridge for the census search.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for browser APIs and the Highcharts renderer
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, result panel, layout)

pub mod components;
pub mod js_bridge;
pub mod state;
