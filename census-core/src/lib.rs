//! Core types for the household census search.
//!
//! Everything in this crate is pure and target-independent so the web app
//! and the CLI share one implementation:
//! - `catalog`: years, cities and districts embedded from `fixtures/districts.csv`
//! - `normalize`: legacy glyph folding for region names
//! - `selection`: the cascading year/city/district state machine
//! - `route`: `/{year}/{city}/{district}` path parsing and formatting
//! - `query`: the normalized key that addresses the statistics API
//! - `response` / `fetch`: API payloads, fetch status and superseded-result handling
//! - `aggregate` / `chart`: row sums, percentages and chart options
//! - `view` / `debounce`: result view controller and timer bookkeeping
//! - `report`: the whole pipeline from route + fetch result to chart data
//! - `client` (feature `api`): native HTTP client

pub mod aggregate;
pub mod catalog;
pub mod chart;
#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod query;
pub mod report;
pub mod response;
pub mod route;
pub mod selection;
pub mod view;
