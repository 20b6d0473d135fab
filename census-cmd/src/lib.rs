//! Command implementations for the census CLI.
//!
//! `search` runs the same fetch and aggregation pipeline as the web app and
//! prints the totals; `catalog` lists the years, cities and districts that
//! can be searched.

use clap::Subcommand;

pub mod catalog;
pub mod search;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch household statistics for one district
    Search {
        /// Republic-era year, e.g. 111
        #[arg(short, long, default_value = census_core::catalog::DEFAULT_YEAR)]
        year: String,

        /// City or county name (台 and 臺 are both accepted)
        #[arg(short, long)]
        city: String,

        /// District name within the city
        #[arg(short, long)]
        district: String,

        /// Statistics API endpoint
        #[arg(long, env = census_core::config::ENDPOINT_ENV, default_value = census_core::config::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Print totals, shares and chart options as JSON
        #[arg(long)]
        json: bool,
    },

    /// List searchable years, cities, or the districts of one city
    Catalog {
        /// Only list the districts of this city
        #[arg(short, long)]
        city: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Search {
            year,
            city,
            district,
            endpoint,
            json,
        } => search::run_search(&year, &city, &district, &endpoint, json).await,
        Command::Catalog { city, json } => catalog::run_catalog(city.as_deref(), json),
    }
}
