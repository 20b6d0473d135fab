//! Census CLI - query household census statistics from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "census-cli",
    version,
    about = "Household census statistics by year, city and district"
)]
struct Cli {
    #[command(subcommand)]
    command: census_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    census_cmd::run(cli.command).await
}
