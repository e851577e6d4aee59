mod platform;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use verscout_client::{ApiSettings, DEFAULT_ENDPOINT};

use platform::logging::{self, LogDestination};

#[derive(Debug, Parser)]
#[command(
    name = "verscout",
    version,
    about = "Terminal viewer for version records scraped by a remote extraction service"
)]
struct Cli {
    /// Extraction service endpoint answering scrape requests.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Optional request timeout in seconds. Without it a hung service keeps
    /// the attempt pending indefinitely.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogArg::File)]
    log: LogArg,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LogArg {
    File,
    Terminal,
    Both,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::initialize(match cli.log {
        LogArg::File => LogDestination::File,
        LogArg::Terminal => LogDestination::Terminal,
        LogArg::Both => LogDestination::Both,
    });

    let settings = ApiSettings {
        endpoint: cli.endpoint,
        request_timeout: cli.timeout_secs.map(Duration::from_secs),
        ..ApiSettings::default()
    };

    platform::run_app(settings)
}
