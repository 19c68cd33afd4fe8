use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};

use diary_sync::{Config, FailurePolicy};

#[derive(Parser)]
#[command(
    name = "diary-sync",
    about = "Scrape a Letterboxd diary and add TMDb posters",
    version
)]
struct Cli {
    /// Letterboxd username whose diary is scraped.
    #[arg(short, long, default_value = "vkworkofficial")]
    username: String,

    /// Output file. Defaults to public/<username>-movies.json.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// TMDb API key.
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Pause before every request, in milliseconds.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,

    /// Keep films whose poster lookup failed instead of aborting the run.
    #[arg(long)]
    keep_going: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.username, self.api_key)
            .with_request_delay(Duration::from_millis(self.delay_ms));

        if let Some(out) = self.out {
            config = config.with_output(out);
        }
        if self.keep_going {
            config = config.with_failure_policy(FailurePolicy::Isolate);
        }

        config
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();

    match diary_sync::run(&config).await {
        Ok(report) => {
            info!(
                "Synced {} films ({} with posters, {} without, {} failed) to {}",
                report.total,
                report.with_poster,
                report.without_poster,
                report.failed,
                report.path.display()
            );
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
