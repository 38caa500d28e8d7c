mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::LevelFilter;
use scout_core::KeywordSet;
use scout_engine::{
    BrowserFetcher, BrowserSettings, DirectFetcher, DiscoveryPipeline, FetchError, FetchSettings,
    ListingSelectors, PageFetcher,
};
use scout_logging::{scout_error, LogDestination};

use crate::config::{Backend, ScoutConfig};
use crate::report::report_lines;

fn main() -> ExitCode {
    scout_logging::initialize(LogDestination::Terminal, LevelFilter::Info);

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            scout_error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let selectors: ListingSelectors = config.selectors.clone().into();
    let fetcher = match build_fetcher(&config, &selectors) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            scout_error!("could not initialize the fetch backend: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let keywords = Arc::new(KeywordSet::new(&config.keywords));
    let pipeline = DiscoveryPipeline::new(fetcher, selectors, keywords, config.pacing());

    println!("Начинается парсинг статей...\n");
    let run_report = scout_engine::run_blocking(pipeline, &config.listing_url);

    for line in report_lines(&run_report) {
        println!("{line}");
    }

    // Zero matches, and even a failed listing fetch, are still a clean exit.
    ExitCode::SUCCESS
}

/// Optional argv[1] names a RON config file; no argument, or a path that
/// does not exist, means defaults. A malformed file is a startup error.
fn load_config() -> Result<ScoutConfig, config::ConfigError> {
    match std::env::args_os().nth(1) {
        Some(path) => ScoutConfig::load_or_default(&PathBuf::from(path)),
        None => Ok(ScoutConfig::default()),
    }
}

fn build_fetcher(
    config: &ScoutConfig,
    selectors: &ListingSelectors,
) -> Result<Arc<dyn PageFetcher>, FetchError> {
    match config.backend {
        Backend::Direct => {
            let settings = FetchSettings {
                request_timeout: config.request_timeout(),
                ..FetchSettings::default()
            };
            Ok(Arc::new(DirectFetcher::new(settings)?))
        }
        Backend::Browser => {
            let settings = BrowserSettings {
                wait_timeout: config.browser_wait(),
                content_marker: selectors.content_marker(),
            };
            Ok(Arc::new(BrowserFetcher::new(settings)?))
        }
    }
}
