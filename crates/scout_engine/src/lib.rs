//! Scout engine: fetch backends, HTML extraction and the discovery pipeline.
mod browser;
mod decode;
mod extract;
mod fetch;
mod pipeline;
mod runner;
mod types;

pub use browser::{BrowserFetcher, BrowserSettings};
pub use decode::decode_markup;
pub use extract::{extract_body_text, extract_previews, ExtractedListing, ListingSelectors};
pub use fetch::{DirectFetcher, FetchSettings, PageFetcher};
pub use pipeline::DiscoveryPipeline;
pub use runner::run_blocking;
pub use types::{FailureKind, FetchError};
