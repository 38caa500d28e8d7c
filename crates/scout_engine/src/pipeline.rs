use std::sync::Arc;
use std::time::Duration;

use scout_core::{KeywordSet, MatchResult, PreviewRecord, RunReport};
use scout_logging::{scout_debug, scout_error, scout_info};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::extract::{extract_body_text, extract_previews, ListingSelectors};
use crate::{FailureKind, FetchError, PageFetcher};

/// Drives one discovery run: listing fetch, preview extraction, keyword
/// screening and full-body verification, with a pacing delay after each
/// verified match to bound the request rate to the origin.
///
/// Processing is sequential in listing order; one verification is in
/// flight at a time, so the match sequence preserves listing order and a
/// single shared browser session never sees concurrent navigations.
pub struct DiscoveryPipeline {
    fetcher: Arc<dyn PageFetcher>,
    selectors: ListingSelectors,
    keywords: Arc<KeywordSet>,
    pacing: Duration,
    cancel: CancellationToken,
}

impl DiscoveryPipeline {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        selectors: ListingSelectors,
        keywords: Arc<KeywordSet>,
        pacing: Duration,
    ) -> Self {
        Self {
            fetcher,
            selectors,
            keywords,
            pacing,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that aborts the run: outstanding fetches are dropped, the
    /// pacing sleep is cut short, and matches found so far are returned.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the full discovery pass over one listing page.
    ///
    /// A failed listing fetch is the single point of total failure: it is
    /// logged and reported as zero candidates, never an error. Per-article
    /// verification failures are local; the candidate is dropped and the
    /// run continues.
    pub async fn run(&self, listing_url: &str) -> RunReport {
        let base_url = match Url::parse(listing_url) {
            Ok(url) => url,
            Err(err) => {
                scout_error!("listing url {} is invalid: {}", listing_url, err);
                return RunReport::empty();
            }
        };

        let markup = match self.fetch(listing_url).await {
            Ok(markup) => markup,
            Err(err) => {
                scout_error!("listing fetch failed for {}: {}", listing_url, err);
                return RunReport::empty();
            }
        };

        let listing = extract_previews(&markup, &self.selectors, &base_url);
        scout_info!(
            "found {} preview cards on {}",
            listing.cards_found,
            listing_url
        );

        let mut report = RunReport {
            candidates_discovered: listing.cards_found,
            matches: Vec::new(),
        };

        for record in &listing.records {
            if self.cancel.is_cancelled() {
                scout_info!("discovery run cancelled, reporting partial results");
                break;
            }

            if !self.keywords.matches(record.preview_text()) {
                continue;
            }
            scout_debug!("preview screening passed for {}", record.link());

            if self.verify(record).await {
                report.matches.push(MatchResult::from_record(record));
                self.pace().await;
            }
        }

        report
    }

    /// Full verification: fetch the article and re-apply the keyword
    /// filter against its body text. Fails closed: any fetch failure
    /// counts as a non-match, never as a run error.
    async fn verify(&self, record: &PreviewRecord) -> bool {
        let body = match self.fetch(record.link()).await {
            Ok(markup) => extract_body_text(&markup, &self.selectors.article_body),
            Err(err) => {
                scout_debug!("verification fetch failed for {}: {}", record.link(), err);
                String::new()
            }
        };
        self.keywords.matches(&body)
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                Err(FetchError::new(FailureKind::Cancelled, "run cancelled"))
            }
            result = self.fetcher.fetch(url) => result,
        }
    }

    async fn pace(&self) {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {}
            _ = tokio::time::sleep(self.pacing) => {}
        }
    }
}
