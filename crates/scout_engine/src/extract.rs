use scraper::{ElementRef, Html, Selector};
use scout_core::{PreviewRecord, UNKNOWN_DATE};
use scout_logging::scout_debug;
use url::Url;

/// CSS selectors describing one listing page layout.
///
/// The defaults target the Habr article feed; other content sites plug in
/// their own set through configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSelectors {
    /// One preview card.
    pub card: String,
    /// Title anchor inside a card; a card without it is skipped.
    pub title_link: String,
    /// Publication time marker; optional per card.
    pub date: String,
    /// Teaser snippet; optional per card.
    pub teaser: String,
    /// Repeated tag labels; optional per card.
    pub tag: String,
    /// Full-article body container, used during verification.
    pub article_body: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            card: r#"article[data-test-id="articles-list-item"]"#.to_string(),
            title_link: "a.tm-title__link".to_string(),
            date: "time".to_string(),
            teaser: "div.tm-article-snippet__lead".to_string(),
            tag: "a.tm-tags__tag".to_string(),
            article_body: "div.tm-article-body".to_string(),
        }
    }
}

impl ListingSelectors {
    /// Selector list a rendered page must satisfy before extraction makes
    /// sense: either the listing cards or an article body.
    pub fn content_marker(&self) -> String {
        format!("{}, {}", self.card, self.article_body)
    }
}

struct CompiledSelectors {
    card: Selector,
    title_link: Selector,
    date: Selector,
    teaser: Selector,
    tag: Selector,
}

impl CompiledSelectors {
    fn compile(selectors: &ListingSelectors) -> Option<Self> {
        Some(Self {
            card: Selector::parse(&selectors.card).ok()?,
            title_link: Selector::parse(&selectors.title_link).ok()?,
            date: Selector::parse(&selectors.date).ok()?,
            teaser: Selector::parse(&selectors.teaser).ok()?,
            tag: Selector::parse(&selectors.tag).ok()?,
        })
    }
}

/// Result of one extraction pass over a listing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedListing {
    /// Raw preview-card count, including cards that produced no record.
    /// This is what the discovered-candidates line reports.
    pub cards_found: usize,
    /// Records extracted from the usable cards, in listing order.
    pub records: Vec<PreviewRecord>,
}

/// Extract preview records from a listing page snapshot.
///
/// Pure function of the markup: the same snapshot always yields the same
/// record sequence. Cards without a title anchor, or whose link cannot be
/// resolved to an absolute URL against `base_url`, are skipped whole but
/// still counted in `cards_found`; missing dates fall back to the
/// [`UNKNOWN_DATE`] sentinel and missing teasers to the empty string.
pub fn extract_previews(
    markup: &str,
    selectors: &ListingSelectors,
    base_url: &Url,
) -> ExtractedListing {
    let Some(compiled) = CompiledSelectors::compile(selectors) else {
        scout_debug!("listing selector set failed to compile, no cards extracted");
        return ExtractedListing::default();
    };

    let document = Html::parse_document(markup);
    let mut cards_found = 0;
    let mut records = Vec::new();

    for card in document.select(&compiled.card) {
        cards_found += 1;
        let Some(anchor) = card.select(&compiled.title_link).next() else {
            continue;
        };
        let title = collect_text(anchor);
        let Some(link) = anchor
            .value()
            .attr("href")
            .and_then(|href| base_url.join(href.trim()).ok())
        else {
            continue;
        };

        let date = card
            .select(&compiled.date)
            .next()
            .map(|time| {
                time.value()
                    .attr("datetime")
                    .map(str::to_string)
                    .unwrap_or_else(|| collect_text(time))
            })
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());

        let teaser = card
            .select(&compiled.teaser)
            .next()
            .map(collect_text)
            .unwrap_or_default();

        let tags: Vec<String> = card
            .select(&compiled.tag)
            .map(|tag| collect_text(tag).to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        match PreviewRecord::new(date, title, link.as_str(), &tags, &teaser) {
            Ok(record) => records.push(record),
            Err(invalid) => {
                scout_debug!("skipping listing card: {}", invalid);
            }
        }
    }

    ExtractedListing {
        cards_found,
        records,
    }
}

/// Text of the first body-container match, whitespace-normalized; empty
/// when the selector matches nothing or fails to compile.
pub fn extract_body_text(markup: &str, body_selector: &str) -> String {
    let Ok(selector) = Selector::parse(body_selector) else {
        return String::new();
    };
    let document = Html::parse_document(markup);
    document
        .select(&selector)
        .next()
        .map(collect_text)
        .unwrap_or_default()
}

fn collect_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
