use std::fmt;

use url::Url;

/// Sentinel date for cards whose time marker is missing.
pub const UNKNOWN_DATE: &str = "Неизвестно";

/// Preview-level view of one listing card.
///
/// Immutable after construction. `preview_text` is the lowercase join
/// `title + " " + tags + " " + teaser` and is what the first filter stage
/// screens against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRecord {
    date: String,
    title: String,
    link: String,
    preview_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecord {
    EmptyTitle,
    /// The link did not resolve to an absolute URL.
    RelativeLink(String),
}

impl fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRecord::EmptyTitle => write!(f, "card has an empty title"),
            InvalidRecord::RelativeLink(link) => {
                write!(f, "card link is not an absolute url: {link}")
            }
        }
    }
}

impl PreviewRecord {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        tags: &[String],
        teaser: &str,
    ) -> Result<Self, InvalidRecord> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(InvalidRecord::EmptyTitle);
        }
        let link = link.into();
        if Url::parse(&link).is_err() {
            return Err(InvalidRecord::RelativeLink(link));
        }

        let preview_text =
            format!("{} {} {}", title, tags.join(" "), teaser).to_lowercase();

        Ok(Self {
            date: date.into(),
            title,
            link,
            preview_text,
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }
}

/// Subset of a [`PreviewRecord`] surfaced for candidates that passed both
/// filter stages. Appended in listing order, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub date: String,
    pub title: String,
    pub link: String,
}

impl MatchResult {
    pub fn from_record(record: &PreviewRecord) -> Self {
        Self {
            date: record.date().to_string(),
            title: record.title().to_string(),
            link: record.link().to_string(),
        }
    }

    /// One report line: `{date} – {title} – {link}`.
    pub fn report_line(&self) -> String {
        format!("{} – {} – {}", self.date, self.title, self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidRecord, MatchResult, PreviewRecord};

    fn tags(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preview_text_is_lowercase_join() {
        let record = PreviewRecord::new(
            "2024-05-06",
            "Новый Python фреймворк",
            "https://habr.com/ru/articles/1/",
            &tags(&["веб-разработка"]),
            "Коротко о главном",
        )
        .unwrap();
        assert_eq!(
            record.preview_text(),
            "новый python фреймворк веб-разработка коротко о главном"
        );
    }

    #[test]
    fn empty_tags_and_teaser_keep_the_join_shape() {
        let record = PreviewRecord::new(
            "2024-05-06",
            "Title",
            "https://habr.com/ru/articles/2/",
            &[],
            "",
        )
        .unwrap();
        // Single-space separators stay even when parts are empty.
        assert_eq!(record.preview_text(), "title  ");
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = PreviewRecord::new("d", "  ", "https://habr.com/x", &[], "")
            .unwrap_err();
        assert_eq!(err, InvalidRecord::EmptyTitle);
    }

    #[test]
    fn relative_link_is_rejected() {
        let err =
            PreviewRecord::new("d", "Title", "/ru/articles/3/", &[], "").unwrap_err();
        assert_eq!(
            err,
            InvalidRecord::RelativeLink("/ru/articles/3/".to_string())
        );
    }

    #[test]
    fn report_line_uses_en_dash_separators() {
        let record = PreviewRecord::new(
            "2024-05-06T10:00",
            "Заголовок",
            "https://habr.com/ru/articles/4/",
            &[],
            "",
        )
        .unwrap();
        let result = MatchResult::from_record(&record);
        assert_eq!(
            result.report_line(),
            "2024-05-06T10:00 – Заголовок – https://habr.com/ru/articles/4/"
        );
    }
}
