/// Fixed, ordered set of literal keywords shared by both filter stages.
///
/// Keywords are lowercased once at construction; matching is plain
/// substring containment with no word-boundary rules. That means a short
/// keyword like `web` also matches inside longer words, which mirrors the
/// permissive screening this set is used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// True iff at least one keyword occurs as a substring of the
    /// lowercased text. Total over any input; an empty set or empty text
    /// never matches.
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() || self.keywords.is_empty() {
            return false;
        }
        let haystack = text.to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}
