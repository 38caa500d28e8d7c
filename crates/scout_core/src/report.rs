use crate::MatchResult;

/// Outcome of one discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    /// Number of preview cards found on the listing page.
    pub candidates_discovered: usize,
    /// Verified matches, in listing order.
    pub matches: Vec<MatchResult>,
}

impl RunReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}
