//! Scout core: pure record types and keyword matching, no IO.
mod keywords;
mod record;
mod report;

pub use keywords::KeywordSet;
pub use record::{InvalidRecord, MatchResult, PreviewRecord, UNKNOWN_DATE};
pub use report::RunReport;
