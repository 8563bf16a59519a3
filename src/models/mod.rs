pub mod day_key;
pub mod keyword;

pub use day_key::DayKey;
pub use keyword::{DailyBatch, KeywordRecord, RankedResult, SuggestionSet, HEADER_SENTINEL};
