pub mod ranker;
pub mod suggestion_session;

pub use ranker::rank;
pub use suggestion_session::{
    normalize_suggestions, run_session, ChromeSuggestionFetcher, SessionState, SuggestionFetcher,
    SuggestionSession,
};
