//! Search algorithms: depth-limited alpha-beta and the pre-search
//! tactical shortcut tiers

pub mod alphabeta;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, SEARCH_DEPTH};
pub use threat::{find_center_threat, find_immediate_win, find_opening_move};
