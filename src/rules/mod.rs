//! Game rules: terminal detection

pub mod win;

pub use win::{check_winner, has_four_at, DIRECTIONS};
