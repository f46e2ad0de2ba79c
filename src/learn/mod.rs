//! Persistent learning from finished games

pub mod store;

pub use store::{LearningStore, MoveStat, StoreError, RATIO_THRESHOLD};
