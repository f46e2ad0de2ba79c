//! Position evaluation and heuristics

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, threat_pressure};
pub use patterns::{PatternScore, PositionScore, ThreatPressure};
