//! Score weights for board patterns
//!
//! Two ladders, one per side: blocking the opponent is weighted roughly
//! double advancing an own run, since a missed opponent three costs the
//! game while a missed own three only costs tempo.

/// Run scores by length and open-end count.
///
/// Strictly decreasing: FOUR >> OPEN_THREE >> HALF_OPEN_THREE >>
/// OPEN_TWO >> HALF_OPEN_TWO. The FOUR tier is terminal-magnitude so a
/// line found mid-evaluation dominates every positional consideration.
pub struct PatternScore;

impl PatternScore {
    /// Four in a row reached inside the evaluation
    pub const FOUR: i32 = 1_000;
    /// Three with both ends open: one move from an unstoppable four
    pub const OPEN_THREE: i32 = 50;
    /// Three with a single open end
    pub const HALF_OPEN_THREE: i32 = 20;
    /// Two with both ends open
    pub const OPEN_TWO: i32 = 8;
    /// Two with a single open end
    pub const HALF_OPEN_TWO: i32 = 3;

    // Opponent-side (blocking) ladder, ~2x each tier
    pub const BLOCK_FOUR: i32 = 2_000;
    pub const BLOCK_OPEN_THREE: i32 = 100;
    pub const BLOCK_HALF_OPEN_THREE: i32 = 40;
    pub const BLOCK_OPEN_TWO: i32 = 16;
    pub const BLOCK_HALF_OPEN_TWO: i32 = 6;

    /// Multiplier for runs lying along one of the two middle rows/columns
    pub const CENTER_LINE_MULT: i32 = 3;
    /// Multiplier for runs along rows/columns 1 and 4
    pub const NEAR_CENTER_MULT: i32 = 2;
}

/// Positional bonuses, independent of run scoring.
///
/// Opponent occupancy of the center is penalized harder than own occupancy
/// is rewarded, mirroring the blocking asymmetry above.
pub struct PositionScore;

impl PositionScore {
    /// Own mark in the central 2x2 block
    pub const CENTER: i32 = 6;
    /// Opponent mark in the central 2x2 block (penalty magnitude)
    pub const CENTER_OPPONENT: i32 = 9;
    /// Own mark sharing a row or column with the center block
    pub const SEMI_CENTER: i32 = 2;
    pub const SEMI_CENTER_OPPONENT: i32 = 3;
    /// Anything else (edges and corners)
    pub const EDGE: i32 = 1;
    pub const EDGE_OPPONENT: i32 = 1;
    /// Two own central cells that touch each other
    pub const CENTER_PAIR: i32 = 8;
    pub const CENTER_PAIR_OPPONENT: i32 = 12;
}

/// Weights for the root-only placed-cell threat measurement.
///
/// Small on purpose: these nudge move selection between near-equal root
/// values without overriding a genuine minimax difference.
pub struct ThreatPressure;

impl ThreatPressure {
    /// Placing here breaks an opponent run of three or more
    pub const BREAKS_THREE: i32 = 8;
    /// Breaks an opponent two that was open on both ends
    pub const BREAKS_OPEN_TWO: i32 = 5;
    /// Breaks an opponent two with one open end
    pub const BREAKS_HALF_TWO: i32 = 3;
    /// Touches a lone opponent mark with room to grow
    pub const TOUCHES_ONE: i32 = 1;
}
