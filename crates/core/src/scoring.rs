//! Scoring module - fixed run-length point table
//!
//! Points are awarded once per cleared run, at the moment it is cleared.
//! Runs longer than five score the same as a run of five.

use crate::types::{MAX_SCORED_RUN, MIN_RUN, RUN_SCORES};

/// Points for a single run of `len` cells
///
/// Lengths below the minimum run are not runs and score nothing.
pub fn calculate_run_score(len: usize) -> i32 {
    if len < MIN_RUN {
        return 0;
    }
    RUN_SCORES[len.min(MAX_SCORED_RUN) - MIN_RUN]
}

/// Total points for a batch of run lengths
pub fn calculate_score<I>(run_lengths: I) -> i32
where
    I: IntoIterator<Item = usize>,
{
    run_lengths
        .into_iter()
        .map(calculate_run_score)
        .fold(0i32, i32::saturating_add)
}
