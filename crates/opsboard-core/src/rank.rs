// Rank selection: filter, order by OPS, truncate.
//
// Both public selectors go through `rank`, which takes an optional position
// filter and a truncation bound. Ordering is a stable sort on the parsed OPS,
// highest first, with unrated records after every rated one.

use std::cmp::Ordering;

use tracing::debug;

use crate::record::PlayerRecord;

/// Cap on the by-position list.
pub const POSITION_LIMIT: usize = 6;

/// Cap on the overall list.
pub const OVERALL_LIMIT: usize = 10;

/// Result of a ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// At least one eligible record, best first, at most the requested bound.
    Ranked(Vec<PlayerRecord>),
    /// Nothing was eligible. A valid outcome, not an error.
    NoData,
}

impl Ranking {
    pub fn players(&self) -> &[PlayerRecord] {
        match self {
            Ranking::Ranked(players) => players,
            Ranking::NoData => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Ranking::NoData)
    }
}

/// Top players at `position` (exact, case-sensitive match), at most
/// [`POSITION_LIMIT`].
pub fn select_by_position(records: &[PlayerRecord], position: &str) -> Ranking {
    if position.is_empty() {
        return Ranking::NoData;
    }
    rank(records, Some(position), POSITION_LIMIT)
}

/// Top players regardless of position, at most [`OVERALL_LIMIT`].
pub fn select_top_overall(records: &[PlayerRecord]) -> Ranking {
    rank(records, None, OVERALL_LIMIT)
}

/// Filter by `position` when given, order by OPS descending, keep the first
/// `limit` records.
pub fn rank(records: &[PlayerRecord], position: Option<&str>, limit: usize) -> Ranking {
    let mut candidates: Vec<&PlayerRecord> = records
        .iter()
        .filter(|r| position.map_or(true, |p| r.position == p))
        .collect();

    if candidates.is_empty() {
        return Ranking::NoData;
    }

    let unrated = candidates.iter().filter(|r| !r.is_rated()).count();
    if unrated > 0 {
        debug!(
            unrated,
            candidates = candidates.len(),
            position = position.unwrap_or("*"),
            "unrated OPS values placed last"
        );
    }

    // slice::sort_by is stable, so ties keep input order.
    candidates.sort_by(|a, b| compare_ops_desc(a.ops, b.ops));

    Ranking::Ranked(candidates.into_iter().take(limit).cloned().collect())
}

/// Descending by value; `None` after every `Some`.
fn compare_ops_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
