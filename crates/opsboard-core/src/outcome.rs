// Triggers and their outcomes.
//
// A trigger is one user action ("analyze this position", "top ten"). Its
// outcome is exactly one of: a ranked list, a "no data" state, or a failure.
// The user-facing wording for each case lives here so every front end shows
// the same text.

use crate::error::LoadError;
use crate::rank::{select_by_position, select_top_overall, Ranking};
use crate::record::{PlayerRecord, PositionCode};

pub const MSG_NO_DATA_FOR_POSITION: &str = "No data available for this position.";
pub const MSG_NO_DATA: &str = "No data available.";
pub const MSG_NO_DATA_TOP: &str = "No data available for top players.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch player data. Please try again.";
pub const MSG_FETCH_FAILED_TOP: &str = "Failed to fetch top player data. Please try again.";

/// A user-initiated load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    ByPosition(PositionCode),
    TopOverall,
}

/// Trigger without its parameters. Each kind owns one result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    ByPosition,
    TopOverall,
}

impl Trigger {
    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::ByPosition(_) => TriggerKind::ByPosition,
            Trigger::TopOverall => TriggerKind::TopOverall,
        }
    }
}

/// What a completed trigger hands to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ranked(Vec<PlayerRecord>),
    Empty,
    Failed(LoadError),
}

impl Outcome {
    /// Message to show for this outcome, if any.
    pub fn message(&self, kind: TriggerKind) -> Option<&'static str> {
        match (self, kind) {
            (Outcome::Ranked(_), _) => None,
            (Outcome::Empty, TriggerKind::ByPosition) => Some(MSG_NO_DATA_FOR_POSITION),
            (Outcome::Empty, TriggerKind::TopOverall) => Some(MSG_NO_DATA_TOP),
            (Outcome::Failed(LoadError::MalformedData { .. }), TriggerKind::ByPosition) => {
                Some(MSG_NO_DATA)
            }
            (Outcome::Failed(LoadError::MalformedData { .. }), TriggerKind::TopOverall) => {
                Some(MSG_NO_DATA_TOP)
            }
            (Outcome::Failed(LoadError::Fetch { .. }), TriggerKind::ByPosition) => {
                Some(MSG_FETCH_FAILED)
            }
            (Outcome::Failed(LoadError::Fetch { .. }), TriggerKind::TopOverall) => {
                Some(MSG_FETCH_FAILED_TOP)
            }
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        match self {
            Outcome::Ranked(players) => players,
            _ => &[],
        }
    }
}

/// Reduce a load result to the outcome of `trigger`.
pub fn evaluate(trigger: &Trigger, loaded: Result<Vec<PlayerRecord>, LoadError>) -> Outcome {
    let records = match loaded {
        Ok(records) => records,
        Err(e) => return Outcome::Failed(e),
    };

    let ranking = match trigger {
        Trigger::ByPosition(position) => select_by_position(&records, position.code()),
        Trigger::TopOverall => select_top_overall(&records),
    };

    match ranking {
        Ranking::Ranked(players) => Outcome::Ranked(players),
        Ranking::NoData => Outcome::Empty,
    }
}
