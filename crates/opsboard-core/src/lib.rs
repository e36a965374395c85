// Domain core: player records, the OPS rank selector, the loader contract,
// and the outcome/message taxonomy shared by every front end.

pub mod error;
pub mod loader;
pub mod outcome;
pub mod rank;
pub mod record;

pub use error::LoadError;
pub use loader::{DatasetLoader, StaticLoader};
pub use outcome::{evaluate, Outcome, Trigger, TriggerKind};
pub use rank::{
    rank, select_by_position, select_top_overall, Ranking, OVERALL_LIMIT, POSITION_LIMIT,
};
pub use record::{parse_ops, PlayerRecord, PositionCode};
