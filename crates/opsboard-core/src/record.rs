// Player records and position codes.

use std::fmt;

// ---------------------------------------------------------------------------
// PositionCode
// ---------------------------------------------------------------------------

/// Fielding positions offered by the position picker.
///
/// Raw data may carry codes outside this set; those records still take part
/// in the overall ranking but can never be selected by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionCode {
    DesignatedHitter,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    Outfield,
}

impl PositionCode {
    /// Picker order: DH, C, 1B, 2B, 3B, SS, OF.
    pub const ALL: [PositionCode; 7] = [
        PositionCode::DesignatedHitter,
        PositionCode::Catcher,
        PositionCode::FirstBase,
        PositionCode::SecondBase,
        PositionCode::ThirdBase,
        PositionCode::ShortStop,
        PositionCode::Outfield,
    ];

    /// Parse the exact code used in the dataset's `POS` column.
    ///
    /// Matching is case-sensitive, the same as the by-position filter.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "DH" => Some(PositionCode::DesignatedHitter),
            "C" => Some(PositionCode::Catcher),
            "1B" => Some(PositionCode::FirstBase),
            "2B" => Some(PositionCode::SecondBase),
            "3B" => Some(PositionCode::ThirdBase),
            "SS" => Some(PositionCode::ShortStop),
            "OF" => Some(PositionCode::Outfield),
            _ => None,
        }
    }

    /// The code as it appears in the dataset.
    pub fn code(&self) -> &'static str {
        match self {
            PositionCode::DesignatedHitter => "DH",
            PositionCode::Catcher => "C",
            PositionCode::FirstBase => "1B",
            PositionCode::SecondBase => "2B",
            PositionCode::ThirdBase => "3B",
            PositionCode::ShortStop => "SS",
            PositionCode::Outfield => "OF",
        }
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// One row of the batting dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player: String,
    pub position: String,
    /// Parsed OPS. `None` when the source text is missing, not a number, or
    /// not finite; such records are "unrated" and rank after all rated ones.
    pub ops: Option<f64>,
    /// OPS exactly as the source delivered it, used for display.
    pub ops_text: String,
}

impl PlayerRecord {
    /// Build a record from raw column text, parsing OPS on the way in.
    pub fn new(
        player: impl Into<String>,
        position: impl Into<String>,
        ops_text: impl Into<String>,
    ) -> Self {
        let ops_text = ops_text.into();
        PlayerRecord {
            player: player.into(),
            position: position.into(),
            ops: parse_ops(&ops_text),
            ops_text,
        }
    }

    pub fn is_rated(&self) -> bool {
        self.ops.is_some()
    }

    /// `name - position - OPS: value`, the row format of both result lists.
    pub fn display_line(&self) -> String {
        format!("{} - {} - OPS: {}", self.player, self.position, self.ops_text)
    }
}

/// Parse an OPS cell. Surrounding whitespace is ignored; anything that is
/// not a finite decimal number yields `None`.
pub fn parse_ops(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
