use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Condition kinds an alert can watch. Closed set: the evaluator matches
/// exhaustively, so a new kind will not compile until it is handled there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    PriceAbove,
    PriceBelow,
    PercentUp,
    PercentDown,
}

impl AlertKind {
    /// True for the kinds whose threshold is an absolute price.
    pub const fn is_price_kind(self) -> bool {
        matches!(self, Self::PriceAbove | Self::PriceBelow)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub symbol: String,
    pub kind: AlertKind,

    // Absolute price for the Price* kinds, percent magnitude for Percent*.
    pub threshold: f64,

    // Telegram chat the notification goes to.
    pub chat_id: String,

    pub is_active: bool,

    pub created_at: i64,

    // Set exactly once, when the alert fires.
    pub triggered_at: Option<i64>,
}
