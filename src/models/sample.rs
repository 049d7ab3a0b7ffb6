use serde::Serialize;

/// One quote observation for a symbol. Never persisted; the monitor fetches
/// a fresh sample every cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSample {
    pub symbol: String,
    pub current_price: f64,

    // Absent when the provider has no prior session for the symbol.
    pub previous_close: Option<f64>,
}

impl PriceSample {
    /// Percent change versus the previous close, or 0 when there is no
    /// previous close to compare against.
    pub fn change_percent(&self) -> f64 {
        match self.previous_close {
            Some(prev) if prev != 0.0 => (self.current_price - prev) / prev * 100.0,
            _ => 0.0,
        }
    }
}
