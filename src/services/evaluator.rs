use crate::models::{Alert, AlertKind, PriceSample};

/// Decide whether `alert` fires against `sample` and, if so, render the
/// notification text. Pure: no clock, no I/O, same inputs same output.
///
/// Boundary policy: equality triggers (`>=` / `<=`). With no previous close
/// the change percent is 0, so Percent* alerts only fire that cycle when
/// their threshold is <= 0 (the creation endpoint warns about that setup).
pub fn evaluate(alert: &Alert, sample: &PriceSample) -> Option<String> {
    let price = sample.current_price;
    let change = sample.change_percent();

    match alert.kind {
        AlertKind::PriceAbove if price >= alert.threshold => Some(format!(
            "🚀 {}\n\nTarget price exceeded!\n💰 Price: {:.2} TL\n🎯 Target: {:.2} TL\n📈 Change: {:+.2}%",
            alert.symbol, price, alert.threshold, change
        )),
        AlertKind::PriceBelow if price <= alert.threshold => Some(format!(
            "⚠️ {}\n\nDropped below target price!\n💰 Price: {:.2} TL\n🎯 Target: {:.2} TL\n📉 Change: {:+.2}%",
            alert.symbol, price, alert.threshold, change
        )),
        AlertKind::PercentUp if change >= alert.threshold => Some(format!(
            "📈 {}\n\nPercent gain target hit!\n💰 Price: {:.2} TL\n📊 Change: {:+.2}%\n🎯 Target: {:+.2}%",
            alert.symbol, price, change, alert.threshold
        )),
        AlertKind::PercentDown if change <= -alert.threshold => Some(format!(
            "📉 {}\n\nPercent drop target hit!\n💰 Price: {:.2} TL\n📊 Change: {:+.2}%\n🎯 Target: -{:.2}%",
            alert.symbol, price, change, alert.threshold
        )),
        AlertKind::PriceAbove
        | AlertKind::PriceBelow
        | AlertKind::PercentUp
        | AlertKind::PercentDown => None,
    }
}
