use mongodb::bson::oid::ObjectId;

use bistwatch::models::{Alert, AlertKind, PriceSample};
use bistwatch::services::evaluator::evaluate;

fn alert(kind: AlertKind, threshold: f64) -> Alert {
    Alert {
        id: ObjectId::new(),
        symbol: "THYAO.IS".to_string(),
        kind,
        threshold,
        chat_id: "123456".to_string(),
        is_active: true,
        created_at: 0,
        triggered_at: None,
    }
}

fn sample(current: f64, previous: Option<f64>) -> PriceSample {
    PriceSample {
        symbol: "THYAO.IS".to_string(),
        current_price: current,
        previous_close: previous,
    }
}

#[test]
fn price_above_triggers_at_and_over_threshold() {
    let a = alert(AlertKind::PriceAbove, 100.0);

    assert!(evaluate(&a, &sample(99.99, Some(95.0))).is_none());
    assert!(evaluate(&a, &sample(100.0, Some(95.0))).is_some());
    assert!(evaluate(&a, &sample(101.0, Some(95.0))).is_some());
}

#[test]
fn price_above_message_carries_price_target_and_change() {
    let a = alert(AlertKind::PriceAbove, 100.0);
    let s = sample(101.0, Some(95.0));

    // (101 - 95) / 95 * 100 = 6.3157...
    assert!((s.change_percent() - 6.315789473684211).abs() < 1e-9);

    let msg = evaluate(&a, &s).expect("should trigger");
    assert!(msg.contains("THYAO.IS"));
    assert!(msg.contains("101.00"));
    assert!(msg.contains("100.00"));
    assert!(msg.contains("+6.32%"));
}

#[test]
fn price_below_triggers_at_and_under_threshold() {
    let a = alert(AlertKind::PriceBelow, 50.0);

    assert!(evaluate(&a, &sample(50.01, Some(51.0))).is_none());
    assert!(evaluate(&a, &sample(50.0, Some(51.0))).is_some());
    assert!(evaluate(&a, &sample(49.0, Some(51.0))).is_some());
}

#[test]
fn percent_up_triggers_at_threshold() {
    let a = alert(AlertKind::PercentUp, 5.0);

    // +5.00% exactly
    assert!(evaluate(&a, &sample(105.0, Some(100.0))).is_some());
    // +4.90%
    assert!(evaluate(&a, &sample(104.9, Some(100.0))).is_none());
}

#[test]
fn percent_down_triggers_on_drop_beyond_threshold() {
    let a = alert(AlertKind::PercentDown, 5.0);

    // -6.00%
    assert!(evaluate(&a, &sample(94.0, Some(100.0))).is_some());
    // -4.00%
    assert!(evaluate(&a, &sample(96.0, Some(100.0))).is_none());
}

#[test]
fn percent_down_message_shows_negated_target() {
    let a = alert(AlertKind::PercentDown, 5.0);
    let msg = evaluate(&a, &sample(94.0, Some(100.0))).expect("should trigger");

    assert!(msg.contains("-6.00%"));
    assert!(msg.contains("-5.00%"));
}

#[test]
fn missing_previous_close_means_zero_change() {
    let s = sample(100.0, None);
    assert_eq!(s.change_percent(), 0.0);

    // Zero change satisfies a zero threshold but not a positive one.
    assert!(evaluate(&alert(AlertKind::PercentUp, 0.0), &s).is_some());
    assert!(evaluate(&alert(AlertKind::PercentUp, 1.0), &s).is_none());

    // Price kinds only look at the current price.
    assert!(evaluate(&alert(AlertKind::PriceAbove, 100.0), &s).is_some());
    assert!(evaluate(&alert(AlertKind::PriceBelow, 100.0), &s).is_some());
}

#[test]
fn evaluation_is_pure() {
    let a = alert(AlertKind::PercentUp, 2.5);
    let s = sample(103.0, Some(100.0));

    assert_eq!(evaluate(&a, &s), evaluate(&a, &s));

    let b = alert(AlertKind::PriceBelow, 500.0);
    let t = sample(700.0, None);
    assert_eq!(evaluate(&b, &t), evaluate(&b, &t));
}
