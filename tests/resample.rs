use chrono::NaiveDate;
use sinakline::{Candle, Period, resample};

fn ts(y: i32, m: u32, d: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

fn candle(ts: i64, o: f64, h: f64, l: f64, c: f64, v: u64) -> Candle {
    Candle {
        ts,
        open: Some(o),
        high: Some(h),
        low: Some(l),
        close: Some(c),
        volume: Some(v),
    }
}

/// Mon 2024-01-08 through Fri 2024-01-12, one ISO week.
fn one_business_week() -> Vec<Candle> {
    vec![
        candle(ts(2024, 1, 8), 10.0, 10.6, 9.9, 10.4, 100),
        candle(ts(2024, 1, 9), 10.4, 11.0, 10.3, 10.9, 110),
        candle(ts(2024, 1, 10), 10.9, 11.4, 10.2, 10.5, 120),
        candle(ts(2024, 1, 11), 10.5, 10.8, 9.7, 9.9, 130),
        candle(ts(2024, 1, 12), 9.9, 10.3, 9.8, 10.1, 140),
    ]
}

#[test]
fn daily_is_identity() {
    let series = one_business_week();
    assert_eq!(resample(&series, Period::Daily), series);
}

#[test]
fn weekly_collapses_one_business_week() {
    let weekly = resample(&one_business_week(), Period::Weekly);
    assert_eq!(weekly.len(), 1);

    let w = &weekly[0];
    assert_eq!(w.ts, ts(2024, 1, 12));
    assert_eq!(w.open, Some(10.0));
    assert_eq!(w.high, Some(11.4));
    assert_eq!(w.low, Some(9.7));
    assert_eq!(w.close, Some(10.1));
    assert_eq!(w.volume, Some(600));
}

#[test]
fn weekly_splits_on_week_boundary() {
    // Fri 2024-01-05 is ISO week 1, Mon 2024-01-08 is week 2.
    let series = vec![
        candle(ts(2024, 1, 5), 10.0, 10.5, 9.9, 10.2, 100),
        candle(ts(2024, 1, 8), 10.2, 10.9, 10.1, 10.7, 110),
    ];
    let weekly = resample(&series, Period::Weekly);
    assert_eq!(weekly.len(), 2);
    assert!(weekly[0].ts < weekly[1].ts);
    assert_eq!(weekly[0].close, Some(10.2));
    assert_eq!(weekly[1].open, Some(10.2));
}

#[test]
fn monthly_splits_on_month_boundary() {
    let series = vec![
        candle(ts(2024, 1, 30), 10.0, 10.5, 9.9, 10.2, 100),
        candle(ts(2024, 1, 31), 10.2, 10.9, 10.1, 10.7, 110),
        candle(ts(2024, 2, 1), 10.7, 11.0, 10.6, 10.8, 120),
    ];
    let monthly = resample(&series, Period::Monthly);
    assert_eq!(monthly.len(), 2);

    let jan = &monthly[0];
    assert_eq!(jan.ts, ts(2024, 1, 31));
    assert_eq!(jan.open, Some(10.0));
    assert_eq!(jan.high, Some(10.9));
    assert_eq!(jan.low, Some(9.9));
    assert_eq!(jan.close, Some(10.7));
    assert_eq!(jan.volume, Some(210));

    assert_eq!(monthly[1].volume, Some(120));
}

#[test]
fn missing_fields_are_skipped_within_a_group() {
    // First day's open is missing; the weekly open comes from the next
    // present one. Same for the last day's close.
    let mut series = one_business_week();
    series[0].open = None;
    series[4].close = None;
    series[2].volume = None;

    let weekly = resample(&series, Period::Weekly);
    assert_eq!(weekly.len(), 1);

    let w = &weekly[0];
    assert_eq!(w.open, Some(10.4));
    assert_eq!(w.close, Some(9.9));
    assert_eq!(w.volume, Some(480));
}

#[test]
fn group_with_no_usable_ohlc_is_dropped() {
    let blank = Candle {
        ts: ts(2024, 1, 8),
        open: None,
        high: None,
        low: None,
        close: None,
        volume: Some(100),
    };
    let series = vec![
        candle(ts(2024, 1, 5), 10.0, 10.5, 9.9, 10.2, 100),
        blank,
    ];
    let weekly = resample(&series, Period::Weekly);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].ts, ts(2024, 1, 5));
}

#[test]
fn volume_is_missing_when_no_constituent_has_volume() {
    let mut series = one_business_week();
    for c in &mut series {
        c.volume = None;
    }
    let weekly = resample(&series, Period::Weekly);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].volume, None);
}

#[test]
fn ordering_is_preserved_across_many_weeks() {
    let mut series = Vec::new();
    for day in 1..=31 {
        series.push(candle(ts(2024, 1, day), 10.0, 10.5, 9.9, 10.2, 100));
    }
    let weekly = resample(&series, Period::Weekly);
    assert!(weekly.len() > 3);
    assert!(weekly.windows(2).all(|w| w[0].ts < w[1].ts));
}
