//! Integration tests for the backfill pipeline
//!
//! Exercises windowing, accumulation, post-processing, and CSV export
//! together, without touching the network.

use coinbase_rest::history::{finish, windows, TimeRange};
use coinbase_rest::{export, Candle, RawCandle};

/// Simulate the venue's per-window candle response
fn venue_rows(window: TimeRange, granularity: i64) -> Vec<RawCandle> {
    let mut rows = Vec::new();
    let mut t = window.start;
    while t < window.end {
        // Venue returns newest-first; accumulation order must not matter
        rows.insert(0, RawCandle(t, 9.5, 10.5, 10.0, 10.25, 3.0));
        t += granularity;
    }
    rows
}

#[test]
fn test_backfill_pipeline_end_to_end() {
    let granularity: u64 = 100;
    let limit: u32 = 10;
    let range = TimeRange {
        start: 0,
        end: 2000,
    };

    // divisor = 1000, num_windows = 3, step = 666; the floored step
    // leaves a short clamped tail window
    let windows = windows(range, granularity, limit).unwrap();
    assert_eq!(windows.len(), 4);
    assert_eq!(windows.last().unwrap().end, 2000);

    let mut accumulated: Vec<RawCandle> = Vec::new();
    for window in &windows {
        accumulated.extend(venue_rows(*window, granularity as i64));
    }

    let candles = finish(accumulated, granularity);

    // Sorted ascending by open time despite newest-first responses
    for pair in candles.windows(2) {
        assert!(pair[0].open_time <= pair[1].open_time);
    }

    // Close time is one granularity interval minus one second
    for candle in &candles {
        assert_eq!(candle.close_time, candle.open_time + 99);
    }
}

#[test]
fn test_backfill_results_survive_csv_round_trip() {
    let range = TimeRange {
        start: 0,
        end: 1000,
    };
    let window_list = windows(range, 100, 10).unwrap();

    let mut accumulated: Vec<RawCandle> = Vec::new();
    for window in &window_list {
        accumulated.extend(venue_rows(*window, 100));
    }
    let candles = finish(accumulated, 100);
    assert!(!candles.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backfill.csv");
    export::write_candles(&path, &candles).unwrap();
    let loaded: Vec<Candle> = export::read_candles(&path).unwrap();

    assert_eq!(loaded, candles);
}
