//! Historical candle backfill
//!
//! The venue caps the number of candles returned per request, so a
//! requested range is partitioned into sequential windows, fetched one at
//! a time behind a politeness throttle, and stitched back together sorted
//! by open time.
//!
//! The window-step derivation divides the total span by the window count
//! rather than stepping by the per-request maximum directly, which yields
//! sub-window granularity on ranges that don't divide evenly. That
//! behavior is reproduced from the reference data pipeline as-is.

use crate::endpoints::MarketEndpoints;
use crate::error::{RestError, RestResult};
use crate::types::{Candle, RawCandle};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use coinbase_types::{Interval, ProductId, Throttle};
use tracing::debug;

/// Venue cap on candles returned by a single request
pub const CANDLES_PER_REQUEST: u32 = 300;

/// Default backfill span when a day bound is missing: 30 days
const DEFAULT_SPAN_SECS: i64 = 30 * 24 * 3600;

/// Time range in Unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Range start
    pub start: i64,
    /// Range end
    pub end: i64,
}

impl TimeRange {
    /// Resolve a day-bounded request into a concrete range
    ///
    /// With neither bound given the range is the 30 days up to `now`;
    /// with only one bound given the other is derived 30 days away from
    /// it; with both given they are used directly. Day bounds are
    /// interpreted as UTC midnight.
    pub fn resolve(start_day: Option<NaiveDate>, end_day: Option<NaiveDate>, now: i64) -> Self {
        match (start_day, end_day) {
            (None, None) => Self {
                start: now - DEFAULT_SPAN_SECS,
                end: now,
            },
            (None, Some(end_day)) => {
                let end = day_start(end_day);
                Self {
                    start: end - DEFAULT_SPAN_SECS,
                    end,
                }
            }
            (Some(start_day), None) => {
                let start = day_start(start_day);
                Self {
                    start,
                    end: start + DEFAULT_SPAN_SECS,
                }
            }
            (Some(start_day), Some(end_day)) => Self {
                start: day_start(start_day),
                end: day_start(end_day),
            },
        }
    }

    fn start_utc(&self) -> RestResult<DateTime<Utc>> {
        utc_from_secs(self.start)
    }

    fn end_utc(&self) -> RestResult<DateTime<Utc>> {
        utc_from_secs(self.end)
    }
}

/// Unix seconds of UTC midnight on the given day
fn day_start(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn utc_from_secs(secs: i64) -> RestResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| RestError::InvalidParameter(format!("Timestamp out of range: {}", secs)))
}

/// Parse a day bound in the MM/DD/YY format accepted by the reference
/// data pipeline
pub fn parse_day(s: &str) -> RestResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m/%d/%y")
        .map_err(|_| RestError::InvalidParameter(format!("Invalid day (expected MM/DD/YY): {}", s)))
}

/// Partition a range into per-request windows
///
/// `divisor = granularity * limit` is the widest span one request can
/// cover. The window count is `span / divisor + 1` (the +1 guards the
/// zero-window case when the range fits in one request) and the cursor
/// advances by `span / num_windows`, clamping the final window's end to
/// exactly the range end.
pub fn windows(range: TimeRange, granularity_secs: u64, limit: u32) -> RestResult<Vec<TimeRange>> {
    if range.start >= range.end {
        return Err(RestError::InvalidParameter(format!(
            "Backfill range is empty: start {} >= end {}",
            range.start, range.end
        )));
    }
    if granularity_secs == 0 || limit == 0 {
        return Err(RestError::InvalidParameter(
            "Granularity and request limit must be non-zero".to_string(),
        ));
    }

    let span = range.end - range.start;
    let divisor = granularity_secs as i64 * limit as i64;
    let num_windows = span / divisor + 1;
    let step = span / num_windows;

    let mut out = Vec::with_capacity(num_windows as usize);
    let mut cursor = range.start;
    while cursor < range.end {
        let window_end = (cursor + step).min(range.end);
        out.push(TimeRange {
            start: cursor,
            end: window_end,
        });
        cursor = window_end;
    }

    Ok(out)
}

/// Sort accumulated rows by open time and insert close times
///
/// The venue's low/high ordering within each row is kept as produced.
pub fn finish(mut rows: Vec<RawCandle>, granularity_secs: u64) -> Vec<Candle> {
    rows.sort_by_key(RawCandle::open_time);
    rows.iter()
        .map(|row| Candle::from_raw(row, granularity_secs))
        .collect()
}

/// Fetch the full candle history for a range, one window at a time
///
/// The throttle is consulted before every request. A window whose
/// response is not a candle array fails the whole backfill with a typed
/// error instead of being accumulated blindly.
pub(crate) fn backfill(
    market: &MarketEndpoints<'_>,
    throttle: &mut dyn Throttle,
    product: &ProductId,
    interval: Interval,
    start_day: Option<NaiveDate>,
    end_day: Option<NaiveDate>,
    limit: u32,
) -> RestResult<Vec<Candle>> {
    let granularity = interval.granularity_secs();
    let range = TimeRange::resolve(start_day, end_day, Utc::now().timestamp());
    let windows = windows(range, granularity, limit)?;

    debug!(
        "Backfilling {} {} candles across {} windows",
        product,
        interval,
        windows.len()
    );

    let mut rows: Vec<RawCandle> = Vec::new();
    for window in &windows {
        throttle.wait();
        let batch = market.get_candles(
            product,
            granularity,
            window.start_utc()?,
            window.end_utc()?,
        )?;
        rows.extend(batch);
    }

    Ok(finish(rows, granularity))
}
