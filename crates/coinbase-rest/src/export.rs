//! CSV persistence for backfilled candles
//!
//! The on-disk column order is
//! `open_time,close_time,open,high,low,close,volume`, which differs from
//! the in-memory low/high/open ordering. Downstream consumers depend on
//! this exact permutation, so rows are written field by field rather than
//! derived from the struct layout.

use crate::error::{RestError, RestResult};
use crate::types::Candle;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use tracing::debug;

/// Write candles to a CSV file, one row per candle, no header
pub fn write_candles<P: AsRef<Path>>(path: P, candles: &[Candle]) -> RestResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    for candle in candles {
        writer.write_record(&[
            candle.open_time.to_string(),
            candle.close_time.to_string(),
            candle.open.to_string(),
            candle.high.to_string(),
            candle.low.to_string(),
            candle.close.to_string(),
            candle.volume.to_string(),
        ])?;
    }

    writer.flush()?;
    debug!("Wrote {} candles to {:?}", candles.len(), path.as_ref());
    Ok(())
}

/// Read candles back from a CSV file written by [`write_candles`]
pub fn read_candles<P: AsRef<Path>>(path: P) -> RestResult<Vec<Candle>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    let mut candles = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 7 {
            return Err(RestError::Parse(format!(
                "Expected 7 candle fields, got {}",
                record.len()
            )));
        }

        candles.push(Candle {
            open_time: parse_field(&record, 0)?,
            close_time: parse_field(&record, 1)?,
            open: parse_field(&record, 2)?,
            high: parse_field(&record, 3)?,
            low: parse_field(&record, 4)?,
            close: parse_field(&record, 5)?,
            volume: parse_field(&record, 6)?,
        });
    }

    Ok(candles)
}

fn parse_field<T: std::str::FromStr>(record: &csv::StringRecord, index: usize) -> RestResult<T> {
    let raw = record
        .get(index)
        .ok_or_else(|| RestError::Parse(format!("Missing candle field {}", index)))?;
    raw.parse()
        .map_err(|_| RestError::Parse(format!("Invalid candle field {}: {}", index, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_candles() -> Vec<Candle> {
        vec![
            Candle {
                open_time: 1000,
                close_time: 1059,
                low: 95.0,
                high: 110.0,
                open: 100.0,
                close: 105.0,
                volume: 12.5,
            },
            Candle {
                open_time: 1060,
                close_time: 1119,
                low: 100.0,
                high: 115.0,
                open: 105.0,
                close: 110.0,
                volume: 9.25,
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("candles.csv");

        let candles = sample_candles();
        write_candles(&path, &candles).unwrap();
        let loaded = read_candles(&path).unwrap();

        assert_eq!(loaded, candles);
    }

    #[test]
    fn test_column_order_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("candles.csv");

        write_candles(&path, &sample_candles()[..1]).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        // open_time,close_time,open,high,low,close,volume
        assert_eq!(raw.trim_end(), "1000,1059,100,110,95,105,12.5");
    }

    #[test]
    fn test_read_rejects_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "1000,1059,100\n").unwrap();

        assert!(matches!(
            read_candles(&path),
            Err(RestError::Parse(_))
        ));
    }

    #[test]
    fn test_read_rejects_non_numeric_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "1000,1059,abc,110,95,105,12.5\n").unwrap();

        assert!(read_candles(&path).is_err());
    }
}
