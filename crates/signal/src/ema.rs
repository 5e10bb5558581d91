//! Reference EMA trend predictor
//!
//! Holds a precomputed directional signal series per instrument and
//! classifies a window by the sign of the last signal point inside it:
//! positive means `Long`, otherwise `Short`, and an empty window means
//! `Mid`. The series can be supplied directly or derived from closes as a
//! short/long EMA crossover (`signal = EMA(close, short) - EMA(close, long)`).

use async_trait::async_trait;
use kairos_core::{Symbol, Timestamp};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::SignalResult;
use crate::predictor::TrendPredictor;
use crate::trend::Trend;

/// A timestamped signal or price observation
pub type SignalPoint = (Timestamp, Decimal);

/// Trend predictor backed by per-instrument signal series
#[derive(Debug, Clone, Default)]
pub struct EmaTrendPredictor {
    /// Signal series per instrument, sorted by timestamp
    series: HashMap<Symbol, Vec<SignalPoint>>,
}

impl EmaTrendPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Register a precomputed signal series for an instrument
    pub fn with_signal(
        mut self,
        instrument_id: impl Into<Symbol>,
        mut points: Vec<SignalPoint>,
    ) -> Self {
        points.sort_by_key(|(ts, _)| *ts);
        self.series.insert(instrument_id.into(), points);
        self
    }

    /// Builder: Derive the signal from closes as an EMA crossover.
    ///
    /// `signal = EMA(close, short_period) - EMA(close, long_period)`,
    /// defined from the long EMA's seed onward.
    pub fn with_crossover(
        self,
        instrument_id: impl Into<Symbol>,
        closes: &[SignalPoint],
        short_period: usize,
        long_period: usize,
    ) -> Self {
        let mut sorted: Vec<SignalPoint> = closes.to_vec();
        sorted.sort_by_key(|(ts, _)| *ts);

        let values: Vec<Decimal> = sorted.iter().map(|(_, close)| *close).collect();
        let short = ema_series(&values, short_period);
        let long = ema_series(&values, long_period);

        let points = sorted
            .iter()
            .zip(short.iter().zip(long.iter()))
            .filter_map(|(&(ts, _), (s, l))| match (s, l) {
                (Some(s), Some(l)) => Some((ts, s - l)),
                _ => None,
            })
            .collect();

        self.with_signal(instrument_id, points)
    }

    /// Last signal point with timestamp inside `[start, end]`
    fn sample_last(&self, instrument_id: &str, start: Timestamp, end: Timestamp) -> Option<Decimal> {
        self.series.get(instrument_id)?
            .iter()
            .rev()
            .find(|(ts, _)| *ts >= start && *ts <= end)
            .map(|(_, signal)| *signal)
    }
}

#[async_trait]
impl TrendPredictor for EmaTrendPredictor {
    async fn predict(
        &self,
        instrument_id: &str,
        window_start: Timestamp,
        window_end: Timestamp,
    ) -> SignalResult<Trend> {
        match self.sample_last(instrument_id, window_start, window_end) {
            None => {
                // No data is not an error, just degraded confidence
                log::debug!(
                    "[EmaTrend] no signal for {} in [{}, {}], falling back to Mid",
                    instrument_id,
                    window_start,
                    window_end
                );
                Ok(Trend::Mid)
            }
            Some(signal) if signal > Decimal::ZERO => Ok(Trend::Long),
            Some(_) => Ok(Trend::Short),
        }
    }

    fn name(&self) -> &str {
        "EmaTrendPredictor"
    }
}

/// Recursive EMA over `values`, seeded with the SMA of the first `period`
/// values; `None` before the seed index.
///
/// `EMA[t] = alpha * v[t] + (1 - alpha) * EMA[t-1]`, `alpha = 2 / (period + 1)`
fn ema_series(values: &[Decimal], period: usize) -> Vec<Option<Decimal>> {
    let n = values.len();
    let mut result = vec![None; n];
    if period == 0 || n < period {
        return result;
    }

    let alpha = Decimal::from(2) / Decimal::from(period as u64 + 1);
    let one_minus = Decimal::ONE - alpha;

    let seed: Decimal = values.iter().take(period).sum::<Decimal>() / Decimal::from(period as u64);
    result[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..n {
        let ema = alpha * values[i] + one_minus * prev;
        result[i] = Some(ema);
        prev = ema;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn ts(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_ema_known_values() {
        // alpha = 2/(3+1) = 0.5; seed at index 2 = SMA(10,11,12) = 11
        // EMA[3] = 0.5*13 + 0.5*11 = 12, EMA[4] = 0.5*14 + 0.5*12 = 13
        let values = vec![dec!(10), dec!(11), dec!(12), dec!(13), dec!(14)];
        let ema = ema_series(&values, 3);

        assert_eq!(ema[0], None);
        assert_eq!(ema[1], None);
        assert_eq!(ema[2], Some(dec!(11)));
        assert_eq!(ema[3], Some(dec!(12)));
        assert_eq!(ema[4], Some(dec!(13)));
    }

    #[test]
    fn test_ema_short_series() {
        let values = vec![dec!(10), dec!(11)];
        assert!(ema_series(&values, 3).iter().all(Option::is_none));
    }

    #[tokio::test]
    async fn test_positive_signal_is_long() {
        let predictor = EmaTrendPredictor::new()
            .with_signal("BTC-USD", vec![(ts(9), dec!(-1)), (ts(10), dec!(2))]);

        let trend = predictor.predict("BTC-USD", ts(8), ts(11)).await.unwrap();
        assert_eq!(trend, Trend::Long);
    }

    #[tokio::test]
    async fn test_negative_signal_is_short() {
        let predictor = EmaTrendPredictor::new()
            .with_signal("BTC-USD", vec![(ts(9), dec!(2)), (ts(10), dec!(-1))]);

        let trend = predictor.predict("BTC-USD", ts(8), ts(11)).await.unwrap();
        assert_eq!(trend, Trend::Short);
    }

    #[tokio::test]
    async fn test_samples_last_point_in_window_only() {
        // Point at 10:00 is outside [8:00, 9:30]; last inside is 9:00
        let predictor = EmaTrendPredictor::new()
            .with_signal("BTC-USD", vec![(ts(9), dec!(3)), (ts(10), dec!(-5))]);

        let end = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        let trend = predictor.predict("BTC-USD", ts(8), end).await.unwrap();
        assert_eq!(trend, Trend::Long);
    }

    #[tokio::test]
    async fn test_empty_window_falls_back_to_mid() {
        let predictor =
            EmaTrendPredictor::new().with_signal("BTC-USD", vec![(ts(12), dec!(1))]);

        let trend = predictor.predict("BTC-USD", ts(8), ts(9)).await.unwrap();
        assert_eq!(trend, Trend::Mid);
    }

    #[tokio::test]
    async fn test_unknown_instrument_falls_back_to_mid() {
        let predictor = EmaTrendPredictor::new();
        let trend = predictor.predict("ETH-USD", ts(8), ts(9)).await.unwrap();
        assert_eq!(trend, Trend::Mid);
    }

    #[tokio::test]
    async fn test_crossover_rising_closes_go_long() {
        // Steadily rising closes: short EMA sits above long EMA
        let closes: Vec<SignalPoint> = (0..8)
            .map(|i| (ts(i), Decimal::from(100 + i as u64 * 10)))
            .collect();
        let predictor = EmaTrendPredictor::new().with_crossover("BTC-USD", &closes, 2, 4);

        let trend = predictor.predict("BTC-USD", ts(0), ts(7)).await.unwrap();
        assert_eq!(trend, Trend::Long);
    }

    #[tokio::test]
    async fn test_crossover_falling_closes_go_short() {
        let closes: Vec<SignalPoint> = (0..8)
            .map(|i| (ts(i), Decimal::from(200 - i as u64 * 10)))
            .collect();
        let predictor = EmaTrendPredictor::new().with_crossover("BTC-USD", &closes, 2, 4);

        let trend = predictor.predict("BTC-USD", ts(0), ts(7)).await.unwrap();
        assert_eq!(trend, Trend::Short);
    }
}
