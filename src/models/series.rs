//! Price history types shared by real and synthetic series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of trailing points kept when preparing chart data
pub const CHART_WINDOW: usize = 120;

// == Price Point ==
/// A single observation, `{"t": epoch_ms, "p": price}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "t", with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    #[serde(rename = "p")]
    pub price: f64,
}

// == Series ==
/// Price history for one symbol, sorted ascending by time.
///
/// A series is either entirely upstream data or entirely generated; the
/// `synthetic` flag says which. Nothing combines the two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    symbol: String,
    points: Vec<PricePoint>,
    synthetic: bool,
}

impl Series {
    /// Wraps upstream points, sorting them by time.
    pub fn real(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.time);
        Self {
            symbol: symbol.into(),
            points,
            synthetic: false,
        }
    }

    pub(crate) fn synthetic(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
            synthetic: true,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// True when the points were generated rather than fetched.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|point| point.price)
    }
}

// == Chart Data ==
/// Label/value columns ready for a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub symbol: String,
    /// Calendar dates (`YYYY-MM-DD`) of the plotted points
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Carried over from the series so the UI can flag placeholder data
    pub synthetic: bool,
}

impl ChartData {
    /// Builds chart columns from the last `CHART_WINDOW` points of `series`.
    pub fn from_series(series: &Series) -> Self {
        let start = series.points.len().saturating_sub(CHART_WINDOW);
        let window = &series.points[start..];

        Self {
            symbol: series.symbol.clone(),
            labels: window
                .iter()
                .map(|point| point.time.format("%Y-%m-%d").to_string())
                .collect(),
            values: window.iter().map(|point| point.price).collect(),
            synthetic: series.synthetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn point(day: u32, price: f64) -> PricePoint {
        PricePoint {
            time: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
            price,
        }
    }

    #[test]
    fn test_real_series_sorted() {
        let series = Series::real("BTC", vec![point(3, 3.0), point(1, 1.0), point(2, 2.0)]);

        let prices: Vec<f64> = series.points().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.last_price(), Some(3.0));
        assert!(!series.is_synthetic());
    }

    #[test]
    fn test_point_wire_format() {
        let json = serde_json::to_value(point(1, 10.5)).unwrap();
        assert_eq!(json["p"], 10.5);
        assert_eq!(json["t"], 1_709_251_200_000i64);
    }

    #[test]
    fn test_chart_data_keeps_tail_window() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let points = (0..200)
            .map(|i| PricePoint {
                time: start + Duration::days(i),
                price: i as f64,
            })
            .collect();
        let chart = ChartData::from_series(&Series::real("GOLD", points));

        assert_eq!(chart.values.len(), CHART_WINDOW);
        assert_eq!(chart.values[0], 80.0);
        assert_eq!(chart.labels.last().map(String::as_str), Some("2023-07-19"));
        assert!(!chart.synthetic);
    }

    #[test]
    fn test_chart_data_short_series() {
        let chart = ChartData::from_series(&Series::real("SOL", vec![point(5, 150.0)]));
        assert_eq!(chart.labels, vec!["2024-03-05".to_string()]);
        assert_eq!(chart.values, vec![150.0]);
    }
}
