use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ordered date-to-price series with forward-fill lookup.
///
/// B3 names routinely have no trade on a given calendar date (holidays,
/// illiquid small caps, delistings), so the canonical query is "price as of
/// this date": the observation at the date itself, or the most recent one
/// before it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: BTreeMap<NaiveDate, f64>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting the same date twice replaces the earlier observation.
    pub fn insert(&mut self, date: NaiveDate, price: f64) {
        self.points.insert(date, price);
    }

    /// Price at `date`, forward-filled from the last observation at or
    /// before it. `None` when the series has no observation that early.
    pub fn asof(&self, date: NaiveDate) -> Option<f64> {
        self.points.range(..=date).next_back().map(|(_, p)| *p)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &f64)> {
        self.points.iter()
    }
}

impl FromIterator<(NaiveDate, f64)> for PriceSeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, f64)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_asof_exact_and_forward_fill() {
        let series: PriceSeries = [
            (d(2024, 1, 2), 10.0),
            (d(2024, 1, 10), 11.0),
            (d(2024, 2, 1), 12.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(series.asof(d(2024, 1, 2)), Some(10.0));
        // Gap between observations forward-fills from Jan 10
        assert_eq!(series.asof(d(2024, 1, 20)), Some(11.0));
        assert_eq!(series.asof(d(2024, 3, 1)), Some(12.0));
    }

    #[test]
    fn test_asof_before_first_observation() {
        let series: PriceSeries = [(d(2024, 1, 10), 11.0)].into_iter().collect();
        assert_eq!(series.asof(d(2024, 1, 1)), None);
    }

    #[test]
    fn test_duplicate_date_replaces() {
        let mut series = PriceSeries::new();
        series.insert(d(2024, 1, 2), 10.0);
        series.insert(d(2024, 1, 2), 10.5);
        assert_eq!(series.len(), 1);
        assert_eq!(series.asof(d(2024, 1, 2)), Some(10.5));
    }
}
