use std::collections::HashMap;

use chrono::NaiveDate;

use crate::series::PriceSeries;
use crate::types::FundamentalSnapshot;

/// Source of fundamentals snapshots. Implementations are injected into the
/// scorer/simulator rather than held in process-wide caches.
///
/// `asof` lets point-in-time implementations serve the snapshot that was
/// actually known at a date. The bundled [`SnapshotTable`] ignores it and
/// always returns the latest snapshot.
pub trait FundamentalsProvider: Send + Sync {
    fn fundamentals(&self, symbol: &str, asof: NaiveDate) -> Option<FundamentalSnapshot>;
}

/// Source of prices with forward-fill semantics.
pub trait PriceProvider: Send + Sync {
    /// Price at or before `date`; `None` when no observation exists that early.
    fn price_asof(&self, symbol: &str, date: NaiveDate) -> Option<f64>;
}

/// In-memory fundamentals table: one latest snapshot per symbol.
#[derive(Debug, Clone, Default)]
pub struct SnapshotTable {
    snapshots: HashMap<String, FundamentalSnapshot>,
}

impl SnapshotTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, snapshot: FundamentalSnapshot) {
        self.snapshots.insert(snapshot.symbol.clone(), snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl FromIterator<FundamentalSnapshot> for SnapshotTable {
    fn from_iter<T: IntoIterator<Item = FundamentalSnapshot>>(iter: T) -> Self {
        let mut table = Self::new();
        for snapshot in iter {
            table.insert(snapshot);
        }
        table
    }
}

impl FundamentalsProvider for SnapshotTable {
    fn fundamentals(&self, symbol: &str, _asof: NaiveDate) -> Option<FundamentalSnapshot> {
        self.snapshots.get(symbol).cloned()
    }
}

/// In-memory price table: one [`PriceSeries`] per symbol.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    series: HashMap<String, PriceSeries>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries) {
        self.series.insert(symbol.into(), series);
    }

    pub fn series(&self, symbol: &str) -> Option<&PriceSeries> {
        self.series.get(symbol)
    }
}

impl PriceProvider for PriceTable {
    fn price_asof(&self, symbol: &str, date: NaiveDate) -> Option<f64> {
        self.series.get(symbol).and_then(|s| s.asof(date))
    }
}
