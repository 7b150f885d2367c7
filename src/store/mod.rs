pub mod seed;

pub use seed::DEFAULT_RATES;

use crate::core::currency::{CurrencyCode, RateEdge};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

type Destinations = BTreeMap<CurrencyCode, f64>;

/// A thread-safe table of directed conversion rates.
///
/// Maps a source currency to its outgoing edges. A single lock guards the
/// whole graph, so batch updates and clears are atomic with respect to
/// readers and other writers.
pub struct RateStore {
    rates: RwLock<HashMap<CurrencyCode, Destinations>>,
}

impl RateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            rates: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store seeded with the USD -> CAD -> GBP -> EUR -> USD chain.
    pub fn with_default_rates() -> Self {
        let store = Self::new();
        store.update_rates(seed::default_edges());
        store
    }

    /// Removes every edge.
    pub fn clear(&self) {
        let mut rates = self.rates.write();
        rates.clear();
        debug!("Rate store CLEAR");
    }

    /// Inserts or replaces each edge in order. Later edges for the same
    /// pair win; other destinations of a source are left untouched.
    pub fn update_rates<I>(&self, edges: I)
    where
        I: IntoIterator<Item = RateEdge>,
    {
        let mut rates = self.rates.write();
        for edge in edges {
            debug!(from = %edge.from, to = %edge.to, rate = edge.rate, "Rate store PUT");
            rates
                .entry(edge.from)
                .or_default()
                .insert(edge.to, edge.rate);
        }
    }

    pub fn set_rate(&self, from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>, rate: f64) {
        self.update_rates([RateEdge::new(from, to, rate)]);
    }

    /// Returns a snapshot of the outgoing edges of `from`, or `None` if it
    /// has never been used as a source.
    pub fn destinations(&self, from: &CurrencyCode) -> Option<Vec<(CurrencyCode, f64)>> {
        let rates = self.rates.read();
        rates
            .get(from)
            .map(|dests| dests.iter().map(|(to, rate)| (to.clone(), *rate)).collect())
    }

    pub fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<f64> {
        let rates = self.rates.read();
        rates.get(from).and_then(|dests| dests.get(to)).copied()
    }

    /// Returns every edge, sorted by source then destination.
    pub fn edges(&self) -> Vec<RateEdge> {
        let rates = self.rates.read();
        let mut edges: Vec<RateEdge> = rates
            .iter()
            .flat_map(|(from, dests)| {
                dests.iter().map(|(to, rate)| RateEdge {
                    from: from.clone(),
                    to: to.clone(),
                    rate: *rate,
                })
            })
            .collect();
        edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.rates.read().values().map(BTreeMap::len).sum()
    }

    /// Number of currencies with at least one outgoing edge.
    pub fn currency_count(&self) -> usize {
        self.rates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

impl Default for RateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s)
    }

    #[test]
    fn test_update_creates_and_overwrites() {
        let store = RateStore::new();
        assert!(store.is_empty());

        store.update_rates([
            RateEdge::new("USD", "CAD", 1.34),
            RateEdge::new("USD", "EUR", 0.86),
        ]);
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.currency_count(), 1);

        store.set_rate("USD", "CAD", 2.0);
        assert_eq!(store.rate(&code("USD"), &code("CAD")), Some(2.0));
        assert_eq!(store.rate(&code("USD"), &code("EUR")), Some(0.86));
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_later_edge_in_batch_wins() {
        let store = RateStore::new();
        store.update_rates([
            RateEdge::new("USD", "CAD", 1.0),
            RateEdge::new("USD", "CAD", 3.0),
        ]);
        assert_eq!(store.rate(&code("USD"), &code("CAD")), Some(3.0));
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let store = RateStore::new();
        store.set_rate("usd", "cad", 1.34);
        assert_eq!(store.rate(&code("USD"), &code("CAD")), Some(1.34));
    }

    #[test]
    fn test_destinations_snapshot() {
        let store = RateStore::with_default_rates();
        let dests = store.destinations(&code("USD")).unwrap();
        assert_eq!(dests, vec![(code("CAD"), 1.34)]);

        assert!(store.destinations(&code("JPY")).is_none());
    }

    #[test]
    fn test_default_rates() {
        let store = RateStore::with_default_rates();
        assert_eq!(store.edge_count(), 4);
        assert_eq!(store.rate(&code("EUR"), &code("USD")), Some(1.16));
        // Edges are directed
        assert_eq!(store.rate(&code("CAD"), &code("USD")), None);
    }

    #[test]
    fn test_clear() {
        let store = RateStore::with_default_rates();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.currency_count(), 0);
        assert!(store.edges().is_empty());
    }

    #[test]
    fn test_edges_sorted() {
        let store = RateStore::with_default_rates();
        let froms: Vec<String> = store.edges().into_iter().map(|e| e.from.into()).collect();
        assert_eq!(froms, vec!["CAD", "EUR", "GBP", "USD"]);
    }

    #[test]
    fn test_concurrent_disjoint_updates_are_not_lost() {
        let store = Arc::new(RateStore::new());
        let targets: Vec<String> = (0..26u8)
            .map(|i| format!("X{}A", (b'A' + i) as char))
            .collect();

        thread::scope(|s| {
            for (i, target) in targets.iter().enumerate() {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    store.set_rate("USD", target.as_str(), i as f64 + 1.0);
                });
            }
        });

        assert_eq!(store.edge_count(), targets.len());
        for (i, target) in targets.iter().enumerate() {
            assert_eq!(
                store.rate(&code("USD"), &code(target)),
                Some(i as f64 + 1.0)
            );
        }
    }
}
