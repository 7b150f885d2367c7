use crate::core::currency::RateEdge;

/// Default rate set: a single chain USD -> CAD -> GBP -> EUR -> USD.
pub const DEFAULT_RATES: [(&str, &str, f64); 4] = [
    ("USD", "CAD", 1.34),
    ("CAD", "GBP", 0.58),
    ("GBP", "EUR", 0.43),
    ("EUR", "USD", 1.16),
];

pub fn default_edges() -> Vec<RateEdge> {
    DEFAULT_RATES
        .iter()
        .map(|(from, to, rate)| RateEdge::new(*from, *to, *rate))
        .collect()
}
