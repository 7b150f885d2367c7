//! Finds a conversion path through the rate graph and composes its rates.
use crate::core::currency::{CurrencyCode, CurrencyConverter, RateEdge};
use crate::core::error::ConversionError;
use crate::store::RateStore;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info};

/// A single step of a conversion path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
}

/// The result of a conversion along with the path used to reach it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionPath {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
    pub converted_amount: f64,
    pub hops: Vec<Hop>,
}

impl ConversionPath {
    /// Product of every rate along the path; 1.0 for an identity conversion.
    pub fn effective_rate(&self) -> f64 {
        self.hops.iter().map(|h| h.rate).product()
    }
}

/// Converts amounts by breadth-first search over a shared `RateStore`.
///
/// The converter never mutates the graph while converting. The
/// `CurrencyConverter` impl forwards configuration changes to the store.
#[derive(Clone)]
pub struct PathConverter {
    store: Arc<RateStore>,
}

impl PathConverter {
    pub fn new(store: Arc<RateStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<RateStore> {
        &self.store
    }

    /// Converts `amount` from `from` to `to` and reports the hops taken.
    ///
    /// Identical codes short-circuit without a graph lookup. Otherwise the
    /// graph is walked in FIFO order, so the first time the target is
    /// dequeued it was reached with the fewest possible hops. Each currency
    /// keeps the cumulative amount of the first edge that discovered it.
    pub fn find_path(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount: f64,
    ) -> Result<ConversionPath, ConversionError> {
        if from == to {
            return Ok(ConversionPath {
                from: from.clone(),
                to: to.clone(),
                amount,
                converted_amount: amount,
                hops: Vec::new(),
            });
        }

        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        let mut amounts: HashMap<CurrencyCode, f64> = HashMap::new();
        let mut reached_by: HashMap<CurrencyCode, Hop> = HashMap::new();

        queue.push_back(from.clone());
        amounts.insert(from.clone(), amount);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }

            let Some(&current_amount) = amounts.get(&current) else {
                continue;
            };
            if &current == to {
                let hops = Self::trace_hops(&reached_by, from, to);
                debug!(hops = hops.len(), visited = visited.len(), "Found conversion path");
                return Ok(ConversionPath {
                    from: from.clone(),
                    to: to.clone(),
                    amount,
                    converted_amount: current_amount,
                    hops,
                });
            }

            let Some(destinations) = self.store.destinations(&current) else {
                debug!(currency = %current, "No outgoing rates");
                continue;
            };

            for (next, rate) in destinations {
                if !amounts.contains_key(&next) {
                    amounts.insert(next.clone(), current_amount * rate);
                    reached_by.insert(
                        next.clone(),
                        Hop {
                            from: current.clone(),
                            to: next.clone(),
                            rate,
                        },
                    );
                }
                queue.push_back(next);
            }
        }

        debug!(%from, %to, visited = visited.len(), "Conversion path not found");
        Err(ConversionError::NoConversionPath {
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// Walks the discovery links back from `to` to `from`.
    fn trace_hops(
        reached_by: &HashMap<CurrencyCode, Hop>,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Vec<Hop> {
        let mut hops = Vec::new();
        let mut cursor = to;
        while cursor != from {
            match reached_by.get(cursor) {
                Some(hop) => {
                    hops.push(hop.clone());
                    cursor = &hop.from;
                }
                None => break,
            }
        }
        hops.reverse();
        hops
    }
}

impl CurrencyConverter for PathConverter {
    fn clear_configuration(&self) {
        self.store.clear();
    }

    fn update_configuration(&self, rates: &[RateEdge]) {
        self.store.update_rates(rates.iter().cloned());
    }

    fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ConversionError> {
        let from = CurrencyCode::new(from);
        let to = CurrencyCode::new(to);
        let path = self.find_path(&from, &to, amount)?;
        info!(
            %from,
            %to,
            amount,
            converted = path.converted_amount,
            hops = path.hops.len(),
            "Conversion completed"
        );
        Ok(path.converted_amount)
    }
}
