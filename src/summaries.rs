//! Summary attachment
//!
//! Summaries come from an external generative step. The core only defines the
//! seam and attaches whatever that step returns.

use crate::extractors::Symbol;
use crate::store::SymbolStore;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Produces a natural-language summary for one symbol
pub trait Summarizer: Send + Sync {
    fn summarize(&self, symbol: &Symbol) -> anyhow::Result<String>;
}

impl<F> Summarizer for F
where
    F: Fn(&Symbol) -> anyhow::Result<String> + Send + Sync,
{
    fn summarize(&self, symbol: &Symbol) -> anyhow::Result<String> {
        self(symbol)
    }
}

/// Summarize every symbol in parallel and attach the results
///
/// A failed summary is logged and left unset. Returns how many were attached.
pub fn summarize_all(store: &mut SymbolStore, summarizer: &dyn Summarizer) -> usize {
    // Collected in store order, so each result lands by position
    let results: Vec<anyhow::Result<String>> = store
        .as_slice()
        .par_iter()
        .map(|symbol| summarizer.summarize(symbol))
        .collect();

    let mut attached = 0;
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(summary) => {
                if store.attach_summary_at(index, summary) {
                    attached += 1;
                }
            }
            Err(e) => warn!("Failed to summarize {}: {:#}", store.as_slice()[index].id, e),
        }
    }

    debug!("Attached {} of {} summaries", attached, store.len());
    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ExtractorManager;

    fn store() -> SymbolStore {
        let symbols = ExtractorManager::new()
            .extract_symbols(
                "Car.java",
                "class Car { void drive() {} void stop() {} }",
            )
            .unwrap();
        SymbolStore::from(symbols)
    }

    #[test]
    fn test_summarize_all_attaches_every_summary() {
        let mut store = store();
        let summarizer = |symbol: &Symbol| -> anyhow::Result<String> {
            Ok(format!("{} {}", symbol.kind, symbol.name))
        };

        assert_eq!(summarize_all(&mut store, &summarizer), 3);
        assert_eq!(
            store.get("Car.java::Car.drive").unwrap().summary.as_deref(),
            Some("method drive")
        );
        assert_eq!(
            store.get("Car.java::Car").unwrap().summary.as_deref(),
            Some("class Car")
        );
    }

    #[test]
    fn test_each_summary_lands_on_its_own_symbol() {
        let mut store = store();
        let summarizer =
            |symbol: &Symbol| -> anyhow::Result<String> { Ok(format!("about {}", symbol.id)) };

        assert_eq!(summarize_all(&mut store, &summarizer), store.len());
        for symbol in store.iter() {
            assert_eq!(
                symbol.summary.as_deref(),
                Some(format!("about {}", symbol.id).as_str())
            );
        }
    }

    #[test]
    fn test_failed_summaries_stay_unset() {
        let mut store = store();
        let summarizer = |symbol: &Symbol| -> anyhow::Result<String> {
            if symbol.name == "stop" {
                anyhow::bail!("model unavailable")
            }
            Ok("ok".to_string())
        };

        assert_eq!(summarize_all(&mut store, &summarizer), 2);
        assert!(store.get("Car.java::Car.stop").unwrap().summary.is_none());
        // Order and content untouched
        let names: Vec<&str> = store.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["drive", "stop", "Car"]);
    }
}
