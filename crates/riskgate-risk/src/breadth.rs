//! Breadth-oversold scanner.
//!
//! Counts how much of the configured watch-set is simultaneously in an
//! oversold technical state. Everything here is lenient-degrade: a missing
//! watch-list or a corrupt per-symbol snapshot silently excludes that
//! symbol rather than failing the cycle.

use riskgate_core::{SymbolSignals, WatchList};
use rust_decimal::Decimal;

/// RSI-14 below this counts as oversold (together with `%b`).
const RSI_OVERSOLD: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Build the deduplicated, case-normalized watch-set from both categories.
///
/// Sorted for deterministic scan order.
pub fn watch_set(watchlist: &WatchList) -> Vec<String> {
    let mut symbols: Vec<String> = watchlist
        .categories
        .focus
        .iter()
        .chain(watchlist.categories.whitelist.iter())
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    symbols.sort();
    symbols.dedup();
    symbols
}

/// Scan the watch-set and return `(oversold_count, total_considered)`.
///
/// `lookup` resolves a symbol to its persisted technical snapshot; `None`
/// covers a missing or unreadable snapshot. A symbol counts toward the
/// total only when both `rsi14` and `%b` are present; it is oversold iff
/// `rsi14 < 30` and `%b < 0`.
pub fn scan_breadth<F>(symbols: &[String], mut lookup: F) -> (u32, u32)
where
    F: FnMut(&str) -> Option<SymbolSignals>,
{
    let mut oversold = 0u32;
    let mut total = 0u32;

    for symbol in symbols {
        let Some(signals) = lookup(symbol) else {
            continue;
        };
        let Some((rsi, percent_b)) = signals.hourly_pair() else {
            continue;
        };

        total += 1;
        if rsi < RSI_OVERSOLD && percent_b < Decimal::ZERO {
            oversold += 1;
        }
    }

    (oversold, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskgate_core::{BollingerBands, HourlyIndicators};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn signals(rsi: Decimal, percent_b: Decimal) -> SymbolSignals {
        SymbolSignals {
            hourly: Some(HourlyIndicators {
                rsi14: Some(rsi),
                bb: Some(BollingerBands {
                    percent_b: Some(percent_b),
                }),
            }),
        }
    }

    fn watchlist(focus: &[&str], whitelist: &[&str]) -> WatchList {
        let mut wl = WatchList::default();
        wl.categories.focus = focus.iter().map(|s| s.to_string()).collect();
        wl.categories.whitelist = whitelist.iter().map(|s| s.to_string()).collect();
        wl
    }

    #[test]
    fn test_watch_set_dedup_and_normalize() {
        let wl = watchlist(&["btcusdt", "ETHUSDT"], &["BTCUSDT", " solusdt "]);
        assert_eq!(watch_set(&wl), vec!["BTCUSDT", "ETHUSDT", "SOLUSDT"]);
    }

    #[test]
    fn test_watch_set_empty_watchlist() {
        assert!(watch_set(&WatchList::default()).is_empty());
    }

    #[test]
    fn test_oversold_requires_both_conditions() {
        let mut data = HashMap::new();
        data.insert("A".to_string(), signals(dec!(25), dec!(-0.2))); // oversold
        data.insert("B".to_string(), signals(dec!(25), dec!(0.1))); // rsi only
        data.insert("C".to_string(), signals(dec!(45), dec!(-0.2))); // %b only
        data.insert("D".to_string(), signals(dec!(45), dec!(0.5))); // neither

        let symbols: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let (oversold, total) = scan_breadth(&symbols, |s| data.get(s).cloned());
        assert_eq!((oversold, total), (1, 4));
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        let symbols = vec!["A".to_string(), "B".to_string()];
        let mut data = HashMap::new();
        data.insert("A".to_string(), signals(dec!(30), dec!(-0.1))); // rsi == 30
        data.insert("B".to_string(), signals(dec!(29.9), dec!(0))); // %b == 0

        let (oversold, total) = scan_breadth(&symbols, |s| data.get(s).cloned());
        assert_eq!((oversold, total), (0, 2));
    }

    #[test]
    fn test_missing_snapshot_excluded_from_total() {
        let symbols = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let (oversold, total) = scan_breadth(&symbols, |s| {
            (s == "B").then(|| signals(dec!(20), dec!(-0.5)))
        });
        assert_eq!((oversold, total), (1, 1));
    }

    #[test]
    fn test_partial_indicators_excluded() {
        let symbols = vec!["A".to_string()];
        let partial = SymbolSignals {
            hourly: Some(HourlyIndicators {
                rsi14: Some(dec!(20)),
                bb: None,
            }),
        };
        let (oversold, total) = scan_breadth(&symbols, |_| Some(partial.clone()));
        assert_eq!((oversold, total), (0, 0));
    }

    #[test]
    fn test_empty_watch_set_is_zero_over_zero() {
        let (oversold, total) = scan_breadth(&[], |_| None);
        assert_eq!((oversold, total), (0, 0));
    }
}
