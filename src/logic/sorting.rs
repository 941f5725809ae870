//! Sorting logic for bookmark rows
//!
//! Pure comparison functions for each sort mode.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::api::{AccessDetails, AccessType, AssetExtended};
use crate::SortMode;

/// Numeric price used for ordering: free is 0, unpriced is None
///
/// Non-finite prices ("NaN", "inf") count as unpriced.
pub fn price_value(details: Option<&AccessDetails>) -> Option<f64> {
    let details = details?;
    match details.access_type {
        AccessType::Free => Some(0.0),
        AccessType::Fixed => details
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite()),
        AccessType::NotSupported => None,
    }
}

/// Compare two rows for the given mode
///
/// `positions` maps a DID to its pinned index and breaks ties in every mode.
/// Unpriced rows sort after priced ones in both directions.
pub fn compare_rows(
    a: &AssetExtended,
    b: &AssetExtended,
    mode: SortMode,
    reverse: bool,
    positions: &HashMap<&str, usize>,
) -> Ordering {
    let pos_a = positions.get(a.did()).copied().unwrap_or(usize::MAX);
    let pos_b = positions.get(b.did()).copied().unwrap_or(usize::MAX);

    let primary = match mode {
        SortMode::BookmarkOrder => pos_a.cmp(&pos_b),
        SortMode::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
        SortMode::Symbol => a.symbol().to_lowercase().cmp(&b.symbol().to_lowercase()),
        SortMode::Price => {
            match (
                price_value(a.access_details.as_ref()),
                price_value(b.access_details.as_ref()),
            ) {
                (Some(pa), Some(pb)) => pa.total_cmp(&pb),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    };

    let primary = if reverse { primary.reverse() } else { primary };
    primary.then(pos_a.cmp(&pos_b))
}

/// Sort rows in place for the given mode
pub fn sort_rows(rows: &mut [AssetExtended], mode: SortMode, reverse: bool, bookmarks: &[String]) {
    let positions: HashMap<&str, usize> = bookmarks
        .iter()
        .enumerate()
        .rev()
        .map(|(idx, did)| (did.as_str(), idx))
        .collect();

    rows.sort_by(|a, b| compare_rows(a, b, mode, reverse, &positions));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Asset, Datatoken, Metadata};

    fn row(did: &str, name: &str, symbol: &str, price: Option<(AccessType, &str)>) -> AssetExtended {
        AssetExtended {
            asset: Asset {
                id: did.to_string(),
                chain_id: 1,
                nft_address: String::new(),
                metadata: Metadata {
                    name: name.to_string(),
                    ..Default::default()
                },
                services: vec![],
                datatokens: vec![Datatoken {
                    address: format!("0x{}", symbol),
                    name: format!("{} token", name),
                    symbol: symbol.to_string(),
                    service_id: String::new(),
                }],
                nft: None,
            },
            access_details: price.map(|(access_type, price)| AccessDetails {
                access_type,
                price: price.to_string(),
                base_token: None,
                datatoken: None,
                is_purchasable: true,
                is_owned: false,
                valid_order_tx: None,
            }),
        }
    }

    fn bookmarks() -> Vec<String> {
        vec!["did:op:1".into(), "did:op:2".into(), "did:op:3".into(), "did:op:4".into()]
    }

    fn sample() -> Vec<AssetExtended> {
        vec![
            row("did:op:3", "charlie", "CCC", Some((AccessType::Fixed, "5"))),
            row("did:op:1", "Bravo", "aaa", None),
            row("did:op:4", "delta", "DDD", Some((AccessType::Free, "0"))),
            row("did:op:2", "alpha", "BBB", Some((AccessType::Fixed, "12.5"))),
        ]
    }

    fn ids(rows: &[AssetExtended]) -> Vec<&str> {
        rows.iter().map(|r| r.did()).collect()
    }

    #[test]
    fn test_sort_bookmark_order() {
        let mut rows = sample();
        sort_rows(&mut rows, SortMode::BookmarkOrder, false, &bookmarks());
        assert_eq!(ids(&rows), vec!["did:op:1", "did:op:2", "did:op:3", "did:op:4"]);

        sort_rows(&mut rows, SortMode::BookmarkOrder, true, &bookmarks());
        assert_eq!(ids(&rows), vec!["did:op:4", "did:op:3", "did:op:2", "did:op:1"]);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let mut rows = sample();
        sort_rows(&mut rows, SortMode::Title, false, &bookmarks());
        assert_eq!(ids(&rows), vec!["did:op:2", "did:op:1", "did:op:3", "did:op:4"]);
    }

    #[test]
    fn test_sort_symbol() {
        let mut rows = sample();
        sort_rows(&mut rows, SortMode::Symbol, false, &bookmarks());
        assert_eq!(ids(&rows), vec!["did:op:1", "did:op:2", "did:op:3", "did:op:4"]);
    }

    #[test]
    fn test_sort_price_unpriced_last_both_directions() {
        let mut rows = sample();
        sort_rows(&mut rows, SortMode::Price, false, &bookmarks());
        assert_eq!(ids(&rows), vec!["did:op:4", "did:op:3", "did:op:2", "did:op:1"]);

        sort_rows(&mut rows, SortMode::Price, true, &bookmarks());
        assert_eq!(ids(&rows), vec!["did:op:2", "did:op:3", "did:op:4", "did:op:1"]);
    }

    #[test]
    fn test_price_value() {
        assert_eq!(price_value(None), None);
        let free = row("d", "n", "S", Some((AccessType::Free, "0")));
        assert_eq!(price_value(free.access_details.as_ref()), Some(0.0));
        let bad = row("d", "n", "S", Some((AccessType::Fixed, "n/a")));
        assert_eq!(price_value(bad.access_details.as_ref()), None);
    }

    #[test]
    fn test_non_finite_prices_sort_as_unpriced() {
        let nan = row("d", "n", "S", Some((AccessType::Fixed, "NaN")));
        assert_eq!(price_value(nan.access_details.as_ref()), None);
        let inf = row("d", "n", "S", Some((AccessType::Fixed, "inf")));
        assert_eq!(price_value(inf.access_details.as_ref()), None);

        let mut bookmarks = Vec::new();
        let mut rows = Vec::new();
        for i in 0..64 {
            let did = format!("did:op:{}", i);
            let price = if i % 3 == 0 { "NaN".to_string() } else { format!("{}", 64 - i) };
            rows.push(row(&did, "n", "S", Some((AccessType::Fixed, price.as_str()))));
            bookmarks.push(did);
        }

        sort_rows(&mut rows, SortMode::Price, false, &bookmarks);

        let priced = rows.iter().take_while(|r| price_value(r.access_details.as_ref()).is_some()).count();
        assert_eq!(priced, 42);
        assert!(rows[priced..]
            .iter()
            .all(|r| price_value(r.access_details.as_ref()).is_none()));
        assert_eq!(rows[0].did(), "did:op:62");
    }
}
