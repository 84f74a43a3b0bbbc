//! Item payload parsing and display-list replication.

use serde::Deserialize;

use crate::types::ItemRecord;

/// Wrapper document: the payload is an object holding the item array.
#[derive(Deserialize)]
struct ItemPayload {
    items: Vec<ItemRecord>,
}

/// Parse an item payload document into base records.
pub fn parse_items(json: &str) -> Result<Vec<ItemRecord>, CatalogError> {
    let payload: ItemPayload = serde_json::from_str(json)?;
    if payload.items.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(payload.items)
}

/// Expand base records into a display list of `base.len() * scale` records.
///
/// Block `j` of the output holds a full copy of the base list, so
/// `out[i + j * base.len()] == base[i]` for every `i` and every
/// `j in 0..scale`.
pub fn replicate(base: &[ItemRecord], scale: usize) -> Result<Vec<ItemRecord>, CatalogError> {
    if scale == 0 {
        return Err(CatalogError::InvalidScale(scale));
    }
    if base.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut expanded = Vec::with_capacity(base.len() * scale);
    for _ in 0..scale {
        expanded.extend(base.iter().cloned());
    }

    Ok(expanded)
}

/// Parse and expand in one step.
pub fn load(json: &str, scale: usize) -> Result<Vec<ItemRecord>, CatalogError> {
    let base = parse_items(json)?;
    replicate(&base, scale)
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed item payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item payload contains no items")]
    Empty,
    #[error("replication scale must be at least 1, got {0}")]
    InvalidScale(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatValue;
    use proptest::prelude::*;

    fn record(name: &str) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            description: format!("{} description", name),
            icon_index: 0,
            stat: StatValue::Integer(1),
        }
    }

    const PAYLOAD: &str = r#"{
        "items": [
            { "name": "Sword", "description": "Sharp.", "iconIndex": 0, "stat": 12 },
            { "name": "Potion", "description": "Restores health.", "iconIndex": 1, "stat": "2d4" }
        ]
    }"#;

    #[test]
    fn test_parse_items_reads_all_fields() {
        let items = parse_items(PAYLOAD).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Sword");
        assert_eq!(items[1].icon_index, 1);
        assert_eq!(items[1].stat, StatValue::Text("2d4".to_string()));
    }

    #[test]
    fn test_parse_items_malformed_document() {
        let result = parse_items("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_parse_items_wrong_shape() {
        // A bare array is not a valid payload; the wrapper object is required.
        let result = parse_items(r#"[ { "name": "x" } ]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_parse_items_empty_array() {
        let result = parse_items(r#"{ "items": [] }"#);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_replicate_example_layout() {
        let base = vec![record("A"), record("B")];
        let expanded = replicate(&base, 3).unwrap();
        let names: Vec<&str> = expanded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "A", "B", "A", "B"]);
    }

    #[test]
    fn test_replicate_scale_one_is_identity() {
        let base = vec![record("A"), record("B"), record("C")];
        let expanded = replicate(&base, 1).unwrap();
        assert_eq!(expanded, base);
    }

    #[test]
    fn test_replicate_scale_zero_rejected() {
        let base = vec![record("A")];
        let result = replicate(&base, 0);
        assert!(matches!(result, Err(CatalogError::InvalidScale(0))));
    }

    #[test]
    fn test_replicate_empty_base_rejected() {
        let result = replicate(&[], 4);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_load_parses_then_replicates() {
        let items = load(PAYLOAD, 3).unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[4].name, "Sword");
        assert_eq!(items[5].name, "Potion");
    }

    proptest! {
        #[test]
        fn prop_replicate_length(names in prop::collection::vec("[a-z]{1,8}", 1..8), scale in 1usize..16) {
            let base: Vec<ItemRecord> = names.iter().map(|n| record(n)).collect();
            let expanded = replicate(&base, scale).unwrap();
            prop_assert_eq!(expanded.len(), base.len() * scale);
        }

        #[test]
        fn prop_replicate_index_mapping(names in prop::collection::vec("[a-z]{1,8}", 1..8), scale in 1usize..16) {
            let base: Vec<ItemRecord> = names.iter().map(|n| record(n)).collect();
            let expanded = replicate(&base, scale).unwrap();
            for j in 0..scale {
                for (i, base_record) in base.iter().enumerate() {
                    prop_assert_eq!(&expanded[i + j * base.len()], base_record);
                }
            }
        }
    }
}
