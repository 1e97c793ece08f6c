//! Wire payloads for the cart endpoints.
//!
//! `/cart/add.js` takes a list of variant lines; `/cart/update.js` takes the
//! complete absolute-quantity map of every visible row. The update body is
//! deliberately not a delta: concurrent edits to different rows cannot
//! clobber one another through stale deltas, only through stale DOM reads,
//! and successful mutations reload the page anyway.

use crate::ids::{ItemKey, VariantId};
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /cart/add.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPayload {
    /// Lines to add.
    pub items: Vec<AddLine>,
}

/// One line of an add request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLine {
    /// Variant being purchased, as the literal attribute string.
    pub id: VariantId,
    /// Requested quantity.
    pub quantity: Quantity,
}

impl AddPayload {
    /// A single line of quantity one, which is all the add trigger ever sends.
    pub fn single(variant: VariantId) -> Self {
        Self {
            items: vec![AddLine {
                id: variant,
                quantity: Quantity::new(1),
            }],
        }
    }
}

/// Body of `POST /cart/update.js`: the desired state of every visible row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdatePayload {
    /// Item key to absolute quantity. Zero removes the line.
    pub updates: BTreeMap<ItemKey, Quantity>,
}

impl UpdatePayload {
    /// Build the payload from every visible row, one entry per row.
    pub fn from_rows(rows: impl IntoIterator<Item = (ItemKey, Quantity)>) -> Self {
        Self {
            updates: rows.into_iter().collect(),
        }
    }

    /// Overwrite one line's target quantity.
    pub fn set(&mut self, key: ItemKey, quantity: Quantity) {
        self.updates.insert(key, quantity);
    }

    /// The target quantity recorded for a line, if present.
    pub fn get(&self, key: &ItemKey) -> Option<Quantity> {
        self.updates.get(key).copied()
    }

    /// Number of lines in the payload.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// True when no rows were visible.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Response of `GET /cart.js` (and of `/cart/update.js`).
///
/// The core only reads `item_count`; every other field passes through
/// untouched in `rest`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Total number of items in the cart.
    #[serde(default)]
    pub item_count: u32,
    /// All other snapshot fields, preserved verbatim.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl CartSnapshot {
    /// True when the server reports an empty cart.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_payload_shape() {
        let body = serde_json::to_value(AddPayload::single(VariantId::new("42"))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"items": [{"id": "42", "quantity": 1}]})
        );
    }

    #[test]
    fn test_update_payload_shape() {
        let payload = UpdatePayload::from_rows([
            (ItemKey::new("abc"), Quantity::new(3)),
            (ItemKey::new("def"), Quantity::ZERO),
        ]);
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body, serde_json::json!({"updates": {"abc": 3, "def": 0}}));
    }

    #[test]
    fn test_encoder_one_entry_per_row() {
        let rows = vec![
            (ItemKey::new("a"), Quantity::new(1)),
            (ItemKey::new("b"), Quantity::new(2)),
            (ItemKey::new("c"), Quantity::new(0)),
        ];
        let payload = UpdatePayload::from_rows(rows.clone());
        assert_eq!(payload.len(), 3);
        for (key, qty) in rows {
            assert_eq!(payload.get(&key), Some(qty));
        }
    }

    #[test]
    fn test_update_payload_round_trip() {
        let payload = UpdatePayload::from_rows([
            (ItemKey::new("abc"), Quantity::new(7)),
            (ItemKey::new("xyz"), Quantity::new(0)),
        ]);
        let json = serde_json::to_string(&payload).unwrap();
        let back: UpdatePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_set_overwrites_row() {
        let mut payload = UpdatePayload::from_rows([(ItemKey::new("abc"), Quantity::new(2))]);
        payload.set(ItemKey::new("abc"), Quantity::new(3));
        assert_eq!(payload.get(&ItemKey::new("abc")), Some(Quantity::new(3)));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn test_snapshot_reads_item_count_and_keeps_rest() {
        let snap: CartSnapshot = serde_json::from_str(
            r#"{"item_count": 5, "total_price": 1999, "currency": "EUR"}"#,
        )
        .unwrap();
        assert_eq!(snap.item_count, 5);
        assert!(!snap.is_empty());
        assert_eq!(snap.rest["total_price"], 1999);
        assert_eq!(snap.rest["currency"], "EUR");
    }

    #[test]
    fn test_snapshot_missing_count_defaults_to_zero() {
        let snap: CartSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snap.is_empty());
    }
}
