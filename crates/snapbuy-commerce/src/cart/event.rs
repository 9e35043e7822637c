//! Cart change events.

use crate::ids::ProductId;
use serde::Serialize;

/// An effective change to a cart.
///
/// No-op calls (removing an absent product, clearing an empty cart) do not
/// produce events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new line was appended.
    ItemAdded { product_id: ProductId, quantity: u32 },
    /// An existing line changed quantity, by merge or by explicit update.
    QuantityUpdated {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
    /// A line was removed.
    ItemRemoved { product_id: ProductId, quantity: u32 },
    /// Every line was removed.
    CartCleared { removed_lines: usize },
}

impl CartEvent {
    /// Product touched by the event, if it concerns a single line.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::QuantityUpdated { product_id, .. }
            | CartEvent::ItemRemoved { product_id, .. } => Some(*product_id),
            CartEvent::CartCleared { .. } => None,
        }
    }
}
