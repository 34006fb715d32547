// ============================================================================
// Order Registry
// Authoritative id -> order mapping for every live order
// ============================================================================

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{Order, OrderId};

/// Live orders keyed by id.
///
/// An entry is present iff the order is live (resting or being matched).
/// The router owns the registry and lends it to a symbol's book for the
/// duration of each call.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: HashMap<OrderId, Order>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    /// Insert `order` unless its id is already live.
    /// Returns false and leaves the existing entry untouched on a duplicate.
    pub fn insert_if_absent(&mut self, order: Order) -> bool {
        match self.orders.entry(order.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(order);
                true
            },
        }
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }
}
