// ============================================================================
// Order Book Domain Model
// ============================================================================

use std::collections::{BTreeMap, VecDeque};

use super::{OrderId, Side};
use crate::numeric::Price;

// ============================================================================
// Price Level
// ============================================================================

/// FIFO queue of the orders resting at one price
#[derive(Debug, Clone)]
pub struct PriceLevel {
    pub price: Price,
    orders: VecDeque<OrderId>,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    /// Queue an order behind everything already resting at this price
    pub fn push_back(&mut self, id: OrderId) {
        self.orders.push_back(id);
    }

    /// Oldest order at this price
    pub fn front(&self) -> Option<OrderId> {
        self.orders.front().copied()
    }

    pub fn pop_front(&mut self) -> Option<OrderId> {
        self.orders.pop_front()
    }

    /// Remove `id` wherever it sits in the queue.
    /// Returns false if the id is not queued here.
    pub fn remove(&mut self, id: OrderId) -> bool {
        match self.orders.iter().position(|queued| *queued == id) {
            Some(index) => self.orders.remove(index).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Order ids oldest first
    pub fn iter(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.orders.iter().copied()
    }
}

// ============================================================================
// Order Book Side
// ============================================================================

/// One side (bids or asks) of a symbol's book.
///
/// Levels are kept in a `BTreeMap` keyed by price; the best level is the
/// highest key for bids and the lowest key for asks. The map never holds an
/// empty level.
#[derive(Debug, Clone)]
pub struct BookSide {
    levels: BTreeMap<Price, PriceLevel>,
    pub side: Side,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        Self {
            levels: BTreeMap::new(),
            side,
        }
    }

    /// Append an order to the back of the level at `price`, creating it if needed
    pub fn enqueue(&mut self, id: OrderId, price: Price) {
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(id);
    }

    /// Get the best (top-of-book) price
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Get the best price level
    pub fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values_mut().next_back(),
            Side::Sell => self.levels.values_mut().next(),
        }
    }

    /// Drop the level at `price` if it no longer holds any order
    pub fn remove_level_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// Remove `id` from the level at `price`, dropping the level if it empties.
    /// Returns false if the order was not queued at that price.
    pub fn remove_order(&mut self, id: OrderId, price: Price) -> bool {
        let removed = match self.levels.get_mut(&price) {
            Some(level) => level.remove(id),
            None => false,
        };
        self.remove_level_if_empty(price);
        removed
    }

    /// Levels from best to worst price
    pub fn levels(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
