// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::Price;
use chrono::{DateTime, Utc};
use std::fmt;

use super::Symbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order quantity in whole units
pub type Quantity = u16;

// ============================================================================
// Value Objects
// ============================================================================

/// Client-assigned order identifier, unique across every symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderId(u32);

impl OrderId {
    /// Placeholder id carried by errors that are not tied to an order
    pub const NONE: Self = Self(0);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Single-letter wire tag (`B` / `S`)
    pub const fn as_char(self) -> char {
        match self {
            Side::Buy => 'B',
            Side::Sell => 'S',
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Order Entity
// ============================================================================

/// Limit order record.
///
/// The limit price and original quantity never change; only the remaining
/// quantity decreases as the order is matched.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    /// Quantity at submission
    pub quantity: Quantity,
    pub timestamp: DateTime<Utc>,

    remaining_quantity: Quantity,
    sequence_number: u64,
}

impl Order {
    pub fn new(id: OrderId, symbol: Symbol, side: Side, quantity: Quantity, price: Price) -> Self {
        Self {
            id,
            symbol,
            side,
            price,
            quantity,
            timestamp: Utc::now(),
            remaining_quantity: quantity,
            sequence_number: 0,
        }
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    pub fn filled_quantity(&self) -> Quantity {
        self.quantity - self.remaining_quantity
    }

    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Arrival sequence assigned by the router
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub(crate) fn set_sequence_number(&mut self, seq: u64) {
        self.sequence_number = seq;
    }

    /// Fill `quantity` of this order.
    /// Returns false (and changes nothing) if less than `quantity` remains.
    pub fn try_fill(&mut self, quantity: Quantity) -> bool {
        match self.remaining_quantity.checked_sub(quantity) {
            Some(remaining) => {
                self.remaining_quantity = remaining;
                true
            },
            None => false,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id, self.symbol, self.side, self.remaining_quantity, self.price
        )
    }
}
