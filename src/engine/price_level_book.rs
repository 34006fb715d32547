// ============================================================================
// Price Level Book
// Per-symbol bid/ask book: add with matching, cancel, print
// ============================================================================

use crate::domain::{BookSide, Order, OrderId, OrderRegistry, Quantity, Side, Symbol};
use crate::interfaces::{ExecutionReport, MatchingAlgorithm, RejectReason};
use crate::numeric::Price;

/// What matching an order against the current book would do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPreview {
    /// Quantity of the incoming order that would execute
    pub filled: Quantity,
    /// Resting orders that would be completely filled
    pub completed: usize,
}

/// Order book for one symbol with a pluggable matching algorithm.
///
/// The book only stores order ids; quantities and prices live in the
/// [`OrderRegistry`] lent by the caller on every operation.
pub struct PriceLevelBook {
    /// Trading symbol (e.g., "IBM")
    symbol: Symbol,

    /// Bid side, best = highest price
    bids: BookSide,

    /// Ask side, best = lowest price
    asks: BookSide,

    /// Pluggable matching algorithm
    algorithm: Box<dyn MatchingAlgorithm>,
}

impl PriceLevelBook {
    pub fn new(symbol: Symbol, algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self {
            symbol,
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            algorithm,
        }
    }

    /// Match a registered order against the opposite side, then rest any
    /// remainder at the back of its price level.
    ///
    /// # Panics
    /// If `id` is not in `registry`. Callers must register the order first.
    pub fn add(&mut self, id: OrderId, registry: &mut OrderRegistry) -> Vec<ExecutionReport> {
        let incoming = match registry.get(id) {
            Some(order) => *order,
            None => panic!("order {} must be registered before it is added to a book", id),
        };

        let (own_side, opposite_side) = match incoming.side {
            Side::Buy => (&mut self.bids, &mut self.asks),
            Side::Sell => (&mut self.asks, &mut self.bids),
        };

        let reports = self
            .algorithm
            .match_order(&incoming, opposite_side, registry);

        let rests = registry
            .get(id)
            .is_some_and(|order| order.remaining_quantity() > 0);
        if rests {
            own_side.enqueue(id, incoming.price);
        }

        tracing::debug!(
            symbol = %self.symbol,
            order_id = %id,
            sequence = incoming.sequence_number(),
            received_at = %incoming.timestamp,
            algorithm = self.algorithm.name(),
            fills = reports.len(),
            rests,
            "order added"
        );
        debug_assert!(!self.is_crossed(), "book left crossed after add");

        reports
    }

    /// Walk the opposite side as `add` would, without filling anything
    pub fn preview_match(&self, order: &Order, registry: &OrderRegistry) -> MatchPreview {
        let opposite_side = match order.side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        };

        let mut remaining = order.remaining_quantity();
        let mut preview = MatchPreview::default();

        let crossing = opposite_side.levels().take_while(|level| {
            self.algorithm
                .prices_cross(order.side, order.price, level.price)
        });
        for resting in crossing
            .flat_map(|level| level.iter())
            .filter_map(|id| registry.get(id))
        {
            if remaining == 0 {
                break;
            }
            let fill = remaining.min(resting.remaining_quantity());
            remaining -= fill;
            if fill == resting.remaining_quantity() {
                preview.completed += 1;
            }
        }

        preview.filled = order.remaining_quantity() - remaining;
        preview
    }

    /// Remove a live order from its level, wherever it is queued
    pub fn cancel(&mut self, id: OrderId, registry: &mut OrderRegistry) -> Vec<ExecutionReport> {
        let order = match registry.get(id) {
            Some(order) => *order,
            None => return vec![ExecutionReport::rejected(id, RejectReason::UnknownOrder)],
        };

        let side = match order.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        if !side.remove_order(id, order.price) {
            tracing::warn!(symbol = %self.symbol, order_id = %id, "cancelled order was not queued");
        }
        registry.remove(id);

        vec![ExecutionReport::cancel_confirm(id)]
    }

    /// Snapshot of every live order: bids best to worst, then asks best to
    /// worst, FIFO within each level
    pub fn print(&self, registry: &OrderRegistry) -> Vec<ExecutionReport> {
        [&self.bids, &self.asks]
            .into_iter()
            .flat_map(BookSide::levels)
            .flat_map(|level| level.iter())
            .filter_map(|id| registry.get(id))
            .map(|order| {
                ExecutionReport::book_entry(
                    order.id,
                    self.symbol,
                    order.side,
                    order.remaining_quantity(),
                    order.price,
                )
            })
            .collect()
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Best ask minus best bid, when both sides are populated
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => ask.checked_sub(bid).ok(),
            _ => None,
        }
    }

    /// True if the best bid is at or above the best ask
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }

    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::Buy => self.bids.level_count(),
            Side::Sell => self.asks.level_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
