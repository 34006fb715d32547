// ============================================================================
// Matching Algorithm Interface
// Defines the contract for crossing an incoming order against a book side
// ============================================================================

use crate::domain::{BookSide, Order, OrderRegistry, Side};
use crate::interfaces::ExecutionReport;
use crate::numeric::Price;

/// Strategy interface for matching algorithms
pub trait MatchingAlgorithm: Send + Sync {
    /// Match an incoming order against the opposite side of the book
    ///
    /// # Arguments
    /// * `incoming` - Copy of the incoming order as registered before matching
    /// * `opposite_side` - The opposite side of the symbol's book
    /// * `registry` - Live orders; both the incoming and every resting order
    ///   matched have their remaining quantity reduced in place
    ///
    /// # Returns
    /// Fill reports in emission order. Resting orders that reach zero are
    /// dequeued from `opposite_side` but left in `registry`.
    fn match_order(
        &self,
        incoming: &Order,
        opposite_side: &mut BookSide,
        registry: &mut OrderRegistry,
    ) -> Vec<ExecutionReport>;

    /// Get the algorithm name for logging
    fn name(&self) -> &str;

    /// Whether an incoming limit price can trade against a resting level price
    fn prices_cross(&self, incoming_side: Side, incoming_price: Price, book_price: Price) -> bool {
        match incoming_side {
            Side::Buy => incoming_price >= book_price,
            Side::Sell => incoming_price <= book_price,
        }
    }
}
