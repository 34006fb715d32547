// ============================================================================
// Price/Time Priority Matching Algorithm (FIFO)
// ============================================================================

use crate::domain::{BookSide, ExecutionPriceRule, Order, OrderRegistry};
use crate::interfaces::{ExecutionReport, MatchingAlgorithm};

/// Price/Time Priority (FIFO) matching algorithm
///
/// The incoming order walks the opposite side from the best level outward.
/// Within a level, orders are matched strictly oldest first; a partially
/// filled resting order stays at the front of its queue.
///
/// # Example
/// ```text
/// Bids:  200.00000  #3 x 1500
///        120.00000  #1 x 100
///        100.00000  #0 x 100, #4 x 100
///
/// Incoming: Sell #5 10 @ 90.00000
/// Result:   F 3 10 @ 90.00000, F 5 10 @ 90.00000
/// ```
pub struct PriceTimePriority {
    price_rule: ExecutionPriceRule,
}

impl PriceTimePriority {
    pub fn new(price_rule: ExecutionPriceRule) -> Self {
        Self { price_rule }
    }
}

impl Default for PriceTimePriority {
    fn default() -> Self {
        Self::new(ExecutionPriceRule::Aggressor)
    }
}

impl MatchingAlgorithm for PriceTimePriority {
    fn match_order(
        &self,
        incoming: &Order,
        opposite_side: &mut BookSide,
        registry: &mut OrderRegistry,
    ) -> Vec<ExecutionReport> {
        let mut reports = Vec::new();
        let mut remaining = incoming.remaining_quantity();
        let mut last_price = incoming.price;

        while remaining > 0 {
            let best_price = match opposite_side.best_price() {
                Some(price) => price,
                None => break,
            };

            if !self.prices_cross(incoming.side, incoming.price, best_price) {
                break;
            }

            let level = match opposite_side.best_level_mut() {
                Some(level) => level,
                None => break,
            };
            let resting_id = match level.front() {
                Some(id) => id,
                None => {
                    opposite_side.remove_level_if_empty(best_price);
                    continue;
                },
            };

            let resting = match registry.get_mut(resting_id) {
                Some(order) => order,
                None => {
                    // Queue entry outlived its order; discard it
                    tracing::warn!(order_id = %resting_id, "dropping stale queue entry");
                    level.pop_front();
                    opposite_side.remove_level_if_empty(best_price);
                    continue;
                },
            };

            let fill_quantity = remaining.min(resting.remaining_quantity());
            let price = self
                .price_rule
                .execution_price(incoming.price, resting.price);

            resting.try_fill(fill_quantity);
            remaining -= fill_quantity;
            last_price = price;

            tracing::trace!(
                maker = %resting_id,
                taker = %incoming.id,
                quantity = fill_quantity,
                %price,
                "orders matched"
            );
            reports.push(ExecutionReport::fill(
                resting_id,
                incoming.symbol,
                fill_quantity,
                price,
            ));

            if resting.is_filled() {
                level.pop_front();
                opposite_side.remove_level_if_empty(best_price);
            }
        }

        let total_filled = incoming.remaining_quantity() - remaining;
        if total_filled > 0 {
            if let Some(order) = registry.get_mut(incoming.id) {
                order.try_fill(total_filled);
            }
            reports.push(ExecutionReport::fill(
                incoming.id,
                incoming.symbol,
                total_filled,
                last_price,
            ));
        }

        reports
    }

    fn name(&self) -> &str {
        match self.price_rule {
            ExecutionPriceRule::Aggressor => "PriceTime",
            ExecutionPriceRule::Resting => "PriceTime-RestingPrice",
        }
    }
}
