// ============================================================================
// Symbol Router
// Owns the order registry and every per-symbol book; dispatches commands
// ============================================================================

use crate::command::Command;
use crate::domain::{Order, OrderId, OrderRegistry, RouterConfig, Symbol};
use crate::engine::factory::create_matching_algorithm;
use crate::engine::PriceLevelBook;
use crate::interfaces::{EventHandler, ExecutionReport, RejectReason};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Multi-symbol matching engine.
///
/// Every public call returns the reports of that call only. Books are created
/// on the first order for a symbol and kept for the router's lifetime; the
/// print order across symbols is lexicographic.
pub struct SymbolRouter {
    /// Live orders across all symbols
    registry: OrderRegistry,

    /// Per-symbol books
    books: BTreeMap<Symbol, PriceLevelBook>,

    config: RouterConfig,

    /// Event handler for processing reports
    event_handler: Arc<dyn EventHandler>,

    /// Arrival counter for order sequencing
    sequence_counter: u64,
}

impl SymbolRouter {
    /// Create a router. `config` is trusted; use
    /// [`create_from_config`](crate::engine::create_from_config) to validate it.
    pub fn new(config: RouterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            registry: OrderRegistry::new(),
            books: BTreeMap::new(),
            config,
            event_handler,
            sequence_counter: 0,
        }
    }

    /// Execute one command
    pub fn process(&mut self, command: Command) -> Vec<ExecutionReport> {
        match command {
            Command::Place {
                id,
                symbol,
                side,
                quantity,
                price,
            } => self.place(Order::new(id, symbol, side, quantity, price)),
            Command::Cancel { id } => self.cancel(id),
            Command::Print => self.print(),
        }
    }

    /// Submit a new limit order
    pub fn place(&mut self, order: Order) -> Vec<ExecutionReport> {
        let reports = match self.admit(&order) {
            Ok(()) => self.route(order),
            Err(reason) => {
                tracing::warn!(order_id = %order.id, %reason, "order rejected");
                vec![ExecutionReport::rejected(order.id, reason)]
            },
        };

        self.event_handler.on_reports(&reports);
        reports
    }

    /// Cancel a live order
    pub fn cancel(&mut self, id: OrderId) -> Vec<ExecutionReport> {
        let symbol = self.registry.get(id).map(|order| order.symbol);

        let reports = match symbol {
            None => {
                tracing::warn!(order_id = %id, "cancel for unknown order");
                vec![ExecutionReport::rejected(id, RejectReason::UnknownOrder)]
            },
            Some(symbol) => {
                let reports = match self.books.get_mut(&symbol) {
                    Some(book) => book.cancel(id, &mut self.registry),
                    None => vec![ExecutionReport::rejected(id, RejectReason::UnknownOrder)],
                };
                self.registry.remove(id);
                reports
            },
        };

        self.event_handler.on_reports(&reports);
        reports
    }

    /// Snapshot of every book, symbols in lexicographic order
    pub fn print(&self) -> Vec<ExecutionReport> {
        let reports: Vec<ExecutionReport> = self
            .books
            .values()
            .flat_map(|book| book.print(&self.registry))
            .collect();

        self.event_handler.on_reports(&reports);
        reports
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    pub fn book(&self, symbol: &Symbol) -> Option<&PriceLevelBook> {
        self.books.get(symbol)
    }

    /// Symbols with a book, in print order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.books.keys().copied()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn admit(&self, order: &Order) -> Result<(), RejectReason> {
        if self.registry.contains(order.id) {
            return Err(RejectReason::DuplicateOrder);
        }

        if order.remaining_quantity() == 0 {
            return Err(RejectReason::InvalidQuantity);
        }

        if let Some(max) = self.config.max_live_orders {
            if self.registry.len() >= max && self.live_after(order) > max {
                return Err(RejectReason::OrderLimit);
            }
        }

        if let Some(max) = self.config.max_symbols {
            if !self.books.contains_key(&order.symbol) && self.books.len() >= max {
                return Err(RejectReason::SymbolLimit);
            }
        }

        Ok(())
    }

    /// Number of live orders once `order` has been matched and any
    /// remainder rested, computed without touching the book
    fn live_after(&self, order: &Order) -> usize {
        let preview = self
            .books
            .get(&order.symbol)
            .map(|book| book.preview_match(order, &self.registry))
            .unwrap_or_default();

        let rests = usize::from(preview.filled < order.remaining_quantity());
        (self.registry.len() + rests).saturating_sub(preview.completed)
    }

    fn route(&mut self, mut order: Order) -> Vec<ExecutionReport> {
        order.set_sequence_number(self.sequence_counter);
        self.sequence_counter += 1;

        let (id, symbol) = (order.id, order.symbol);
        self.registry.insert_if_absent(order);

        let price_rule = self.config.price_rule;
        let book = self.books.entry(symbol).or_insert_with(|| {
            tracing::info!(%symbol, "creating order book");
            PriceLevelBook::new(symbol, create_matching_algorithm(price_rule))
        });

        let reports = book.add(id, &mut self.registry);
        self.release_filled(&reports);
        reports
    }

    /// Drop every filled order referenced by a fill from the registry
    fn release_filled(&mut self, reports: &[ExecutionReport]) {
        for report in reports {
            if let ExecutionReport::Fill { order_id, .. } = report {
                if self.registry.get(*order_id).is_some_and(Order::is_filled) {
                    self.registry.remove(*order_id);
                }
            }
        }
    }
}
