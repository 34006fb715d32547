// ============================================================================
// Execution Reports and Event Handler Interface
// Per-command result model and the observer contract for it
// ============================================================================

use crate::domain::{OrderId, Quantity, Side, Symbol};
use crate::numeric::Price;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why the router refused a command. The `Display` text is the message
/// carried by the resulting [`ExecutionReport::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Order already exists")]
    DuplicateOrder,
    #[error("Order does not exist")]
    UnknownOrder,
    #[error("Order quantity must be positive")]
    InvalidQuantity,
    #[error("Order limit reached")]
    OrderLimit,
    #[error("Symbol limit reached")]
    SymbolLimit,
}

/// Outcome entries produced by one command, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExecutionReport {
    /// Quantity of an order executed at `price`
    Fill {
        order_id: OrderId,
        symbol: Symbol,
        quantity: Quantity,
        price: Price,
    },

    /// Order removed from its book on request
    CancelConfirm { order_id: OrderId },

    /// One live order in a book snapshot
    BookEntry {
        order_id: OrderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    },

    /// Command refused; `order_id` is `OrderId::NONE` when no order applies
    Error { order_id: OrderId, message: String },
}

impl ExecutionReport {
    pub fn fill(order_id: OrderId, symbol: Symbol, quantity: Quantity, price: Price) -> Self {
        Self::Fill {
            order_id,
            symbol,
            quantity,
            price,
        }
    }

    pub fn cancel_confirm(order_id: OrderId) -> Self {
        Self::CancelConfirm { order_id }
    }

    pub fn book_entry(
        order_id: OrderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        Self::BookEntry {
            order_id,
            symbol,
            side,
            quantity,
            price,
        }
    }

    pub fn error(order_id: OrderId, message: impl Into<String>) -> Self {
        Self::Error {
            order_id,
            message: message.into(),
        }
    }

    pub fn rejected(order_id: OrderId, reason: RejectReason) -> Self {
        Self::error(order_id, reason.to_string())
    }

    pub fn order_id(&self) -> OrderId {
        match self {
            Self::Fill { order_id, .. }
            | Self::CancelConfirm { order_id }
            | Self::BookEntry { order_id, .. }
            | Self::Error { order_id, .. } => *order_id,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, Self::Fill { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// One line per report:
///
/// ```text
/// F <id> <symbol> <quantity> <price>
/// X <id>
/// P <id> <symbol> <side> <quantity> <price>
/// E <id> <message>
/// ```
impl fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill {
                order_id,
                symbol,
                quantity,
                price,
            } => write!(f, "F {} {} {} {}", order_id, symbol, quantity, price),
            Self::CancelConfirm { order_id } => write!(f, "X {}", order_id),
            Self::BookEntry {
                order_id,
                symbol,
                side,
                quantity,
                price,
            } => write!(
                f,
                "P {} {} {} {} {}",
                order_id, symbol, side, quantity, price
            ),
            Self::Error { order_id, message } => write!(f, "E {} {}", order_id, message),
        }
    }
}

/// Event handler trait for observing the reports of every command.
/// Implementations can handle logging, auditing, fan-out, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a single report
    fn on_report(&self, report: &ExecutionReport);

    /// Handle every report of one command, in order
    fn on_reports(&self, reports: &[ExecutionReport]) {
        for report in reports {
            self.on_report(report);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_report(&self, _report: &ExecutionReport) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_report(&self, report: &ExecutionReport) {
        tracing::debug!(%report, "execution report");
    }
}
