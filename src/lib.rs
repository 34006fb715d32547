// ============================================================================
// Simple Cross Library
// Multi-symbol limit order matching engine with price-time priority
// ============================================================================

//! # Simple Cross
//!
//! A deterministic, single-threaded limit order matching engine.
//!
//! ## Features
//!
//! - **Price-time (FIFO) priority** per symbol, one book per symbol
//! - **Exact fixed-point prices** (7 integral, 5 fractional digits), no floats
//! - **Text command protocol** (`O`, `X`, `P`) with rendered reports
//! - **Configurable execution price** and optional resource caps
//!
//! ## Example
//!
//! ```rust
//! use simple_cross::prelude::*;
//!
//! let mut exchange = Exchange::new();
//!
//! exchange.action("O 10000 IBM B 10 100.00000");
//! exchange.action("O 10001 IBM B 10 99.00000");
//! let reports = exchange.action("O 10003 IBM S 5 100.00000");
//!
//! let lines: Vec<String> = reports.iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["F 10000 IBM 5 100.00000", "F 10003 IBM 5 100.00000"]);
//!
//! let book = exchange.router().book(&"IBM".parse().unwrap()).unwrap();
//! println!("Best bid: {:?}", book.best_bid());
//! println!("Spread: {:?}", book.spread());
//! ```

pub mod command;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::command::{Command, ParseError};
    pub use crate::domain::{
        ConfigError, ExecutionPriceRule, Order, OrderId, OrderRegistry, Quantity, RouterConfig,
        Side, Symbol,
    };
    pub use crate::engine::{
        create_from_config, Exchange, PriceLevelBook, PriceTimePriority, RouterBuilder,
        SharedRouter, SymbolRouter,
    };
    pub use crate::interfaces::{
        EventHandler, ExecutionReport, LoggingEventHandler, MatchingAlgorithm, NoOpEventHandler,
        RejectReason,
    };
    pub use crate::numeric::{NumericError, Price};
}
