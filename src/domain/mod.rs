// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod order;
pub mod order_book;
pub mod registry;
pub mod symbol;

pub use config::{ConfigError, ExecutionPriceRule, RouterConfig};
pub use order::{Order, OrderId, Quantity, Side};
pub use order_book::{BookSide, PriceLevel};
pub use registry::OrderRegistry;
pub use symbol::{Symbol, SymbolError};
