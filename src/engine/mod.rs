// ============================================================================
// Engine Module
// Contains the core matching engine business logic
// ============================================================================

mod exchange;
mod price_level_book;
mod price_time;
mod router;
mod shared;

pub mod factory;

pub use exchange::Exchange;
pub use factory::{create_from_config, create_matching_algorithm, RouterBuilder};
pub use price_level_book::{MatchPreview, PriceLevelBook};
pub use price_time::PriceTimePriority;
pub use router::SymbolRouter;
pub use shared::SharedRouter;
