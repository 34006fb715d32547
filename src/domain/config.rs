// ============================================================================
// Router Configuration
// Execution-price convention and defensive resource caps
// ============================================================================

use crate::numeric::Price;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Execution Price Rule
// ============================================================================

/// Which limit price a match executes at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExecutionPriceRule {
    /// Every fill executes at the incoming (aggressive) order's limit price
    #[default]
    Aggressor,

    /// Every fill executes at the resting order's limit price.
    /// The incoming order's aggregate fill carries the last resting price matched.
    Resting,
}

impl ExecutionPriceRule {
    pub fn execution_price(self, incoming: Price, resting: Price) -> Price {
        match self {
            ExecutionPriceRule::Aggressor => incoming,
            ExecutionPriceRule::Resting => resting,
        }
    }
}

// ============================================================================
// Router Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maximum live orders must be positive")]
    ZeroOrderLimit,
    #[error("maximum symbols must be positive")]
    ZeroSymbolLimit,
}

/// Configuration for a [`SymbolRouter`](crate::engine::SymbolRouter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouterConfig {
    /// Execution-price convention used by every book
    pub price_rule: ExecutionPriceRule,

    /// Optional: maximum number of live orders across all symbols.
    /// None means unlimited
    pub max_live_orders: Option<usize>,

    /// Optional: maximum number of symbols with a book.
    /// None means unlimited
    pub max_symbols: Option<usize>,
}

impl RouterConfig {
    pub fn new(price_rule: ExecutionPriceRule) -> Self {
        Self {
            price_rule,
            ..Self::default()
        }
    }

    /// Builder method: Set the live order cap
    pub fn with_max_live_orders(mut self, max: usize) -> Self {
        self.max_live_orders = Some(max);
        self
    }

    /// Builder method: Set the symbol cap
    pub fn with_max_symbols(mut self, max: usize) -> Self {
        self.max_symbols = Some(max);
        self
    }

    /// Builder method: Set the execution-price convention
    pub fn with_price_rule(mut self, price_rule: ExecutionPriceRule) -> Self {
        self.price_rule = price_rule;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_live_orders == Some(0) {
            return Err(ConfigError::ZeroOrderLimit);
        }
        if self.max_symbols == Some(0) {
            return Err(ConfigError::ZeroSymbolLimit);
        }
        Ok(())
    }
}
