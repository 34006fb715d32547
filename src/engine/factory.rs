// ============================================================================
// Router Factory
// Creates symbol routers with validated configuration
// ============================================================================

use crate::domain::{ConfigError, ExecutionPriceRule, RouterConfig};
use crate::engine::{PriceTimePriority, SymbolRouter};
use crate::interfaces::{EventHandler, MatchingAlgorithm, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a router from configuration
///
/// # Example
/// ```
/// use simple_cross::prelude::*;
/// use std::sync::Arc;
///
/// let config = RouterConfig::default().with_max_symbols(16);
/// let router = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert!(router.registry().is_empty());
/// ```
pub fn create_from_config(
    config: RouterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<SymbolRouter, ConfigError> {
    config.validate()?;

    Ok(SymbolRouter::new(config, event_handler))
}

/// Creates the matching algorithm every new book is given
pub fn create_matching_algorithm(price_rule: ExecutionPriceRule) -> Box<dyn MatchingAlgorithm> {
    Box::new(PriceTimePriority::new(price_rule))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating routers with fluent API
///
/// # Example
/// ```
/// use simple_cross::prelude::*;
///
/// let router = RouterBuilder::new()
///     .with_price_rule(ExecutionPriceRule::Resting)
///     .with_max_live_orders(10_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(router.config().max_live_orders, Some(10_000));
/// ```
pub struct RouterBuilder {
    config: RouterConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            config: RouterConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Cap the number of live orders across every symbol
    pub fn with_max_live_orders(mut self, max: usize) -> Self {
        self.config = self.config.with_max_live_orders(max);
        self
    }

    /// Cap the number of distinct symbols
    pub fn with_max_symbols(mut self, max: usize) -> Self {
        self.config = self.config.with_max_symbols(max);
        self
    }

    pub fn with_price_rule(mut self, price_rule: ExecutionPriceRule) -> Self {
        self.config = self.config.with_price_rule(price_rule);
        self
    }

    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Get the configuration without building
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn build(self) -> Result<SymbolRouter, ConfigError> {
        create_from_config(self.config, self.event_handler)
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_router() {
        let router = create_from_config(RouterConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(router.config().price_rule, ExecutionPriceRule::Aggressor);
        assert_eq!(router.symbols().count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RouterConfig::default().with_max_live_orders(0);
        assert_eq!(
            create_from_config(config, Arc::new(NoOpEventHandler)).err(),
            Some(ConfigError::ZeroOrderLimit)
        );

        let result = RouterBuilder::new().with_max_symbols(0).build();
        assert_eq!(result.err(), Some(ConfigError::ZeroSymbolLimit));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = RouterBuilder::new()
            .with_max_live_orders(5)
            .with_max_symbols(2)
            .with_price_rule(ExecutionPriceRule::Resting);

        assert_eq!(
            *builder.config(),
            RouterConfig::new(ExecutionPriceRule::Resting)
                .with_max_live_orders(5)
                .with_max_symbols(2)
        );

        let router = builder.build().unwrap();
        assert_eq!(router.config().max_symbols, Some(2));
    }

    #[test]
    fn test_algorithm_follows_price_rule() {
        assert_eq!(
            create_matching_algorithm(ExecutionPriceRule::Aggressor).name(),
            "PriceTime"
        );
        assert_eq!(
            create_matching_algorithm(ExecutionPriceRule::Resting).name(),
            "PriceTime-RestingPrice"
        );
    }
}
