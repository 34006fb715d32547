// ============================================================================
// Exchange
// Line-oriented facade: parse one action, run it, return its reports
// ============================================================================

use crate::command::Command;
use crate::domain::OrderId;
use crate::engine::SymbolRouter;
use crate::interfaces::{ExecutionReport, NoOpEventHandler};
use std::sync::Arc;

pub struct Exchange {
    router: SymbolRouter,
}

impl Exchange {
    /// Exchange with the default configuration
    pub fn new() -> Self {
        Self::with_router(SymbolRouter::new(
            Default::default(),
            Arc::new(NoOpEventHandler),
        ))
    }

    pub fn with_router(router: SymbolRouter) -> Self {
        Self { router }
    }

    /// Run one action line.
    ///
    /// A line that does not parse produces a single `E 0 <reason>` report
    /// and leaves every book untouched.
    pub fn action(&mut self, line: &str) -> Vec<ExecutionReport> {
        match line.parse::<Command>() {
            Ok(command) => self.router.process(command),
            Err(e) => {
                tracing::warn!(line, error = %e, "malformed action");
                vec![ExecutionReport::error(OrderId::NONE, e.to_string())]
            },
        }
    }

    pub fn router(&self) -> &SymbolRouter {
        &self.router
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}
