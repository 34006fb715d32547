// ============================================================================
// Shared Router
// Serialises access to one router from several threads
// ============================================================================

use crate::command::Command;
use crate::domain::{Order, OrderId};
use crate::engine::SymbolRouter;
use crate::interfaces::ExecutionReport;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to a router behind a mutex.
///
/// Each call holds the lock for exactly one command, so commands from
/// different threads are applied one at a time and never interleave.
#[derive(Clone)]
pub struct SharedRouter {
    inner: Arc<Mutex<SymbolRouter>>,
}

impl SharedRouter {
    pub fn new(router: SymbolRouter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(router)),
        }
    }

    pub fn place(&self, order: Order) -> Vec<ExecutionReport> {
        self.inner.lock().place(order)
    }

    pub fn cancel(&self, id: OrderId) -> Vec<ExecutionReport> {
        self.inner.lock().cancel(id)
    }

    pub fn print(&self) -> Vec<ExecutionReport> {
        self.inner.lock().print()
    }

    pub fn process(&self, command: Command) -> Vec<ExecutionReport> {
        self.inner.lock().process(command)
    }

    /// Run `f` with exclusive access to the router
    pub fn with_router<R>(&self, f: impl FnOnce(&mut SymbolRouter) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<SymbolRouter> for SharedRouter {
    fn from(router: SymbolRouter) -> Self {
        Self::new(router)
    }
}
