use crate::common::Result;
use crate::core::middleware::{Dispatcher, Logger, Middleware};
use crate::core::UnitOfWork;

pub(crate) struct MiddlewareChain {
    root: Logger<Dispatcher>,
}

impl MiddlewareChain {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        let logger = Logger::new(dispatcher);

        Self { root: logger }
    }

    pub(crate) async fn apply(&mut self, uow: UnitOfWork) -> Result<()> {
        self.root.apply(uow).await
    }
}
