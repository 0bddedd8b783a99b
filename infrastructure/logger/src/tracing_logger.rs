use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that emits `tracing` events tagged with the component that produced them.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart", component = self.component, "{}", message);
    }
}
