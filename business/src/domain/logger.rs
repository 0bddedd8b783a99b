/// Logging port used by the cart use cases and gateways.
///
/// Keeps the business crate free of a concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
