pub mod deadline;
pub mod loms_client;
pub mod product_client;
pub mod retry;
pub mod transport;
mod wire;

#[cfg(test)]
mod test_support;
