use crate::domain::shared::value_objects::Sku;

/// Catalog entry as returned by the product service. Prices are in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub price: u32,
}
