use crate::domain::shared::value_objects::{Sku, UserId};

use super::errors::CartError;

/// One SKU inside a cart. The unit price is the one seen when the SKU was first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub sku: Sku,
    pub quantity: u16,
    pub price: u32,
}

impl LineItem {
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// A user's cart.
///
/// Line items are unique per SKU and kept in insertion order. `total_price` is
/// recomputed from scratch after every structural change, so it always equals
/// the sum of `price * quantity` over the items.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    user_id: UserId,
    items: Vec<LineItem>,
    total_price: u64,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total_price: 0,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity currently held for `sku`, zero when the SKU is not in the cart.
    pub fn quantity_of(&self, sku: Sku) -> u16 {
        self.items
            .iter()
            .find(|item| item.sku == sku)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Adds `quantity` units of `sku`, merging into the existing line when present.
    ///
    /// The stored price of an existing line is kept; `price` only applies to new lines.
    pub fn add_line(&mut self, sku: Sku, quantity: u16, price: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        match self.items.iter_mut().find(|item| item.sku == sku) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => self.items.push(LineItem {
                sku,
                quantity,
                price,
            }),
        }

        self.recompute_total();
        Ok(())
    }

    /// Removes the line for `sku`. Returns whether a line was removed.
    pub fn remove_line(&mut self, sku: Sku) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.sku != sku);
        let removed = self.items.len() != before;

        if removed {
            self.recompute_total();
        }
        removed
    }

    /// Takes up to `quantity` units of `sku` out of the cart, dropping the line once it is empty.
    ///
    /// Units added after `quantity` was read stay in the cart.
    pub fn deduct(&mut self, sku: Sku, quantity: u16) {
        let Some(position) = self.items.iter().position(|item| item.sku == sku) else {
            return;
        };

        let remaining = self.items[position].quantity.saturating_sub(quantity);
        if remaining == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = remaining;
        }
        self.recompute_total();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_total();
    }

    pub fn recompute_total(&mut self) {
        self.total_price = self.items.iter().map(LineItem::line_total).sum();
    }
}
