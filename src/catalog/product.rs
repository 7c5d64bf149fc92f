use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sellable item. `stock` is private so decrements always pass the
/// never-below-zero check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub unit_price: f64,
    stock: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_price: f64, stock: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_price,
            stock,
        }
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Increments stock, e.g. on restock or returned goods.
    pub(crate) fn receive(&mut self, units: u32) {
        self.stock += units;
    }

    /// Decrements stock. Returns `false` without mutating when `units`
    /// exceeds the available stock; a sale must be rejected, never clamped.
    pub(crate) fn deduct(&mut self, units: u32) -> bool {
        if units > self.stock {
            return false;
        }
        self.stock -= units;
        true
    }
}
