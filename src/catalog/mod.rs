//! Catalog of sellable products with unit price and stock.

pub mod product;

pub use product::Product;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The set of sellable products. Stock on the contained products is only
/// mutated through [`crate::inventory::InventoryService`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from an existing product list, e.g. one loaded from
    /// storage or produced by the demo generator.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn add(&mut self, product: Product) -> Uuid {
        let id = product.id;
        self.products.push(product);
        id
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub(crate) fn product_mut(&mut self, id: Uuid) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
