//! ProductRepository - Storage contract for products and their price history

use crate::entities::{Product, ProductPriceHistory};
use crate::errors::DomainResult;

pub trait ProductRepository: Send + Sync {
    /// Products, optionally only non-deleted ones and only from one manufacturer
    fn list(
        &self,
        only_active: bool,
        manufacturer_id: Option<String>,
    ) -> DomainResult<Option<Vec<Product>>>;

    fn list_history(&self, product_id: &str) -> DomainResult<Option<Vec<ProductPriceHistory>>>;

    fn get_by_id(&self, id: &str) -> DomainResult<Option<Product>>;

    fn get_by_name(&self, name: &str) -> DomainResult<Option<Product>>;

    fn add(&self, product: Product) -> DomainResult<()>;

    /// Storage records the previous price pair as history
    fn update(&self, product: Product) -> DomainResult<()>;

    /// Soft delete
    fn delete(&self, id: &str) -> DomainResult<()>;
}
