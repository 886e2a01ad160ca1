//! ProductService - Business rules for the product catalogue

use std::sync::Arc;
use tracing::info;

use super::{rejected, require_found, require_list, to_json};
use crate::entities::{Product, ProductPriceHistory, Validate};
use crate::errors::DomainResult;
use crate::repositories::ProductRepository;
use crate::validation::{check_id_argument, check_present_argument, is_guid};

pub trait ProductServiceTrait: Send + Sync {
    fn list_all(&self, only_active: bool) -> DomainResult<Vec<Product>>;

    fn list_by_manufacturer(
        &self,
        manufacturer_id: &str,
        only_active: bool,
    ) -> DomainResult<Vec<Product>>;

    fn list_history(&self, product_id: &str) -> DomainResult<Vec<ProductPriceHistory>>;

    /// Lookup by id when `data` is a unique identifier, by name otherwise
    fn get_by_data(&self, data: &str) -> DomainResult<Product>;

    fn insert(&self, product: Product) -> DomainResult<()>;

    fn update(&self, product: Product) -> DomainResult<()>;

    fn delete(&self, id: &str) -> DomainResult<()>;
}

pub struct ProductService<R>
where
    R: ProductRepository,
{
    repository: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ProductServiceTrait for ProductService<R>
where
    R: ProductRepository,
{
    fn list_all(&self, only_active: bool) -> DomainResult<Vec<Product>> {
        info!(only_active, "list_all");
        require_list(self.repository.list(only_active, None)?)
    }

    fn list_by_manufacturer(
        &self,
        manufacturer_id: &str,
        only_active: bool,
    ) -> DomainResult<Vec<Product>> {
        info!(manufacturer_id, only_active, "list_by_manufacturer");
        check_id_argument(manufacturer_id, "manufacturerId").map_err(rejected)?;
        require_list(
            self.repository
                .list(only_active, Some(manufacturer_id.to_string()))?,
        )
    }

    fn list_history(&self, product_id: &str) -> DomainResult<Vec<ProductPriceHistory>> {
        info!(product_id, "list_history");
        check_id_argument(product_id, "productId").map_err(rejected)?;
        require_list(self.repository.list_history(product_id)?)
    }

    fn get_by_data(&self, data: &str) -> DomainResult<Product> {
        info!(data, "get_by_data");
        check_present_argument(data, "data").map_err(rejected)?;
        let found = if is_guid(data) {
            self.repository.get_by_id(data)?
        } else {
            self.repository.get_by_name(data)?
        };
        require_found(found, data)
    }

    fn insert(&self, product: Product) -> DomainResult<()> {
        info!(product = %to_json(&product), "insert");
        product.validate().map_err(rejected)?;
        self.repository.add(product)
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        info!(product = %to_json(&product), "update");
        product.validate().map_err(rejected)?;
        self.repository.update(product)
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        info!(id, "delete");
        check_id_argument(id, "id").map_err(rejected)?;
        self.repository.delete(id)
    }
}
