//! Product - Installable equipment offered by a manufacturer

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{DomainError, DomainResult};
use crate::validation::{require_id, require_not_empty, require_positive};
use crate::value_objects::ProductType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    product_type: ProductType,
    manufacturer_id: String,
    product_price: f64,
    install_price: f64,
    is_deleted: bool,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        product_type: ProductType,
        manufacturer_id: impl Into<String>,
        product_price: f64,
        install_price: f64,
        is_deleted: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            product_type,
            manufacturer_id: manufacturer_id.into(),
            product_price,
            install_price,
            is_deleted,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn manufacturer_id(&self) -> &str {
        &self.manufacturer_id
    }

    pub fn product_price(&self) -> f64 {
        self.product_price
    }

    pub fn install_price(&self) -> f64 {
        self.install_price
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

impl Validate for Product {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.id, "Id")?;
        require_id(&self.manufacturer_id, "ManufacturerId")?;
        require_not_empty(&self.name, "Name")?;
        if !self.product_type.is_set() {
            return Err(DomainError::validation("ProductType", "Field ProductType is empty"));
        }
        require_positive(self.product_price, "ProductPrice")?;
        require_positive(self.install_price, "InstallPrice")?;
        Ok(())
    }
}
