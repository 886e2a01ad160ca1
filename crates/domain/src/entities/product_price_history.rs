//! ProductPriceHistory - Previous price pair of a product

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::DomainResult;
use crate::validation::{require_id, require_positive};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPriceHistory {
    product_id: String,
    old_product_price: f64,
    old_install_price: f64,
    /// Set at creation, never changed
    change_date: DateTime<Utc>,
}

impl ProductPriceHistory {
    pub fn new(product_id: impl Into<String>, old_product_price: f64, old_install_price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            old_product_price,
            old_install_price,
            change_date: Utc::now(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn old_product_price(&self) -> f64 {
        self.old_product_price
    }

    pub fn old_install_price(&self) -> f64 {
        self.old_install_price
    }

    pub fn change_date(&self) -> DateTime<Utc> {
        self.change_date
    }
}

impl Validate for ProductPriceHistory {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.product_id, "ProductId")?;
        require_positive(self.old_product_price, "OldProductPrice")?;
        require_positive(self.old_install_price, "OldInstallPrice")?;
        Ok(())
    }
}
