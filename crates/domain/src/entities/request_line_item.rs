//! RequestLineItem - One product within a service request

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::DomainResult;
use crate::validation::{require_id, require_positive};

/// Per-product component of a request
///
/// Once fulfilled it points at the install created for it via `install_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLineItem {
    request_id: String,
    product_id: String,
    product_price: f64,
    install_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    install_id: Option<String>,
}

impl RequestLineItem {
    pub fn new(
        request_id: impl Into<String>,
        product_id: impl Into<String>,
        product_price: f64,
        install_price: f64,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            product_id: product_id.into(),
            product_price,
            install_price,
            install_id: None,
        }
    }

    /// Link this line to the install that realised it
    pub fn with_install_id(mut self, install_id: impl Into<String>) -> Self {
        self.install_id = Some(install_id.into());
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_price(&self) -> f64 {
        self.product_price
    }

    pub fn install_price(&self) -> f64 {
        self.install_price
    }

    pub fn install_id(&self) -> Option<&str> {
        self.install_id.as_deref()
    }

    /// Product plus install price of this line
    pub fn total(&self) -> f64 {
        self.product_price + self.install_price
    }
}

impl Validate for RequestLineItem {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.request_id, "RequestId")?;
        require_id(&self.product_id, "ProductId")?;
        require_positive(self.product_price, "ProductPrice")?;
        require_positive(self.install_price, "InstallPrice")?;
        if let Some(install_id) = &self.install_id {
            require_id(install_id, "InstallId")?;
        }
        Ok(())
    }
}
