//! Install - A product physically installed by a worker

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::DomainResult;
use crate::validation::{require_id, require_positive};

/// Record of one installation at a fixed price pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Install {
    id: String,
    product_id: String,
    worker_id: String,
    /// Set at creation, never changed
    install_date: DateTime<Utc>,
    product_price: f64,
    install_price: f64,
}

impl Install {
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        worker_id: impl Into<String>,
        product_price: f64,
        install_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            worker_id: worker_id.into(),
            install_date: Utc::now(),
            product_price,
            install_price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn worker_id(&self) -> &str {
        &self.worker_id
    }

    pub fn install_date(&self) -> DateTime<Utc> {
        self.install_date
    }

    pub fn product_price(&self) -> f64 {
        self.product_price
    }

    pub fn install_price(&self) -> f64 {
        self.install_price
    }
}

impl Validate for Install {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.id, "Id")?;
        require_id(&self.product_id, "ProductId")?;
        require_id(&self.worker_id, "WorkerId")?;
        require_positive(self.product_price, "ProductPrice")?;
        require_positive(self.install_price, "InstallPrice")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use uuid::Uuid;

    fn guid() -> String {
        Uuid::new_v4().to_string()
    }

    fn failed_field(install: &Install) -> String {
        match install.validate() {
            Err(DomainError::Validation { field, .. }) => field,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_id_is_empty_or_not_guid() {
        assert_eq!(failed_field(&Install::new("", guid(), guid(), 10.0, 10.0)), "Id");
        assert_eq!(failed_field(&Install::new("id", guid(), guid(), 10.0, 10.0)), "Id");
    }

    #[test]
    fn test_foreign_keys() {
        assert_eq!(failed_field(&Install::new(guid(), "", guid(), 10.0, 10.0)), "ProductId");
        assert_eq!(failed_field(&Install::new(guid(), "productId", guid(), 10.0, 10.0)), "ProductId");
        assert_eq!(failed_field(&Install::new(guid(), guid(), "", 10.0, 10.0)), "WorkerId");
        assert_eq!(failed_field(&Install::new(guid(), guid(), "workerId", 10.0, 10.0)), "WorkerId");
    }

    #[test]
    fn test_prices_must_be_positive() {
        assert_eq!(failed_field(&Install::new(guid(), guid(), guid(), 0.0, 10.0)), "ProductPrice");
        assert_eq!(failed_field(&Install::new(guid(), guid(), guid(), -10.0, 10.0)), "ProductPrice");
        assert_eq!(failed_field(&Install::new(guid(), guid(), guid(), 10.0, 0.0)), "InstallPrice");
        assert_eq!(failed_field(&Install::new(guid(), guid(), guid(), 10.0, -10.0)), "InstallPrice");
    }

    #[test]
    fn test_first_violation_wins() {
        let install = Install::new("", guid(), guid(), 0.0, 0.0);
        assert_eq!(failed_field(&install), "Id");
    }

    #[test]
    fn test_all_fields_correct() {
        let (id, product_id, worker_id) = (guid(), guid(), guid());
        let before = Utc::now();
        let install = Install::new(id.clone(), product_id.clone(), worker_id.clone(), 100.0, 15.5);

        assert!(install.validate().is_ok());
        assert_eq!(install.id(), id);
        assert_eq!(install.product_id(), product_id);
        assert_eq!(install.worker_id(), worker_id);
        assert_eq!(install.product_price(), 100.0);
        assert_eq!(install.install_price(), 15.5);
        assert!(install.install_date() >= before);
    }
}
