//! InstallRepository - Storage contract for installs

use chrono::{DateTime, Utc};

use crate::entities::Install;
use crate::errors::DomainResult;

/// Arguments of an install listing; `None` means "no restriction"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub worker_id: Option<String>,
    pub product_id: Option<String>,
}

impl InstallFilter {
    /// Installs made within `[from, to)`
    pub fn period(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    pub fn with_worker(mut self, worker_id: impl Into<String>) -> Self {
        self.worker_id = Some(worker_id.into());
        self
    }

    pub fn with_product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }
}

pub trait InstallRepository: Send + Sync {
    fn list(&self, filter: InstallFilter) -> DomainResult<Option<Vec<Install>>>;

    fn get_by_id(&self, id: &str) -> DomainResult<Option<Install>>;

    /// Fails with `AlreadyExists` on a duplicate id
    fn add(&self, install: Install) -> DomainResult<()>;
}
