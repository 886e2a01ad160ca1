//! InstallService - Business rules for installs

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use super::{rejected, require_found, require_list, to_json};
use crate::entities::{Install, Validate};
use crate::errors::DomainResult;
use crate::repositories::{InstallFilter, InstallRepository};
use crate::validation::{check_id_argument, check_period};

/// Business operations on installs
pub trait InstallServiceTrait: Send + Sync {
    fn list_by_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Vec<Install>>;

    fn list_by_worker_and_period(
        &self,
        worker_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Install>>;

    fn list_by_product_and_period(
        &self,
        product_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Install>>;

    fn get_by_key(&self, id: &str) -> DomainResult<Install>;

    fn insert(&self, install: Install) -> DomainResult<()>;
}

pub struct InstallService<R>
where
    R: InstallRepository,
{
    repository: Arc<R>,
}

impl<R> InstallService<R>
where
    R: InstallRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> InstallServiceTrait for InstallService<R>
where
    R: InstallRepository,
{
    fn list_by_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Vec<Install>> {
        info!(%from, %to, "list_by_period");
        check_period(from, to).map_err(rejected)?;
        require_list(self.repository.list(InstallFilter::period(from, to))?)
    }

    fn list_by_worker_and_period(
        &self,
        worker_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Install>> {
        info!(worker_id, %from, %to, "list_by_worker_and_period");
        check_period(from, to).map_err(rejected)?;
        check_id_argument(worker_id, "workerId").map_err(rejected)?;
        require_list(
            self.repository
                .list(InstallFilter::period(from, to).with_worker(worker_id))?,
        )
    }

    fn list_by_product_and_period(
        &self,
        product_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Install>> {
        info!(product_id, %from, %to, "list_by_product_and_period");
        check_period(from, to).map_err(rejected)?;
        check_id_argument(product_id, "productId").map_err(rejected)?;
        require_list(
            self.repository
                .list(InstallFilter::period(from, to).with_product(product_id))?,
        )
    }

    fn get_by_key(&self, id: &str) -> DomainResult<Install> {
        info!(id, "get_by_key");
        check_id_argument(id, "id").map_err(rejected)?;
        require_found(self.repository.get_by_id(id)?, id)
    }

    fn insert(&self, install: Install) -> DomainResult<()> {
        info!(install = %to_json(&install), "insert");
        install.validate().map_err(rejected)?;
        self.repository.add(install)
    }
}
