//! RequestService - Business rules for service requests
//!
//! Cancellation is terminal here; nothing un-cancels a request.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use super::{rejected, require_found, require_list, to_json};
use crate::entities::{Request, Validate};
use crate::errors::DomainResult;
use crate::repositories::{RequestFilter, RequestRepository};
use crate::validation::{check_id_argument, check_period};

pub trait RequestServiceTrait: Send + Sync {
    fn list_by_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Vec<Request>>;

    fn list_by_product_and_period(
        &self,
        product_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Request>>;

    fn get_by_key(&self, id: &str) -> DomainResult<Request>;

    fn insert(&self, request: Request) -> DomainResult<()>;

    fn cancel(&self, id: &str) -> DomainResult<()>;
}

pub struct RequestService<R>
where
    R: RequestRepository,
{
    repository: Arc<R>,
}

impl<R> RequestService<R>
where
    R: RequestRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> RequestServiceTrait for RequestService<R>
where
    R: RequestRepository,
{
    fn list_by_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Vec<Request>> {
        info!(%from, %to, "list_by_period");
        check_period(from, to).map_err(rejected)?;
        require_list(self.repository.list(RequestFilter::period(from, to))?)
    }

    fn list_by_product_and_period(
        &self,
        product_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Request>> {
        info!(product_id, %from, %to, "list_by_product_and_period");
        check_period(from, to).map_err(rejected)?;
        check_id_argument(product_id, "productId").map_err(rejected)?;
        require_list(
            self.repository
                .list(RequestFilter::period(from, to).with_product(product_id))?,
        )
    }

    fn get_by_key(&self, id: &str) -> DomainResult<Request> {
        info!(id, "get_by_key");
        check_id_argument(id, "id").map_err(rejected)?;
        require_found(self.repository.get_by_id(id)?, id)
    }

    fn insert(&self, request: Request) -> DomainResult<()> {
        info!(request = %to_json(&request), "insert");
        request.validate().map_err(rejected)?;
        self.repository.add(request)
    }

    fn cancel(&self, id: &str) -> DomainResult<()> {
        info!(id, "cancel");
        check_id_argument(id, "id").map_err(rejected)?;
        self.repository.delete(id)
    }
}
