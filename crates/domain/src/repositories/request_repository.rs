//! RequestRepository - Storage contract for service requests

use chrono::{DateTime, Utc};

use crate::entities::Request;
use crate::errors::DomainResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub product_id: Option<String>,
}

impl RequestFilter {
    pub fn period(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            product_id: None,
        }
    }

    pub fn with_product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }
}

pub trait RequestRepository: Send + Sync {
    fn list(&self, filter: RequestFilter) -> DomainResult<Option<Vec<Request>>>;

    fn get_by_id(&self, id: &str) -> DomainResult<Option<Request>>;

    fn add(&self, request: Request) -> DomainResult<()>;

    /// Marks the request cancelled; `NotFound` for an unknown id
    fn delete(&self, id: &str) -> DomainResult<()>;
}
