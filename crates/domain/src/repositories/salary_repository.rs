//! SalaryRepository - Storage contract for computed salaries

use chrono::{DateTime, Utc};

use crate::entities::Salary;
use crate::errors::DomainResult;

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryFilter {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub worker_id: Option<String>,
}

impl SalaryFilter {
    pub fn period(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from,
            to,
            worker_id: None,
        }
    }

    pub fn with_worker(mut self, worker_id: impl Into<String>) -> Self {
        self.worker_id = Some(worker_id.into());
        self
    }
}

pub trait SalaryRepository: Send + Sync {
    fn list(&self, filter: SalaryFilter) -> DomainResult<Option<Vec<Salary>>>;

    fn add(&self, salary: Salary) -> DomainResult<()>;
}
