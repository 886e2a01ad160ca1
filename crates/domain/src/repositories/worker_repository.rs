//! WorkerRepository - Storage contract for workers

use chrono::{DateTime, Utc};

use crate::entities::Worker;
use crate::errors::DomainResult;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkerFilter {
    pub only_active: bool,
    pub post_id: Option<String>,
    pub birth_date_from: Option<DateTime<Utc>>,
    pub birth_date_to: Option<DateTime<Utc>>,
    pub employment_date_from: Option<DateTime<Utc>>,
    pub employment_date_to: Option<DateTime<Utc>>,
}

impl WorkerFilter {
    pub fn new(only_active: bool) -> Self {
        Self {
            only_active,
            post_id: None,
            birth_date_from: None,
            birth_date_to: None,
            employment_date_from: None,
            employment_date_to: None,
        }
    }

    pub fn with_post(mut self, post_id: impl Into<String>) -> Self {
        self.post_id = Some(post_id.into());
        self
    }

    pub fn born_between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.birth_date_from = Some(from);
        self.birth_date_to = Some(to);
        self
    }

    pub fn employed_between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.employment_date_from = Some(from);
        self.employment_date_to = Some(to);
        self
    }
}

pub trait WorkerRepository: Send + Sync {
    fn list(&self, filter: WorkerFilter) -> DomainResult<Option<Vec<Worker>>>;

    fn get_by_id(&self, id: &str) -> DomainResult<Option<Worker>>;

    fn get_by_name(&self, full_name: &str) -> DomainResult<Option<Worker>>;

    fn get_by_email(&self, email: &str) -> DomainResult<Option<Worker>>;

    fn add(&self, worker: Worker) -> DomainResult<()>;

    fn update(&self, worker: Worker) -> DomainResult<()>;

    /// Soft delete
    fn delete(&self, id: &str) -> DomainResult<()>;
}
