//! WorkerService - Business rules for staff records

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use super::{rejected, require_found, require_list, to_json};
use crate::entities::{Validate, Worker};
use crate::errors::DomainResult;
use crate::repositories::{WorkerFilter, WorkerRepository};
use crate::validation::{check_id_argument, check_period, check_present_argument, is_guid};

pub trait WorkerServiceTrait: Send + Sync {
    fn list_all(&self, only_active: bool) -> DomainResult<Vec<Worker>>;

    fn list_by_post(&self, post_id: &str, only_active: bool) -> DomainResult<Vec<Worker>>;

    fn list_by_birth_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        only_active: bool,
    ) -> DomainResult<Vec<Worker>>;

    fn list_by_employment_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        only_active: bool,
    ) -> DomainResult<Vec<Worker>>;

    /// Lookup by id, by email when `data` contains `@`, otherwise by full name
    fn get_by_data(&self, data: &str) -> DomainResult<Worker>;

    fn insert(&self, worker: Worker) -> DomainResult<()>;

    fn update(&self, worker: Worker) -> DomainResult<()>;

    fn delete(&self, id: &str) -> DomainResult<()>;
}

pub struct WorkerService<R>
where
    R: WorkerRepository,
{
    repository: Arc<R>,
}

impl<R> WorkerService<R>
where
    R: WorkerRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn list(&self, filter: WorkerFilter) -> DomainResult<Vec<Worker>> {
        require_list(self.repository.list(filter)?)
    }
}

impl<R> WorkerServiceTrait for WorkerService<R>
where
    R: WorkerRepository,
{
    fn list_all(&self, only_active: bool) -> DomainResult<Vec<Worker>> {
        info!(only_active, "list_all");
        self.list(WorkerFilter::new(only_active))
    }

    fn list_by_post(&self, post_id: &str, only_active: bool) -> DomainResult<Vec<Worker>> {
        info!(post_id, only_active, "list_by_post");
        check_id_argument(post_id, "postId").map_err(rejected)?;
        self.list(WorkerFilter::new(only_active).with_post(post_id))
    }

    fn list_by_birth_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        only_active: bool,
    ) -> DomainResult<Vec<Worker>> {
        info!(%from, %to, only_active, "list_by_birth_date");
        check_period(from, to).map_err(rejected)?;
        self.list(WorkerFilter::new(only_active).born_between(from, to))
    }

    fn list_by_employment_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        only_active: bool,
    ) -> DomainResult<Vec<Worker>> {
        info!(%from, %to, only_active, "list_by_employment_date");
        check_period(from, to).map_err(rejected)?;
        self.list(WorkerFilter::new(only_active).employed_between(from, to))
    }

    fn get_by_data(&self, data: &str) -> DomainResult<Worker> {
        info!(data, "get_by_data");
        check_present_argument(data, "data").map_err(rejected)?;
        let found = if is_guid(data) {
            self.repository.get_by_id(data)?
        } else if data.contains('@') {
            self.repository.get_by_email(data)?
        } else {
            self.repository.get_by_name(data)?
        };
        require_found(found, data)
    }

    fn insert(&self, worker: Worker) -> DomainResult<()> {
        info!(worker = %to_json(&worker), "insert");
        worker.validate().map_err(rejected)?;
        self.repository.add(worker)
    }

    fn update(&self, worker: Worker) -> DomainResult<()> {
        info!(worker = %to_json(&worker), "update");
        worker.validate().map_err(rejected)?;
        self.repository.update(worker)
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        info!(id, "delete");
        check_id_argument(id, "id").map_err(rejected)?;
        self.repository.delete(id)
    }
}
