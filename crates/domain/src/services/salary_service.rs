//! SalaryService - Monthly salary calculation
//!
//! A worker's salary for a month is the post salary plus a share of the
//! install prices of every install that worker performed in that month.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{rejected, require_found, require_list};
use crate::config::SalaryConfig;
use crate::entities::{Salary, Validate, Worker};
use crate::errors::DomainResult;
use crate::repositories::{
    InstallFilter, InstallRepository, PostRepository, SalaryFilter, SalaryRepository,
    WorkerFilter, WorkerRepository,
};
use crate::validation::{check_id_argument, check_period};
use crate::value_objects::Period;

pub trait SalaryServiceTrait: Send + Sync {
    fn list_by_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Vec<Salary>>;

    fn list_by_period_and_worker(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        worker_id: &str,
    ) -> DomainResult<Vec<Salary>>;

    /// Create one salary record per active worker for the month containing
    /// `date`. Workers already paid for that month are skipped. All records
    /// are computed before any is stored, so a missing post or install list
    /// leaves storage untouched. Returns the records created by this call.
    fn calculate_by_month(&self, date: DateTime<Utc>) -> DomainResult<Vec<Salary>>;
}

pub struct SalaryService<S, W, P, I>
where
    S: SalaryRepository,
    W: WorkerRepository,
    P: PostRepository,
    I: InstallRepository,
{
    config: SalaryConfig,
    salaries: Arc<S>,
    workers: Arc<W>,
    posts: Arc<P>,
    installs: Arc<I>,
}

impl<S, W, P, I> SalaryService<S, W, P, I>
where
    S: SalaryRepository,
    W: WorkerRepository,
    P: PostRepository,
    I: InstallRepository,
{
    pub fn new(
        config: SalaryConfig,
        salaries: Arc<S>,
        workers: Arc<W>,
        posts: Arc<P>,
        installs: Arc<I>,
    ) -> Self {
        Self {
            config,
            salaries,
            workers,
            posts,
            installs,
        }
    }

    fn already_paid(&self, worker: &Worker, month: &Period) -> DomainResult<bool> {
        let existing = self
            .salaries
            .list(SalaryFilter::period(month.from(), month.to()).with_worker(worker.id()))?;
        Ok(existing.is_some_and(|salaries| !salaries.is_empty()))
    }

    fn salary_for(&self, worker: &Worker, month: &Period) -> DomainResult<Salary> {
        let post = require_found(self.posts.get_by_id(worker.post_id())?, worker.post_id())?;
        let installs = require_list(self.installs.list(
            InstallFilter::period(month.from(), month.to()).with_worker(worker.id()),
        )?)?;

        let install_total: f64 = installs.iter().map(|install| install.install_price()).sum();
        let amount = post.salary() + self.config.install_bonus_rate * install_total;
        debug!(
            worker_id = worker.id(),
            post_salary = post.salary(),
            installs = installs.len(),
            install_total,
            amount,
            "Salary computed"
        );

        Ok(Salary::new(worker.id(), month.from(), amount))
    }
}

impl<S, W, P, I> SalaryServiceTrait for SalaryService<S, W, P, I>
where
    S: SalaryRepository,
    W: WorkerRepository,
    P: PostRepository,
    I: InstallRepository,
{
    fn list_by_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Vec<Salary>> {
        info!(%from, %to, "list_by_period");
        check_period(from, to).map_err(rejected)?;
        require_list(self.salaries.list(SalaryFilter::period(from, to))?)
    }

    fn list_by_period_and_worker(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        worker_id: &str,
    ) -> DomainResult<Vec<Salary>> {
        info!(%from, %to, worker_id, "list_by_period_and_worker");
        check_period(from, to).map_err(rejected)?;
        check_id_argument(worker_id, "workerId").map_err(rejected)?;
        require_list(
            self.salaries
                .list(SalaryFilter::period(from, to).with_worker(worker_id))?,
        )
    }

    fn calculate_by_month(&self, date: DateTime<Utc>) -> DomainResult<Vec<Salary>> {
        info!(%date, "calculate_by_month");
        let started = Instant::now();
        let month = Period::month_of(date);
        let workers = require_list(self.workers.list(WorkerFilter::new(true))?)?;

        // Nothing is written unless every pending salary resolves and validates
        let mut pending = Vec::new();
        for worker in &workers {
            if self.already_paid(worker, &month)? {
                debug!(worker_id = worker.id(), "Salary already recorded for month");
                continue;
            }
            let salary = self.salary_for(worker, &month)?;
            salary.validate().map_err(rejected)?;
            pending.push(salary);
        }

        let mut created = Vec::with_capacity(pending.len());
        for salary in pending {
            self.salaries.add(salary.clone())?;
            created.push(salary);
        }

        info!(
            month_start = %month.from(),
            workers = workers.len(),
            created = created.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Monthly salary calculation finished"
        );
        Ok(created)
    }
}
