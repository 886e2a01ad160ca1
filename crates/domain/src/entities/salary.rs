//! Salary - Monthly pay computed for a worker

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::DomainResult;
use crate::validation::{require_id, require_positive};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    worker_id: String,
    salary_date: DateTime<Utc>,
    amount: f64,
}

impl Salary {
    pub fn new(worker_id: impl Into<String>, salary_date: DateTime<Utc>, amount: f64) -> Self {
        Self {
            worker_id: worker_id.into(),
            salary_date,
            amount,
        }
    }

    pub fn worker_id(&self) -> &str {
        &self.worker_id
    }

    pub fn salary_date(&self) -> DateTime<Utc> {
        self.salary_date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Validate for Salary {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.worker_id, "WorkerId")?;
        require_positive(self.amount, "Salary")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_validation() {
        let now = Utc::now();
        assert_eq!(Salary::new("", now, 10.0).validate().unwrap_err().field(), Some("WorkerId"));
        assert_eq!(Salary::new("worker", now, 10.0).validate().unwrap_err().field(), Some("WorkerId"));
        let worker_id = Uuid::new_v4().to_string();
        assert_eq!(Salary::new(worker_id.clone(), now, 0.0).validate().unwrap_err().field(), Some("Salary"));
        assert!(Salary::new(worker_id, now, 1200.0).validate().is_ok());
    }
}
