//! Worker - A staff member who performs installs

use chrono::{DateTime, Months, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{DomainError, DomainResult};
use crate::validation::{require_id, require_not_empty};

/// Youngest age at which a worker can be employed
const MIN_WORKING_AGE_YEARS: u32 = 16;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\w!#$%&'*+\-/=?\^_`{|}~]+(\.[\w!#$%&'*+\-/=?\^_`{|}~]+)*@((([\-\w]+\.)+[a-zA-Z]{2,4})|(([0-9]{1,3}\.){3}[0-9]{1,3}))\z",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    id: String,
    full_name: String,
    post_id: String,
    birth_date: DateTime<Utc>,
    employment_date: DateTime<Utc>,
    email: String,
    is_deleted: bool,
}

impl Worker {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        post_id: impl Into<String>,
        birth_date: DateTime<Utc>,
        employment_date: DateTime<Utc>,
        email: impl Into<String>,
        is_deleted: bool,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            post_id: post_id.into(),
            birth_date,
            employment_date,
            email: email.into(),
            is_deleted,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    pub fn employment_date(&self) -> DateTime<Utc> {
        self.employment_date
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn latest_allowed_birth_date(today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_months(Months::new(MIN_WORKING_AGE_YEARS * 12))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Age at employment in 365-day years
    fn years_at_employment(&self) -> f64 {
        let elapsed = self.employment_date - self.birth_date;
        elapsed.num_seconds() as f64 / 86_400.0 / 365.0
    }
}

impl Validate for Worker {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.id, "Id")?;
        require_id(&self.post_id, "PostId")?;
        require_not_empty(&self.full_name, "FullName")?;

        let birth_day = self.birth_date.date_naive();
        if birth_day > Self::latest_allowed_birth_date(Utc::now().date_naive()) {
            return Err(DomainError::validation(
                "BirthDate",
                format!("Minors cannot be hired (BirthDate = {birth_day})"),
            ));
        }

        let employment_day = self.employment_date.date_naive();
        if employment_day < birth_day {
            return Err(DomainError::validation(
                "EmploymentDate",
                "The date of employment cannot be less than the date of birth",
            ));
        }

        if self.years_at_employment() < f64::from(MIN_WORKING_AGE_YEARS) {
            return Err(DomainError::validation(
                "EmploymentDate",
                format!(
                    "Minors cannot be hired (EmploymentDate = {employment_day}, BirthDate = {birth_day})"
                ),
            ));
        }

        require_not_empty(&self.email, "Email")?;
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(DomainError::validation("Email", "Field Email is not an e-mail"));
        }
        Ok(())
    }
}
