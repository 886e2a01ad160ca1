//! Post - A staff position with a base salary

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{DomainError, DomainResult};
use crate::validation::{require_id, require_not_empty, require_positive};
use crate::value_objects::{PostStatus, PostType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    id: String,
    name: String,
    post_type: PostType,
    salary: f64,
    #[serde(default)]
    status: PostStatus,
}

impl Post {
    pub fn new(id: impl Into<String>, name: impl Into<String>, post_type: PostType, salary: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            post_type,
            salary,
            status: PostStatus::Active,
        }
    }

    /// Same post in the given lifecycle state
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn post_type(&self) -> PostType {
        self.post_type
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }
}

impl Validate for Post {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.id, "Id")?;
        require_not_empty(&self.name, "Name")?;
        if !self.post_type.is_set() {
            return Err(DomainError::validation("PostType", "Field PostType is empty"));
        }
        require_positive(self.salary, "Salary")?;
        Ok(())
    }
}
