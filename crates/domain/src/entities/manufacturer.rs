//! Manufacturer - Producer of products, resolvable by current or former name

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::DomainResult;
use crate::validation::{require_id, require_not_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    id: String,
    name: String,
    #[serde(default)]
    previous_name: Option<String>,
    #[serde(default)]
    previous_previous_name: Option<String>,
}

impl Manufacturer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            previous_name: None,
            previous_previous_name: None,
        }
    }

    /// Manufacturer with an explicit naming history (for reconstruction from storage)
    pub fn with_history(
        id: impl Into<String>,
        name: impl Into<String>,
        previous_name: Option<String>,
        previous_previous_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            previous_name,
            previous_previous_name,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn previous_name(&self) -> Option<&str> {
        self.previous_name.as_deref()
    }

    pub fn previous_previous_name(&self) -> Option<&str> {
        self.previous_previous_name.as_deref()
    }

    /// Copy of this manufacturer under `new_name`, shifting the old names back
    ///
    /// Renaming to the current name returns an unchanged copy.
    pub fn renamed(&self, new_name: &str) -> Self {
        if self.name == new_name {
            return self.clone();
        }
        Self {
            id: self.id.clone(),
            name: new_name.to_string(),
            previous_name: Some(self.name.clone()),
            previous_previous_name: self.previous_name.clone(),
        }
    }

    /// Whether `name` is one of the former names
    pub fn was_named(&self, name: &str) -> bool {
        self.previous_name() == Some(name) || self.previous_previous_name() == Some(name)
    }
}

impl Validate for Manufacturer {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.id, "Id")?;
        require_not_empty(&self.name, "Name")?;
        Ok(())
    }
}
