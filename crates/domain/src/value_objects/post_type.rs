//! PostType - Staff position category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a staff position; `None` is the unset sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PostType {
    #[default]
    None,
    Installer,
    Engineer,
    Assistant,
    Manager,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::None => "none",
            PostType::Installer => "installer",
            PostType::Engineer => "engineer",
            PostType::Assistant => "assistant",
            PostType::Manager => "manager",
        }
    }

    pub fn is_set(&self) -> bool {
        *self != PostType::None
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
