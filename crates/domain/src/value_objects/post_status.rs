//! PostStatus - Soft-delete lifecycle of a post
//!
//! Delete moves Active to Deleted, Restore moves Deleted back to Active.
//! Any other combination is rejected.

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PostStatus {
    #[default]
    Active,
    Deleted,
}

/// Operations that move a post between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTransition {
    Delete,
    Restore,
}

impl PostTransition {
    /// State the transition leads to
    pub fn target(&self) -> PostStatus {
        match self {
            PostTransition::Delete => PostStatus::Deleted,
            PostTransition::Restore => PostStatus::Active,
        }
    }
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Active => "active",
            PostStatus::Deleted => "deleted",
        }
    }

    /// Check if this status allows the transition
    pub fn can_apply(&self, transition: PostTransition) -> bool {
        matches!(
            (self, transition),
            (PostStatus::Active, PostTransition::Delete)
                | (PostStatus::Deleted, PostTransition::Restore)
        )
    }

    /// Resulting status, or `InvalidStateTransition`
    pub fn apply(&self, transition: PostTransition) -> DomainResult<PostStatus> {
        if !self.can_apply(transition) {
            return Err(DomainError::InvalidStateTransition {
                from: *self,
                to: transition.target(),
            });
        }
        Ok(transition.target())
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
