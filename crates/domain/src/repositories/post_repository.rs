//! PostRepository - Storage contract for posts
//!
//! Storage keeps every version of a post; `list_history` returns them all.

use crate::entities::Post;
use crate::errors::DomainResult;

pub trait PostRepository: Send + Sync {
    fn list(&self) -> DomainResult<Option<Vec<Post>>>;

    fn list_history(&self, post_id: &str) -> DomainResult<Option<Vec<Post>>>;

    fn get_by_id(&self, id: &str) -> DomainResult<Option<Post>>;

    fn get_by_name(&self, name: &str) -> DomainResult<Option<Post>>;

    fn add(&self, post: Post) -> DomainResult<()>;

    fn update(&self, post: Post) -> DomainResult<()>;

    /// Active -> Deleted
    fn delete(&self, id: &str) -> DomainResult<()>;

    /// Deleted -> Active
    fn restore(&self, id: &str) -> DomainResult<()>;
}
