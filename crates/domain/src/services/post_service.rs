//! PostService - Business rules for job posts
//!
//! Delete and restore go through the `PostStatus` state machine before
//! storage is touched.

use std::sync::Arc;
use tracing::{debug, info};

use super::{rejected, require_found, require_list, to_json};
use crate::entities::{Post, Validate};
use crate::errors::DomainResult;
use crate::repositories::PostRepository;
use crate::validation::{check_id_argument, check_present_argument, is_guid};
use crate::value_objects::PostTransition;

pub trait PostServiceTrait: Send + Sync {
    fn list_all(&self) -> DomainResult<Vec<Post>>;

    /// Every recorded version of one post
    fn list_history(&self, post_id: &str) -> DomainResult<Vec<Post>>;

    fn get_by_data(&self, data: &str) -> DomainResult<Post>;

    fn insert(&self, post: Post) -> DomainResult<()>;

    fn update(&self, post: Post) -> DomainResult<()>;

    fn delete(&self, id: &str) -> DomainResult<()>;

    fn restore(&self, id: &str) -> DomainResult<()>;
}

pub struct PostService<R>
where
    R: PostRepository,
{
    repository: Arc<R>,
}

impl<R> PostService<R>
where
    R: PostRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Load the post and check that `transition` is allowed from its status
    fn check_transition(&self, id: &str, transition: PostTransition) -> DomainResult<()> {
        check_id_argument(id, "id").map_err(rejected)?;
        let post = require_found(self.repository.get_by_id(id)?, id)?;
        let next = post.status().apply(transition).map_err(rejected)?;
        debug!(id, from = %post.status(), to = %next, "Post transition accepted");
        Ok(())
    }
}

impl<R> PostServiceTrait for PostService<R>
where
    R: PostRepository,
{
    fn list_all(&self) -> DomainResult<Vec<Post>> {
        info!("list_all");
        require_list(self.repository.list()?)
    }

    fn list_history(&self, post_id: &str) -> DomainResult<Vec<Post>> {
        info!(post_id, "list_history");
        check_id_argument(post_id, "postId").map_err(rejected)?;
        require_list(self.repository.list_history(post_id)?)
    }

    fn get_by_data(&self, data: &str) -> DomainResult<Post> {
        info!(data, "get_by_data");
        check_present_argument(data, "data").map_err(rejected)?;
        let found = if is_guid(data) {
            self.repository.get_by_id(data)?
        } else {
            self.repository.get_by_name(data)?
        };
        require_found(found, data)
    }

    fn insert(&self, post: Post) -> DomainResult<()> {
        info!(post = %to_json(&post), "insert");
        post.validate().map_err(rejected)?;
        self.repository.add(post)
    }

    fn update(&self, post: Post) -> DomainResult<()> {
        info!(post = %to_json(&post), "update");
        post.validate().map_err(rejected)?;
        self.repository.update(post)
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        info!(id, "delete");
        self.check_transition(id, PostTransition::Delete)?;
        self.repository.delete(id)
    }

    fn restore(&self, id: &str) -> DomainResult<()> {
        info!(id, "restore");
        self.check_transition(id, PostTransition::Restore)?;
        self.repository.restore(id)
    }
}
