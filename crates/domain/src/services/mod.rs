//! Business-Logic Services - Gatekeepers in front of the storage contracts
//!
//! Every operation logs its arguments first, then checks them, then validates
//! entities before writes, and only then calls storage. Storage results are
//! returned as-is except that an absent list becomes `EmptyResult` and an
//! absent record becomes `NotFound`. Storage errors pass through untouched.

pub mod install_service;
pub mod manufacturer_service;
pub mod post_service;
pub mod product_service;
pub mod request_service;
pub mod salary_service;
pub mod worker_service;

pub use install_service::{InstallService, InstallServiceTrait};
pub use manufacturer_service::{ManufacturerService, ManufacturerServiceTrait};
pub use post_service::{PostService, PostServiceTrait};
pub use product_service::{ProductService, ProductServiceTrait};
pub use request_service::{RequestService, RequestServiceTrait};
pub use salary_service::{SalaryService, SalaryServiceTrait};
pub use worker_service::{WorkerService, WorkerServiceTrait};

use crate::errors::{DomainError, DomainResult};
use serde::Serialize;
use tracing::warn;

/// Log a failure detected by the business layer itself
pub(crate) fn rejected(error: DomainError) -> DomainError {
    warn!(error = %error, category = ?error.category(), "Operation rejected");
    error
}

/// Upgrade an absent storage list into `EmptyResult`
pub(crate) fn require_list<T>(list: Option<Vec<T>>) -> DomainResult<Vec<T>> {
    list.ok_or_else(|| rejected(DomainError::EmptyResult))
}

/// Upgrade an absent storage record into `NotFound(key)`
pub(crate) fn require_found<T>(item: Option<T>, key: &str) -> DomainResult<T> {
    item.ok_or_else(|| rejected(DomainError::NotFound(key.to_string())))
}

/// Entity rendered for the audit log
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
