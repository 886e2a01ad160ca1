//! Storage Contracts - Ports for the persistence layer
//!
//! The business layer depends only on these traits; implementations live
//! outside this crate. List operations return `Ok(None)` when storage has no
//! list to give (distinct from `Ok(Some(vec![]))`), single lookups return
//! `Ok(None)` when nothing matches. Duplicate keys and other storage faults
//! are reported as `AlreadyExists`, `NotFound` or `Storage` errors.

mod install_repository;
mod manufacturer_repository;
mod post_repository;
mod product_repository;
mod request_repository;
mod salary_repository;
mod worker_repository;

pub use install_repository::{InstallFilter, InstallRepository};
pub use manufacturer_repository::ManufacturerRepository;
pub use post_repository::PostRepository;
pub use product_repository::ProductRepository;
pub use request_repository::{RequestFilter, RequestRepository};
pub use salary_repository::{SalaryFilter, SalaryRepository};
pub use worker_repository::{WorkerFilter, WorkerRepository};
