//! Domain Layer - InstallDesk business rules
//!
//! Holds ONLY business logic, with no dependencies on:
//! - Storage engines (persistence is reached through repository traits)
//! - Presentation (no web, CLI or UI frameworks)
//!
//! Layout:
//! - Entities: self-validating business records (Install, Request, Worker, ...)
//! - Value Objects: small immutable types (Period, PostStatus, ProductType)
//! - Repository Abstractions: storage contracts implemented elsewhere
//! - Services: argument checks, validation and delegation to storage

pub mod config;
pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod value_objects;

// Re-export core domain types
pub use config::{BusinessConfig, LoggingConfig, Profile, SalaryConfig};
pub use entities::{
    Install, Manufacturer, Post, Product, ProductPriceHistory, Request, RequestLineItem, Salary,
    Validate, Worker,
};
pub use errors::{DomainError, DomainResult, ErrorCategory};
pub use repositories::{
    InstallFilter, InstallRepository, ManufacturerRepository, PostRepository, ProductRepository,
    RequestFilter, RequestRepository, SalaryFilter, SalaryRepository, WorkerFilter,
    WorkerRepository,
};
pub use services::{
    InstallService, InstallServiceTrait, ManufacturerService, ManufacturerServiceTrait,
    PostService, PostServiceTrait, ProductService, ProductServiceTrait, RequestService,
    RequestServiceTrait, SalaryService, SalaryServiceTrait, WorkerService, WorkerServiceTrait,
};
pub use validation::{is_date_not_older, is_empty, is_guid};
pub use value_objects::{Period, PostStatus, PostTransition, PostType, ProductType};
