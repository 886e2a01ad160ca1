//! Domain Entities - Core business records
//!
//! Entities are constructed from caller-supplied fields and checked with
//! [`Validate`] before any storage write. Cross-entity links are ids only.

mod install;
mod manufacturer;
mod post;
mod product;
mod product_price_history;
pub mod request;
mod request_line_item;
mod salary;
mod worker;

pub use install::Install;
pub use manufacturer::Manufacturer;
pub use post::Post;
pub use product::Product;
pub use product_price_history::ProductPriceHistory;
pub use request::Request;
pub use request_line_item::RequestLineItem;
pub use salary::Salary;
pub use worker::Worker;

use crate::errors::DomainResult;

/// Self-check of entity invariants
///
/// Reports the first violated rule in declaration order. Pure: never touches
/// storage and returns the same outcome on every call for the same entity.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}
