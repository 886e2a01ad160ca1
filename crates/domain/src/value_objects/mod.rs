//! Domain Value Objects - Immutable domain concepts
//!
//! Value objects represent business concepts without identity.

pub mod period;
pub mod post_status;
mod post_type;
mod product_type;

pub use period::Period;
pub use post_status::{PostStatus, PostTransition};
pub use post_type::PostType;
pub use product_type::ProductType;
