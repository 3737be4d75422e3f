//! `orderitems-core` — identifiers and domain primitives shared by every crate.
//!
//! Nothing in here performs IO.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::DomainError;
pub use id::{OrderId, PackageId};
pub use value_object::ValueObject;
