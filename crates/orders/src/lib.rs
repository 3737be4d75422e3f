//! Orders domain module.
//!
//! Holds the item model returned to callers and the `ItemSource` seam the HTTP
//! layer depends on. The upstream-backed implementation lives in
//! `orderitems-infra`.

pub mod item;
pub mod source;

pub use item::Item;
pub use source::{ItemSource, ItemSourceError};
