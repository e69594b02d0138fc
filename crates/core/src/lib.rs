//! `movebill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, rendering or I/O).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CatalogItemId, ClientId, InvoiceId, InvoiceItemId};
pub use value_object::ValueObject;
