//! `acme-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no collaborators, no IO).

pub mod entity;
pub mod error;
pub mod operation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use operation::OperationResult;
