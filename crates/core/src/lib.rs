//! `atm-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no directory, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod pin;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::CardId;
pub use money::Money;
pub use pin::{PIN_LENGTH, Pin};
pub use value_object::ValueObject;
