//! Value objects exchanged between event sources and recommenders.
//!
//! - [`UserId`] / [`ItemId`]: externally assigned indices
//! - [`User`] / [`Item`]: entities with opaque feature vectors
//! - [`Event`]: one observed interaction, with optional context

/// User and item entities plus observed events.
pub mod entity;
/// Identifier newtypes.
pub mod ids;

pub use entity::{Event, Item, User};
pub use ids::{ItemId, UserId};
