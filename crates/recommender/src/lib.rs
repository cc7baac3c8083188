//! Contract for incremental recommenders learning from positive-only feedback.
//!
//! - [`Registry`]: users and items seen so far, with per-user observed items
//! - [`Model`]: lifecycle, registration, online updates and scoring
//! - [`Recommender`] / [`FeatureRecommender`]: plain and context-aware ranking
//! - [`scores2recos`]: the score-to-ranking conversion every model shares
//! - [`ModelConfig`]: TOML configuration

/// TOML configuration.
pub mod config;
/// Error type shared by all operations.
pub mod error;
/// Recommender capability traits.
pub mod model;
/// Score-to-ranking conversion.
pub mod ranking;
/// User and item bookkeeping.
pub mod registry;

pub use config::{ModelConfig, RankingConfig, RegistryConfig};
pub use error::{RecError, Result};
pub use flurry_entity::{Event, Item, ItemId, User, UserId};
pub use model::{FeatureRecommender, Model, Recommender, check_context};
pub use ranking::{Recommendations, ScoreOrder, scores2recos};
pub use registry::{ItemRecord, Registry, UserRecord};
