use flurry_entity::{ItemId, UserId};
use thiserror::Error;

/// Errors surfaced by registries, rankings and recommenders.
///
/// A call that returns an error has left the model untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecError {
	/// `add_user` was called for an index that is already registered.
	#[error("user already registered: {0}")]
	DuplicateUser(UserId),
	/// `add_item` was called for an index that is already registered.
	#[error("item already registered: {0}")]
	DuplicateItem(ItemId),
	/// The user was never registered.
	#[error("unknown user: {0}")]
	UnknownUser(UserId),
	/// The item was never registered.
	#[error("unknown item: {0}")]
	UnknownItem(ItemId),
	/// Scores and target items differ in length.
	#[error("shape mismatch: {scores} scores for {targets} target items")]
	ShapeMismatch { scores: usize, targets: usize },
	/// The context vector does not have the length the model expects.
	#[error("context mismatch: expected {expected} features, got {actual}")]
	ContextMismatch { expected: usize, actual: usize },
	/// Model configuration could not be parsed.
	#[error("invalid configuration: {0}")]
	Config(String),
}

impl From<toml::de::Error> for RecError {
	fn from(err: toml::de::Error) -> Self {
		RecError::Config(err.to_string())
	}
}

/// Result type for recommender operations.
pub type Result<T> = std::result::Result<T, RecError>;
