//! Recommender capability traits.
//!
//! [`Model`] carries everything an incremental positive-only-feedback
//! recommender does besides ranking: lifecycle, lazy registration of users and
//! items, online updates and scoring. Ranking comes in two capabilities:
//!
//! - [`Recommender`]: context-free ranking
//! - [`FeatureRecommender`]: ranking conditioned on a context vector
//!
//! A model implements one or both; callers bound on the one they need. Both
//! rank through [`scores2recos`](crate::ranking::scores2recos).
//!
//! Queries take `&self` and updates `&mut self`, so scoring can never mutate
//! the model. Callers sharing a model across threads must add their own
//! single-writer discipline (e.g. an `RwLock`).

use flurry_entity::{Event, Item, ItemId, User, UserId};

use crate::error::{RecError, Result};
use crate::ranking::Recommendations;
use crate::registry::Registry;

/// Lifecycle, registration, update and scoring of an incremental model.
///
/// Events must be fed to [`update`](Self::update) in arrival order; online
/// steps generally do not commute.
pub trait Model {
	/// Per-user payload stored in the registry.
	type UserExt;
	/// Per-item payload stored in the registry.
	type ItemExt;

	/// The registry of users and items seen so far.
	fn registry(&self) -> &Registry<Self::UserExt, Self::ItemExt>;

	/// Resets all learnable parameters to their initial state.
	///
	/// Must be called once before any update or query, and may be called
	/// again to start over.
	fn init_model(&mut self);

	/// Registers a user that [`is_new_user`](Self::is_new_user).
	///
	/// Implementations register the user in their registry (failing with
	/// [`RecError::DuplicateUser`] otherwise) and allocate per-user
	/// parameters. A failed call leaves the model unchanged.
	fn add_user(&mut self, user: &User) -> Result<()>;

	/// Registers an item that [`is_new_item`](Self::is_new_item).
	fn add_item(&mut self, item: &Item) -> Result<()>;

	/// Applies one observed event.
	///
	/// `is_batch_train` marks the initial bulk load, as opposed to steady-state
	/// streaming updates.
	fn update(&mut self, e: &Event, is_batch_train: bool) -> Result<()>;

	/// Scores `candidates` for `user`, one score per candidate in the same order.
	///
	/// Unregistered users or candidates are an error, not a cold-start case.
	fn predict(&self, user: &User, candidates: &[ItemId]) -> Result<Vec<f64>>;

	/// Returns true if `user` has never been registered.
	fn is_new_user(&self, user: UserId) -> bool {
		self.registry().is_new_user(user)
	}

	/// Returns true if `item` has never been registered.
	fn is_new_item(&self, item: ItemId) -> bool {
		self.registry().is_new_item(item)
	}

	/// Number of registered users.
	fn n_user(&self) -> usize {
		self.registry().n_user()
	}

	/// Number of registered items.
	fn n_item(&self) -> usize {
		self.registry().n_item()
	}

	/// Rejects an event [`update`](Self::update) would fail on, without
	/// touching the model.
	///
	/// [`observe`](Self::observe) runs this before registering anything, so
	/// implementations whose `update` can fail on event contents (e.g. context
	/// length) must report that failure here too.
	fn check_event(&self, _e: &Event) -> Result<()> {
		Ok(())
	}

	/// Registers the event's user and item on first sight, then updates.
	///
	/// The event is validated with [`check_event`](Self::check_event) first; a
	/// rejected event registers nothing.
	fn observe(&mut self, e: &Event, is_batch_train: bool) -> Result<()> {
		self.check_event(e)?;
		if self.is_new_user(e.user_id()) {
			tracing::debug!(user = %e.user_id(), "First sight of user");
			self.add_user(&e.user)?;
		}
		if self.is_new_item(e.item_id()) {
			tracing::debug!(item = %e.item_id(), "First sight of item");
			self.add_item(&e.item)?;
		}
		self.update(e, is_batch_train)
	}
}

/// Context-free ranking.
pub trait Recommender: Model {
	/// Ranks `target_i_indices` for `user`, best first.
	///
	/// Implementations compute scores and hand them to
	/// [`scores2recos`](crate::ranking::scores2recos).
	fn recommend(&self, user: &User, target_i_indices: &[ItemId]) -> Result<Recommendations>;
}

/// Ranking conditioned on a context feature vector.
pub trait FeatureRecommender: Model {
	/// Ranks `target_i_indices` for `user` in `context`, best first.
	///
	/// The length and meaning of `context` are defined by the model; see
	/// [`check_context`].
	fn recommend(&self, user: &User, target_i_indices: &[ItemId], context: &[f64]) -> Result<Recommendations>;
}

/// Checks that `context` has the `expected` number of features.
pub fn check_context(expected: usize, context: &[f64]) -> Result<()> {
	if context.len() == expected {
		Ok(())
	} else {
		Err(RecError::ContextMismatch {
			expected,
			actual: context.len(),
		})
	}
}
