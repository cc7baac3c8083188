use crate::ids::{ItemId, UserId};

/// A user as seen by a recommender.
///
/// The feature vector is opaque to the recommender contract; concrete models
/// may read it (e.g. demographic features), and it may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
	/// Externally assigned, never reused index.
	pub index: UserId,
	/// User-specific attributes.
	pub feature: Vec<f64>,
}

impl User {
	/// Creates a user without features.
	pub fn new(index: usize) -> Self {
		Self {
			index: index.into(),
			feature: Vec::new(),
		}
	}

	/// Creates a user carrying a feature vector.
	pub fn with_feature(index: usize, feature: Vec<f64>) -> Self {
		Self {
			index: index.into(),
			feature,
		}
	}
}

/// An item as seen by a recommender.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
	/// Externally assigned, never reused index.
	pub index: ItemId,
	/// Item-specific attributes.
	pub feature: Vec<f64>,
}

impl Item {
	/// Creates an item without features.
	pub fn new(index: usize) -> Self {
		Self {
			index: index.into(),
			feature: Vec::new(),
		}
	}

	/// Creates an item carrying a feature vector.
	pub fn with_feature(index: usize, feature: Vec<f64>) -> Self {
		Self {
			index: index.into(),
			feature,
		}
	}
}

/// A single observed user-item interaction.
///
/// Positive-only feedback: `value` defaults to `1.0` and only records that the
/// interaction happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	pub user: User,
	pub item: Item,
	pub value: f64,
	/// Side information (time, session features) for context-aware models.
	pub context: Option<Vec<f64>>,
}

impl Event {
	/// Creates a positive event without context.
	pub fn new(user: User, item: Item) -> Self {
		Self {
			user,
			item,
			value: 1.0,
			context: None,
		}
	}

	/// Overrides the interaction value.
	pub fn with_value(mut self, value: f64) -> Self {
		self.value = value;
		self
	}

	/// Attaches a context vector.
	pub fn with_context(mut self, context: Vec<f64>) -> Self {
		self.context = Some(context);
		self
	}

	/// Index of the interacting user.
	#[inline]
	pub fn user_id(&self) -> UserId {
		self.user.index
	}

	/// Index of the interacted item.
	#[inline]
	pub fn item_id(&self) -> ItemId {
		self.item.index
	}

	/// Context vector, empty when none was attached.
	#[inline]
	pub fn context(&self) -> &[f64] {
		self.context.as_deref().unwrap_or(&[])
	}
}
