//! Identifier newtypes for users and items.
//!
//! Indices are assigned externally, monotonically, and never reused. Keeping
//! users and items in distinct types prevents passing one where the other is
//! expected.

macro_rules! define_id {
	($(#[$meta:meta])* $name:ident, $label:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub struct $name(pub usize);

		impl $name {
			/// Returns the underlying index.
			#[inline]
			pub const fn index(self) -> usize {
				self.0
			}
		}

		impl From<usize> for $name {
			#[inline]
			fn from(index: usize) -> Self {
				Self(index)
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(f, concat!($label, "({})"), self.0)
			}
		}
	};
}

define_id!(
	/// Numeric identifier of a user.
	UserId,
	"UserId"
);

define_id!(
	/// Numeric identifier of an item.
	ItemId,
	"ItemId"
);
