//! Per-model bookkeeping of registered users and items.
//!
//! Records live in growable tables in registration order, with a hash side
//! index from external id to slot. Records are never removed or replaced;
//! only mutated in place.

use flurry_entity::{Item, ItemId, User, UserId};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::RegistryConfig;
use crate::error::{RecError, Result};

/// What the registry remembers about a user.
#[derive(Debug, Clone)]
pub struct UserRecord<X = ()> {
	id: UserId,
	observed: FxHashSet<ItemId>,
	/// Per-user state attached by a concrete model.
	pub ext: X,
}

impl<X> UserRecord<X> {
	/// The user's index.
	#[inline]
	pub fn id(&self) -> UserId {
		self.id
	}

	/// Items this user has interacted with.
	#[inline]
	pub fn observed(&self) -> &FxHashSet<ItemId> {
		&self.observed
	}

	/// Returns true if the user has interacted with `item`.
	#[inline]
	pub fn has_observed(&self, item: ItemId) -> bool {
		self.observed.contains(&item)
	}
}

/// What the registry remembers about an item.
#[derive(Debug, Clone)]
pub struct ItemRecord<X = ()> {
	id: ItemId,
	/// Per-item state attached by a concrete model.
	pub ext: X,
}

impl<X> ItemRecord<X> {
	/// The item's index.
	#[inline]
	pub fn id(&self) -> ItemId {
		self.id
	}
}

/// Registry of every user and item a model has seen.
///
/// `UX` and `IX` are extension payloads stored alongside each record, for
/// models that keep per-entity parameters next to the bookkeeping.
#[derive(Debug, Clone)]
pub struct Registry<UX = (), IX = ()> {
	users: Vec<UserRecord<UX>>,
	user_slots: FxHashMap<UserId, usize>,
	items: Vec<ItemRecord<IX>>,
	item_slots: FxHashMap<ItemId, usize>,
}

impl<UX, IX> Default for Registry<UX, IX> {
	fn default() -> Self {
		Self::new()
	}
}

impl<UX, IX> Registry<UX, IX> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::with_capacity(0, 0)
	}

	/// Creates an empty registry with room for the given number of entities.
	pub fn with_capacity(users: usize, items: usize) -> Self {
		Self {
			users: Vec::with_capacity(users),
			user_slots: FxHashMap::with_capacity_and_hasher(users, Default::default()),
			items: Vec::with_capacity(items),
			item_slots: FxHashMap::with_capacity_and_hasher(items, Default::default()),
		}
	}

	/// Creates an empty registry sized by `config`.
	pub fn from_config(config: &RegistryConfig) -> Self {
		Self::with_capacity(config.user_capacity, config.item_capacity)
	}

	/// Number of registered users.
	#[inline]
	pub fn n_user(&self) -> usize {
		self.users.len()
	}

	/// Number of registered items.
	#[inline]
	pub fn n_item(&self) -> usize {
		self.items.len()
	}

	/// Returns true if `user` has never been registered.
	#[inline]
	pub fn is_new_user(&self, user: UserId) -> bool {
		!self.user_slots.contains_key(&user)
	}

	/// Returns true if `item` has never been registered.
	#[inline]
	pub fn is_new_item(&self, item: ItemId) -> bool {
		!self.item_slots.contains_key(&item)
	}

	/// Registers `user` with an explicit extension payload.
	///
	/// Fails with [`RecError::DuplicateUser`] if the index is already known,
	/// leaving the registry unchanged.
	pub fn add_user_with(&mut self, user: &User, ext: UX) -> Result<()> {
		let id = user.index;
		if !self.is_new_user(id) {
			return Err(RecError::DuplicateUser(id));
		}
		self.user_slots.insert(id, self.users.len());
		self.users.push(UserRecord {
			id,
			observed: FxHashSet::default(),
			ext,
		});
		tracing::trace!(user = %id, n_user = self.users.len(), "Registered user");
		Ok(())
	}

	/// Registers `item` with an explicit extension payload.
	///
	/// Fails with [`RecError::DuplicateItem`] if the index is already known,
	/// leaving the registry unchanged.
	pub fn add_item_with(&mut self, item: &Item, ext: IX) -> Result<()> {
		let id = item.index;
		if !self.is_new_item(id) {
			return Err(RecError::DuplicateItem(id));
		}
		self.item_slots.insert(id, self.items.len());
		self.items.push(ItemRecord { id, ext });
		tracing::trace!(item = %id, n_item = self.items.len(), "Registered item");
		Ok(())
	}

	/// Looks up a user record.
	#[inline]
	pub fn user(&self, user: UserId) -> Option<&UserRecord<UX>> {
		self.user_slots.get(&user).map(|&slot| &self.users[slot])
	}

	/// Looks up a user record for in-place mutation.
	#[inline]
	pub fn user_mut(&mut self, user: UserId) -> Option<&mut UserRecord<UX>> {
		let slot = *self.user_slots.get(&user)?;
		Some(&mut self.users[slot])
	}

	/// Looks up an item record.
	#[inline]
	pub fn item(&self, item: ItemId) -> Option<&ItemRecord<IX>> {
		self.item_slots.get(&item).map(|&slot| &self.items[slot])
	}

	/// Looks up an item record for in-place mutation.
	#[inline]
	pub fn item_mut(&mut self, item: ItemId) -> Option<&mut ItemRecord<IX>> {
		let slot = *self.item_slots.get(&item)?;
		Some(&mut self.items[slot])
	}

	/// Returns the user record, or [`RecError::UnknownUser`].
	pub fn ensure_user(&self, user: UserId) -> Result<&UserRecord<UX>> {
		self.user(user).ok_or(RecError::UnknownUser(user))
	}

	/// Returns the item record, or [`RecError::UnknownItem`].
	pub fn ensure_item(&self, item: ItemId) -> Result<&ItemRecord<IX>> {
		self.item(item).ok_or(RecError::UnknownItem(item))
	}

	/// Checks that every candidate is registered.
	///
	/// Reports the first unknown item in candidate order.
	pub fn ensure_items(&self, candidates: &[ItemId]) -> Result<()> {
		match candidates.iter().find(|&&item| self.is_new_item(item)) {
			Some(&item) => Err(RecError::UnknownItem(item)),
			None => Ok(()),
		}
	}

	/// Records that `user` interacted with `item`.
	///
	/// Both must be registered. Returns true if the item was not yet in the
	/// user's observed set.
	pub fn mark_observed(&mut self, user: UserId, item: ItemId) -> Result<bool> {
		self.ensure_item(item)?;
		let record = self.user_mut(user).ok_or(RecError::UnknownUser(user))?;
		Ok(record.observed.insert(item))
	}

	/// Returns true if `user` is registered and has interacted with `item`.
	pub fn has_observed(&self, user: UserId, item: ItemId) -> bool {
		self.user(user).is_some_and(|record| record.has_observed(item))
	}

	/// Iterates user records in registration order.
	pub fn users(&self) -> impl Iterator<Item = &UserRecord<UX>> + '_ {
		self.users.iter()
	}

	/// Iterates item records in registration order.
	pub fn items(&self) -> impl Iterator<Item = &ItemRecord<IX>> + '_ {
		self.items.iter()
	}

	/// Iterates user records for in-place mutation, e.g. resetting parameters.
	pub fn users_mut(&mut self) -> impl Iterator<Item = &mut UserRecord<UX>> + '_ {
		self.users.iter_mut()
	}

	/// Iterates item records for in-place mutation.
	pub fn items_mut(&mut self) -> impl Iterator<Item = &mut ItemRecord<IX>> + '_ {
		self.items.iter_mut()
	}
}

impl<UX: Default, IX> Registry<UX, IX> {
	/// Registers `user` with an empty observed set and a default payload.
	pub fn add_user(&mut self, user: &User) -> Result<()> {
		self.add_user_with(user, UX::default())
	}
}

impl<UX, IX: Default> Registry<UX, IX> {
	/// Registers `item` with a default payload.
	pub fn add_item(&mut self, item: &Item) -> Result<()> {
		self.add_item_with(item, IX::default())
	}
}
