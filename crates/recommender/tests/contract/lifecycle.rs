use flurry_recommender::{ItemId, Model, ModelConfig, RecError, UserId};

use crate::common::{Popularity, event, init_tracing, item, user};

#[test]
fn registration_guards_flip_after_add() {
	init_tracing();
	let mut model = Popularity::new();
	assert!(model.is_new_user(UserId(0)));
	assert!(model.is_new_item(ItemId(0)));

	model.add_user(&user(0)).unwrap();
	model.add_item(&item(0)).unwrap();

	assert!(!model.is_new_user(UserId(0)));
	assert!(!model.is_new_item(ItemId(0)));
	assert_eq!((model.n_user(), model.n_item()), (1, 1));
}

#[test]
fn registering_item_twice_fails() {
	let mut model = Popularity::new();
	model.add_item(&item(42)).unwrap();

	assert_eq!(model.add_item(&item(42)), Err(RecError::DuplicateItem(ItemId(42))));
	assert_eq!(model.n_item(), 1);
}

#[test]
fn observe_registers_each_entity_once() {
	init_tracing();
	let mut model = Popularity::new();

	model.observe(&event(0, 10), true).unwrap();
	model.observe(&event(0, 11), true).unwrap();
	model.observe(&event(1, 10), false).unwrap();

	assert_eq!(model.n_user(), 2);
	assert_eq!(model.n_item(), 2);
	assert_eq!(model.batch_events, 2);
	assert!(model.registry().has_observed(UserId(0), ItemId(11)));
	assert!(!model.registry().has_observed(UserId(1), ItemId(11)));
}

#[test]
fn update_for_unknown_entities_is_rejected() {
	let mut model = Popularity::new();
	model.add_user(&user(0)).unwrap();

	assert_eq!(model.update(&event(0, 5), false), Err(RecError::UnknownItem(ItemId(5))));
	assert_eq!(model.update(&event(9, 5), false), Err(RecError::UnknownItem(ItemId(5))));

	model.add_item(&item(5)).unwrap();
	assert_eq!(model.update(&event(9, 5), false), Err(RecError::UnknownUser(UserId(9))));
	assert!(model.registry().user(UserId(0)).unwrap().observed().is_empty());
}

#[test]
fn init_model_resets_parameters_but_keeps_registrations() {
	let mut model = Popularity::new();
	model.observe(&event(0, 1), false).unwrap();
	assert_eq!(model.predict(&user(0), &[ItemId(1)]).unwrap(), vec![1.0]);

	model.init_model();
	model.init_model();

	assert_eq!(model.predict(&user(0), &[ItemId(1)]).unwrap(), vec![0.0]);
	assert_eq!(model.n_item(), 1);
}

#[test]
fn models_build_from_toml_config() {
	let config = ModelConfig::from_toml_str(
		r#"
		[registry]
		user_capacity = 8
		item_capacity = 8
		"#,
	)
	.unwrap();
	let mut model = Popularity::from_config(&config);

	model.observe(&event(0, 0), false).unwrap();

	assert_eq!(model.n_user(), 1);
}
