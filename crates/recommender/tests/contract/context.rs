use flurry_recommender::{
	FeatureRecommender, ItemId, Model, RecError, Recommendations, Result, User,
};
use pretty_assertions::assert_eq;

use crate::common::{ContextAffinity, event, ids, init_tracing, item, user};

const MORNING: [f64; 2] = [1.0, 0.0];
const EVENING: [f64; 2] = [0.0, 1.0];

fn trained() -> ContextAffinity {
	init_tracing();
	let mut model = ContextAffinity::new(2, 1.0);
	model.init_model();
	let events = [
		event(0, 1).with_context(MORNING.to_vec()),
		event(1, 1).with_context(MORNING.to_vec()),
		event(0, 2).with_context(EVENING.to_vec()),
	];
	for e in &events {
		model.observe(e, false).unwrap();
	}
	model
}

/// Callers that need context-aware ranking bound on the capability only.
fn rank_in<M: FeatureRecommender>(model: &M, user: &User, targets: &[ItemId], context: &[f64]) -> Result<Recommendations> {
	model.recommend(user, targets, context)
}

#[test]
fn ranking_follows_context() {
	let model = trained();

	let morning = rank_in(&model, &user(0), &ids(&[1, 2]), &MORNING).unwrap();
	let evening = rank_in(&model, &user(0), &ids(&[1, 2]), &EVENING).unwrap();

	assert_eq!(morning.items, ids(&[1, 2]));
	assert_eq!(morning.scores, vec![2.0, 0.0]);
	assert_eq!(evening.items, ids(&[2, 1]));
	assert_eq!(evening.scores, vec![1.0, 0.0]);
}

#[test]
fn context_free_predict_is_still_available() {
	let model = trained();

	assert_eq!(model.predict(&user(1), &ids(&[2, 1])).unwrap(), vec![1.0, 2.0]);
}

#[test]
fn wrong_context_length_is_rejected() {
	let model = trained();

	let err = model.recommend(&user(0), &ids(&[1]), &[1.0]).unwrap_err();

	assert_eq!(err, RecError::ContextMismatch { expected: 2, actual: 1 });
}

#[test]
fn event_without_context_leaves_weights_untouched() {
	let mut model = trained();
	model.add_item(&item(3)).unwrap();

	let err = model.update(&event(0, 3), false).unwrap_err();

	assert_eq!(err, RecError::ContextMismatch { expected: 2, actual: 0 });
	assert_eq!(model.weights(ItemId(3)), Some(&[0.0, 0.0][..]));
	assert!(!model.registry().has_observed(flurry_recommender::UserId(0), ItemId(3)));
}

#[test]
fn observe_rejects_bad_context_before_registering() {
	let mut model = trained();
	let before = (model.n_user(), model.n_item());

	let err = model.observe(&event(5, 6), false).unwrap_err();

	assert_eq!(err, RecError::ContextMismatch { expected: 2, actual: 0 });
	assert_eq!((model.n_user(), model.n_item()), before);
	assert!(model.is_new_user(flurry_recommender::UserId(5)));
	assert!(model.is_new_item(ItemId(6)));
}

#[test]
fn reinitialising_zeroes_learned_weights() {
	let mut model = trained();

	model.init_model();

	assert_eq!(model.weights(ItemId(1)), Some(&[0.0, 0.0][..]));
	let recos = model.recommend(&user(0), &ids(&[1, 2]), &MORNING).unwrap();
	assert_eq!(recos.items, ids(&[1, 2]));
}
