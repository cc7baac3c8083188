//! Conversion of per-candidate scores into ranked recommendation lists.
//!
//! Every recommender funnels its scores through [`scores2recos`], so ordering,
//! tie-breaking and NaN handling are identical across algorithms.

use std::cmp::Ordering;

use flurry_entity::ItemId;
use serde::Deserialize;

use crate::error::{RecError, Result};

/// Polarity of a model's scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreOrder {
	/// Smaller scores are more promising (e.g. reconstruction error).
	#[default]
	Ascending,
	/// Larger scores are more promising (e.g. predicted preference).
	Descending,
}

impl ScoreOrder {
	/// Returns the `rev` flag to pass to [`scores2recos`].
	#[inline]
	pub fn rev(self) -> bool {
		matches!(self, ScoreOrder::Descending)
	}
}

/// Ranked items paired with their scores, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
	pub items: Vec<ItemId>,
	pub scores: Vec<f64>,
}

impl Recommendations {
	/// Number of ranked items.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if nothing was ranked.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterates `(item, score)` pairs in rank order.
	pub fn iter(&self) -> impl Iterator<Item = (ItemId, f64)> + '_ {
		self.items.iter().copied().zip(self.scores.iter().copied())
	}

	/// Returns the `k` best entries (all of them if fewer are ranked).
	pub fn top(&self, k: usize) -> Self {
		let k = k.min(self.len());
		Self {
			items: self.items[..k].to_vec(),
			scores: self.scores[..k].to_vec(),
		}
	}

	/// Splits into `(items, scores)`.
	pub fn into_parts(self) -> (Vec<ItemId>, Vec<f64>) {
		(self.items, self.scores)
	}
}

/// Ranks `target_i_indices` by their `scores`.
///
/// With `rev == false` the smallest score comes first; with `rev == true` the
/// largest does. The sort is stable in both directions: items with equal
/// scores keep their input order. NaN scores sink to the end either way.
///
/// Returns [`RecError::ShapeMismatch`] if the two slices differ in length.
/// Duplicate targets are ranked independently.
pub fn scores2recos(scores: &[f64], target_i_indices: &[ItemId], rev: bool) -> Result<Recommendations> {
	if scores.len() != target_i_indices.len() {
		return Err(RecError::ShapeMismatch {
			scores: scores.len(),
			targets: target_i_indices.len(),
		});
	}

	let mut permutation: Vec<usize> = (0..scores.len()).collect();
	permutation.sort_by(|&a, &b| compare_scores(scores[a], scores[b], rev));

	Ok(Recommendations {
		items: permutation.iter().map(|&idx| target_i_indices[idx]).collect(),
		scores: permutation.iter().map(|&idx| scores[idx]).collect(),
	})
}

fn compare_scores(a: f64, b: f64, rev: bool) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => {
			let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
			if rev { ord.reverse() } else { ord }
		}
	}
}
