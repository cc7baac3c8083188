//! Model configuration loaded from TOML.
//!
//! ```toml
//! [registry]
//! user_capacity = 1024
//! item_capacity = 4096
//!
//! [ranking]
//! order = "descending"
//! ```
//!
//! Every section and key is optional.

use serde::Deserialize;

use crate::error::Result;
use crate::ranking::ScoreOrder;

/// Top-level model configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
	pub registry: RegistryConfig,
	pub ranking: RankingConfig,
}

/// Preallocation hints for the entity registry.
///
/// These only size the initial tables; the registry keeps growing past them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	pub user_capacity: usize,
	pub item_capacity: usize,
}

/// How a model's scores map to ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
	pub order: ScoreOrder,
}

impl ModelConfig {
	/// Parses a configuration from TOML source.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: ModelConfig = toml::from_str(source)?;
		tracing::debug!(
			user_capacity = config.registry.user_capacity,
			item_capacity = config.registry.item_capacity,
			order = ?config.ranking.order,
			"Loaded model config"
		);
		Ok(config)
	}
}
