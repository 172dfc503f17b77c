//! Configuration system for SubsetForge.
//!
//! Load neighbourhood configuration from TOML or YAML files to choose move
//! generation strategies without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use subsetforge_config::{NeighbourhoodConfig, SubsetConfig};
//!
//! let config = SubsetConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [[neighbourhoods]]
//!     type = "single_swap"
//!     fixed_ids = [0]
//!
//!     [[neighbourhoods]]
//!     type = "disjoint_multi_swap"
//!     num_swaps = 2
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.neighbourhoods.len(), 2);
//! assert!(matches!(
//!     config.neighbourhoods[1],
//!     NeighbourhoodConfig::DisjointMultiSwap(_)
//! ));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use subsetforge_config::SubsetConfig;
//!
//! let config = SubsetConfig::load("subset.toml").unwrap_or_default();
//! assert!(config.neighbourhoods.is_empty());
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level move generation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SubsetConfig {
    /// Random seed for reproducible move sampling.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Neighbourhoods in the order they should be offered to a search.
    #[serde(default)]
    pub neighbourhoods: Vec<NeighbourhoodConfig>,
}

impl SubsetConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or
    /// describes an unusable neighbourhood.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Adds a neighbourhood configuration.
    pub fn with_neighbourhood(mut self, neighbourhood: NeighbourhoodConfig) -> Self {
        self.neighbourhoods.push(neighbourhood);
        self
    }

    /// Checks every configured neighbourhood.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.neighbourhoods
            .iter()
            .try_for_each(NeighbourhoodConfig::validate)
    }
}

/// Neighbourhood configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NeighbourhoodConfig {
    /// Swap one selected id for one unselected id.
    SingleSwap(SingleSwapConfig),

    /// Add one unselected id.
    SingleAddition(SingleAdditionConfig),

    /// Remove one selected id.
    SingleDeletion(SingleDeletionConfig),

    /// Any single addition, deletion or swap within size bounds.
    SinglePerturbation(SinglePerturbationConfig),

    /// Between one and `max_swaps` simultaneous swaps.
    MultiSwap(MultiSwapConfig),

    /// Between one and `max_additions` simultaneous additions.
    MultiAddition(MultiAdditionConfig),

    /// Between one and `max_deletions` simultaneous deletions.
    MultiDeletion(MultiDeletionConfig),

    /// Exactly `num_swaps` simultaneous swaps.
    DisjointMultiSwap(DisjointMultiSwapConfig),

    /// Exactly `num_additions` simultaneous additions.
    DisjointMultiAddition(DisjointMultiAdditionConfig),

    /// Exactly `num_deletions` simultaneous deletions.
    DisjointMultiDeletion(DisjointMultiDeletionConfig),
}

impl NeighbourhoodConfig {
    /// Returns the snake_case type name used in configuration files.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SingleSwap(_) => "single_swap",
            Self::SingleAddition(_) => "single_addition",
            Self::SingleDeletion(_) => "single_deletion",
            Self::SinglePerturbation(_) => "single_perturbation",
            Self::MultiSwap(_) => "multi_swap",
            Self::MultiAddition(_) => "multi_addition",
            Self::MultiDeletion(_) => "multi_deletion",
            Self::DisjointMultiSwap(_) => "disjoint_multi_swap",
            Self::DisjointMultiAddition(_) => "disjoint_multi_addition",
            Self::DisjointMultiDeletion(_) => "disjoint_multi_deletion",
        }
    }

    /// Returns the ids this neighbourhood must never add or remove.
    pub fn fixed_ids(&self) -> &BTreeSet<usize> {
        match self {
            Self::SingleSwap(c) => &c.fixed_ids,
            Self::SingleAddition(c) => &c.fixed_ids,
            Self::SingleDeletion(c) => &c.fixed_ids,
            Self::SinglePerturbation(c) => &c.fixed_ids,
            Self::MultiSwap(c) => &c.fixed_ids,
            Self::MultiAddition(c) => &c.fixed_ids,
            Self::MultiDeletion(c) => &c.fixed_ids,
            Self::DisjointMultiSwap(c) => &c.fixed_ids,
            Self::DisjointMultiAddition(c) => &c.fixed_ids,
            Self::DisjointMultiDeletion(c) => &c.fixed_ids,
        }
    }

    /// Checks counts and size bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (count_name, count) = match self {
            Self::SingleSwap(_) | Self::SingleAddition(_) | Self::SingleDeletion(_) => {
                return Ok(())
            }
            Self::SinglePerturbation(c) => {
                if c.max_subset_size.is_some_and(|max| max < c.min_subset_size) {
                    return Err(self.invalid("max_subset_size must be >= min_subset_size"));
                }
                return Ok(());
            }
            Self::MultiSwap(c) => ("max_swaps", c.max_swaps),
            Self::MultiAddition(c) => ("max_additions", c.max_additions),
            Self::MultiDeletion(c) => ("max_deletions", c.max_deletions),
            Self::DisjointMultiSwap(c) => ("num_swaps", c.num_swaps),
            Self::DisjointMultiAddition(c) => ("num_additions", c.num_additions),
            Self::DisjointMultiDeletion(c) => ("num_deletions", c.num_deletions),
        };
        if count == 0 {
            return Err(self.invalid(&format!("{count_name} must be strictly positive")));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> ConfigError {
        ConfigError::Invalid(format!("{}: {reason}", self.type_name()))
    }
}

/// Single swap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SingleSwapConfig {
    /// Ids that are never swapped.
    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Single addition configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SingleAdditionConfig {
    /// Upper bound on the selection size; unbounded if absent.
    #[serde(default)]
    pub max_subset_size: Option<usize>,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Single deletion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SingleDeletionConfig {
    /// Lower bound on the selection size.
    #[serde(default)]
    pub min_subset_size: usize,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Single perturbation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SinglePerturbationConfig {
    #[serde(default)]
    pub min_subset_size: usize,

    #[serde(default)]
    pub max_subset_size: Option<usize>,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Multi swap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MultiSwapConfig {
    pub max_swaps: usize,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Multi addition configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MultiAdditionConfig {
    pub max_additions: usize,

    #[serde(default)]
    pub max_subset_size: Option<usize>,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Multi deletion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MultiDeletionConfig {
    pub max_deletions: usize,

    #[serde(default)]
    pub min_subset_size: usize,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Disjoint multi swap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DisjointMultiSwapConfig {
    pub num_swaps: usize,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Disjoint multi addition configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DisjointMultiAdditionConfig {
    pub num_additions: usize,

    #[serde(default)]
    pub max_subset_size: Option<usize>,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}

/// Disjoint multi deletion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DisjointMultiDeletionConfig {
    pub num_deletions: usize,

    #[serde(default)]
    pub min_subset_size: usize,

    #[serde(default)]
    pub fixed_ids: BTreeSet<usize>,
}
