//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing in three layers:
//! - Type-safe configuration structs
//! - Field ranges checked by `validator`
//! - Cross-field semantic checks (bounds ordering, graph integrity)

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::SpeedControl;
use crate::error::{VizError, VizResult};
use crate::models::array::{DEFAULT_VALUE_MAX, DEFAULT_VALUE_MIN};
use crate::models::graph::{DEFAULT_HIT_RADIUS, DEFAULT_START};
use crate::models::{ArrayModel, GraphModel, Position};

/// Top-level visualizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Seed for array generation; `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Array size and value bounds.
    #[validate(nested)]
    #[serde(default)]
    pub array: ArrayConfig,

    /// Step speed bounds.
    #[validate(nested)]
    #[serde(default)]
    pub speed: SpeedConfig,

    /// BFS settings.
    #[validate(nested)]
    #[serde(default)]
    pub bfs: BfsConfig,

    /// Custom graph; `None` uses the built-in example graph.
    #[validate(nested)]
    #[serde(default)]
    pub graph: Option<GraphConfig>,
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Run field and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn check(&self) -> VizResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Validate semantic constraints beyond field ranges.
    fn validate_semantic(&self) -> VizResult<()> {
        let a = &self.array;
        if a.min_size > a.max_size {
            return Err(VizError::config(format!(
                "array.min_size {} exceeds array.max_size {}",
                a.min_size, a.max_size
            )));
        }
        if !(a.min_size..=a.max_size).contains(&a.default_size) {
            return Err(VizError::config(format!(
                "array.default_size {} outside [{}, {}]",
                a.default_size, a.min_size, a.max_size
            )));
        }
        if a.value_min > a.value_max {
            return Err(VizError::config(format!(
                "array.value_min {} exceeds array.value_max {}",
                a.value_min, a.value_max
            )));
        }

        let s = &self.speed;
        if !(s.min_ms <= s.default_ms && s.default_ms <= s.max_ms) {
            return Err(VizError::config(format!(
                "speed.default_ms {} outside [{}, {}]",
                s.default_ms, s.min_ms, s.max_ms
            )));
        }

        let graph = self.graph_model()?;
        if !graph.contains(&self.bfs.start) {
            return Err(VizError::config(format!(
                "bfs.start '{}' is not a graph node",
                self.bfs.start
            )));
        }

        Ok(())
    }

    /// Build the graph this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns error if the configured graph is malformed.
    pub fn graph_model(&self) -> VizResult<GraphModel> {
        self.graph
            .as_ref()
            .map_or_else(|| Ok(GraphModel::example()), GraphConfig::build)
    }

    /// Empty array model with the configured value range.
    #[must_use]
    pub fn array_model(&self) -> ArrayModel {
        ArrayModel::new(self.array.value_min, self.array.value_max)
    }

    /// Live speed control seeded with the configured default.
    #[must_use]
    pub fn speed_control(&self) -> SpeedControl {
        SpeedControl::new(self.speed.default_ms, self.speed.min_ms, self.speed.max_ms)
    }

    /// Clamp a requested array size to the configured bounds.
    #[must_use]
    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.array.min_size.max(1), self.array.max_size.max(1))
    }
}

/// Builder for [`VizConfig`].
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    seed: Option<u64>,
    size: Option<usize>,
    speed_ms: Option<u64>,
    bfs_step_ms: Option<u64>,
    start: Option<String>,
    graph: Option<GraphConfig>,
}

impl VizConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial array size.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the initial step speed in milliseconds.
    #[must_use]
    pub const fn speed_ms(mut self, ms: u64) -> Self {
        self.speed_ms = Some(ms);
        self
    }

    /// Set the fixed BFS pause in milliseconds.
    #[must_use]
    pub const fn bfs_step_ms(mut self, ms: u64) -> Self {
        self.bfs_step_ms = Some(ms);
        self
    }

    /// Set the default BFS start node.
    #[must_use]
    pub fn start(mut self, node: impl Into<String>) -> Self {
        self.start = Some(node.into());
        self
    }

    /// Use a custom graph.
    #[must_use]
    pub fn graph(mut self, graph: GraphConfig) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Build the configuration. Size and speed are clamped into the default
    /// bounds rather than rejected.
    #[must_use]
    pub fn build(self) -> VizConfig {
        let mut config = VizConfig {
            seed: self.seed,
            ..VizConfig::default()
        };

        if let Some(size) = self.size {
            config.array.default_size = config.clamp_size(size);
        }

        if let Some(ms) = self.speed_ms {
            config.speed.default_ms = ms.clamp(config.speed.min_ms, config.speed.max_ms);
        }

        if let Some(ms) = self.bfs_step_ms {
            config.bfs.step_ms = ms;
        }

        if let Some(start) = self.start {
            config.bfs.start = start;
        }

        if self.graph.is_some() {
            config.graph = self.graph;
        }

        config
    }
}

/// Array size and value bounds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ArrayConfig {
    /// Size generated at startup.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_size")]
    pub default_size: usize,

    /// Smallest selectable size.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_min_size")]
    pub min_size: usize,

    /// Largest selectable size.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Inclusive lower bound of generated values.
    #[validate(range(min = 1))]
    #[serde(default = "default_value_min")]
    pub value_min: u32,

    /// Inclusive upper bound of generated values.
    #[validate(range(min = 1))]
    #[serde(default = "default_value_max")]
    pub value_max: u32,
}

const fn default_size() -> usize {
    20
}

const fn default_min_size() -> usize {
    2
}

const fn default_max_size() -> usize {
    100
}

const fn default_value_min() -> u32 {
    DEFAULT_VALUE_MIN
}

const fn default_value_max() -> u32 {
    DEFAULT_VALUE_MAX
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            value_min: default_value_min(),
            value_max: default_value_max(),
        }
    }
}

/// Step speed bounds in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SpeedConfig {
    /// Speed at startup.
    #[validate(range(max = 60_000))]
    #[serde(default = "default_speed_ms")]
    pub default_ms: u64,

    /// Fastest selectable speed.
    #[validate(range(max = 60_000))]
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,

    /// Slowest selectable speed.
    #[validate(range(max = 60_000))]
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

const fn default_speed_ms() -> u64 {
    100
}

const fn default_min_ms() -> u64 {
    1
}

const fn default_max_ms() -> u64 {
    2000
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            default_ms: default_speed_ms(),
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
        }
    }
}

/// BFS settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BfsConfig {
    /// Fixed pause per visited node.
    #[validate(range(max = 60_000))]
    #[serde(default = "default_bfs_step_ms")]
    pub step_ms: u64,

    /// Start node when none is selected.
    #[validate(length(min = 1))]
    #[serde(default = "default_start")]
    pub start: String,

    /// Click distance that selects a node.
    #[validate(range(min = 1.0, max = 1000.0))]
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f64,
}

const fn default_bfs_step_ms() -> u64 {
    600
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

const fn default_hit_radius() -> f64 {
    DEFAULT_HIT_RADIUS
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            step_ms: default_bfs_step_ms(),
            start: default_start(),
            hit_radius: default_hit_radius(),
        }
    }
}

/// Custom graph description.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Nodes in drawing order.
    #[validate(length(min = 1))]
    pub nodes: Vec<GraphNodeConfig>,
}

impl GraphConfig {
    /// Build and validate the graph.
    ///
    /// # Errors
    ///
    /// Returns error on duplicate ids or dangling neighbors.
    pub fn build(&self) -> VizResult<GraphModel> {
        GraphModel::new(self.nodes.iter().map(|n| {
            (
                n.id.clone(),
                Position::new(n.x, n.y),
                n.neighbors.clone(),
            )
        }))
    }
}

/// One node of a custom graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphNodeConfig {
    /// Node identifier.
    pub id: String,
    /// Horizontal display position.
    pub x: f64,
    /// Vertical display position.
    pub y: f64,
    /// Outgoing neighbors in traversal order.
    #[serde(default)]
    pub neighbors: Vec<String>,
}
