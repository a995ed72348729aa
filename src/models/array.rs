//! The array being sorted and searched.

use serde::{Deserialize, Serialize};

use crate::engine::rng::VizRng;
use crate::error::{VizError, VizResult};

/// Default inclusive lower bound for generated values.
pub const DEFAULT_VALUE_MIN: u32 = 5;
/// Default inclusive upper bound for generated values.
pub const DEFAULT_VALUE_MAX: u32 = 99;

/// Ordered sequence of positive integers drawn as bars.
///
/// Generated values always lie in `[value_min, value_max]` so relative bar
/// heights stay meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayModel {
    values: Vec<u32>,
    value_min: u32,
    value_max: u32,
}

impl Default for ArrayModel {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_MIN, DEFAULT_VALUE_MAX)
    }
}

impl ArrayModel {
    /// Empty model generating values in `[value_min, value_max]`.
    #[must_use]
    pub fn new(value_min: u32, value_max: u32) -> Self {
        Self {
            values: Vec::new(),
            value_min: value_min.min(value_max),
            value_max: value_max.max(value_min),
        }
    }

    /// Model holding exactly `values`, using the default generation range.
    #[must_use]
    pub fn from_values(values: Vec<u32>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Replace the contents with `size` uniform random values. A size of
    /// zero is clamped to one.
    pub fn generate(&mut self, size: usize, rng: &mut VizRng) {
        let size = size.max(1);
        self.values = rng.sample_n_u32(size, self.value_min, self.value_max);
    }

    /// Exchange the values at `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns `VizError::IndexOutOfRange` if either index is outside
    /// `0..len`.
    pub fn swap(&mut self, i: usize, j: usize) -> VizResult<()> {
        let len = self.values.len();
        for index in [i, j] {
            if index >= len {
                return Err(VizError::IndexOutOfRange { index, len });
            }
        }
        self.values.swap(i, j);
        Ok(())
    }

    /// Sort ascending in place.
    pub fn sort_ascending(&mut self) {
        self.values.sort_unstable();
    }

    /// Borrow the current contents.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Owned copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u32> {
        self.values.clone()
    }

    /// Value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the model holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the contents are non-decreasing.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Inclusive generation range.
    #[must_use]
    pub const fn range(&self) -> (u32, u32) {
        (self.value_min, self.value_max)
    }
}
