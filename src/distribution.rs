//! Relative-frequency distributions over observed levels.

use std::collections::HashMap;

use crate::dataset::Value;
use crate::GainError;

/// The relative-frequency distribution of a label sequence.
///
/// Levels are kept in first-appearance order (row order of the source
/// column). Frequencies are `count / total` and sum to 1.0; only observed
/// levels are present, so no level ever carries zero probability.
#[derive(Debug, Clone)]
pub struct Distribution {
    /// `(level, count)` pairs in first-appearance order.
    counts: Vec<(Value, usize)>,
    /// Total number of labels counted.
    total: usize,
}

impl Distribution {
    /// Count a label sequence into a distribution.
    ///
    /// # Errors
    ///
    /// Returns [`GainError::EmptyLabels`] if the sequence is empty.
    pub fn from_labels<'a, I>(labels: I) -> Result<Self, GainError>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut counts: Vec<(Value, usize)> = Vec::new();
        let mut index: HashMap<&'a Value, usize> = HashMap::new();
        let mut total = 0usize;

        for label in labels {
            total += 1;
            match index.get(label) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(label, counts.len());
                    counts.push((label.clone(), 1));
                }
            }
        }

        if total == 0 {
            return Err(GainError::EmptyLabels);
        }

        Ok(Self { counts, total })
    }

    /// Return the number of distinct levels.
    #[must_use]
    pub fn n_levels(&self) -> usize {
        self.counts.len()
    }

    /// Return the total number of labels counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate `(level, relative frequency)` in first-appearance order.
    pub fn frequencies(&self) -> impl Iterator<Item = (&Value, f64)> {
        let total = self.total as f64;
        self.counts
            .iter()
            .map(move |(level, count)| (level, *count as f64 / total))
    }

    /// Iterate `(level, count)` in first-appearance order.
    pub fn counts(&self) -> impl Iterator<Item = (&Value, usize)> {
        self.counts.iter().map(|(level, count)| (level, *count))
    }
}
