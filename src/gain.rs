//! Information-gain evaluation for a single descriptive attribute.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::criterion::{compute_impurity, Impurity, ImpurityCriterion};
use crate::dataset::{Dataset, Value};
use crate::GainError;

/// Impurity diagnostics for one partition of the descriptive attribute.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PartitionImpurity {
    /// The descriptive-attribute level that defines this partition.
    pub level: Value,
    /// Target impurity within the partition.
    pub impurity: Impurity,
    /// Partition size divided by dataset size.
    pub weight: f64,
    /// Number of rows in the partition.
    pub n_rows: usize,
}

/// Result of evaluating one descriptive attribute against a target.
///
/// Exposes every intermediate of the computation so callers can audit it:
/// the unpartitioned target impurity, each partition's impurity and weight
/// (in first-appearance order of the levels), the weighted remaining
/// impurity, and the gain.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GainReport {
    /// Criterion the impurities were computed under.
    pub criterion: ImpurityCriterion,
    /// Impurity of the target attribute over the whole dataset.
    pub target_impurity: Impurity,
    /// Per-level partition diagnostics, in first-appearance order.
    pub partitions: Vec<PartitionImpurity>,
    /// Weighted sum of partition impurities.
    pub remaining_impurity: f64,
    /// `target_impurity - remaining_impurity`.
    pub gain: f64,
    /// Number of rows evaluated.
    pub n_rows: usize,
}

/// Compute the information gain of splitting `dataset` on
/// `descriptive_attribute`, measured against `target_attribute`.
///
/// Partitions are the rows sharing one observed level of the descriptive
/// attribute; they are enumerated in first-appearance order, which affects
/// only the report layout (the gain is a sum and order-independent).
/// Partition impurities carry the 3-decimal rounding of
/// [`compute_impurity`]; weights are exact fractions, so the gain can sit a
/// rounding epsilon below zero but never meaningfully negative.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`GainError::EmptyDataset`] | `dataset` has zero rows |
/// | [`GainError::SameAttribute`] | descriptive and target name the same column |
/// | [`GainError::AttributeNotFound`] | either attribute is absent from the schema |
/// | [`GainError::UnknownCriterion`] | via [`ImpurityCriterion::parse`] at the caller |
#[instrument(level = "debug", skip(dataset), fields(n_rows = dataset.n_rows()))]
pub fn compute_information_gain(
    dataset: &Dataset,
    target_attribute: &str,
    descriptive_attribute: &str,
    criterion: ImpurityCriterion,
) -> Result<GainReport, GainError> {
    if dataset.n_rows() == 0 {
        return Err(GainError::EmptyDataset);
    }
    if target_attribute == descriptive_attribute {
        return Err(GainError::SameAttribute {
            name: target_attribute.to_string(),
        });
    }

    let target_index = dataset.attribute_index(target_attribute)?;
    let descriptive_index = dataset.attribute_index(descriptive_attribute)?;

    let target_impurity =
        compute_impurity(dataset.rows().iter().map(|row| &row[target_index]), criterion)?;

    // Group target values by descriptive level, preserving first-appearance
    // order of the levels.
    let mut groups: Vec<(&Value, Vec<&Value>)> = Vec::new();
    let mut index: HashMap<&Value, usize> = HashMap::new();
    for row in dataset.rows() {
        let level = &row[descriptive_index];
        let target_value = &row[target_index];
        match index.get(level) {
            Some(&i) => groups[i].1.push(target_value),
            None => {
                index.insert(level, groups.len());
                groups.push((level, vec![target_value]));
            }
        }
    }

    let total = dataset.n_rows() as f64;
    let mut partitions = Vec::with_capacity(groups.len());
    let mut remaining_impurity = 0.0;
    for (level, target_values) in groups {
        let n_rows = target_values.len();
        let weight = n_rows as f64 / total;
        let impurity = compute_impurity(target_values.iter().copied(), criterion)?;
        remaining_impurity += impurity.value() * weight;
        debug!(level = %level, n_rows, weight, impurity = %impurity, "partition evaluated");
        partitions.push(PartitionImpurity {
            level: level.clone(),
            impurity,
            weight,
            n_rows,
        });
    }

    let gain = target_impurity.value() - remaining_impurity;
    debug!(
        target_impurity = %target_impurity,
        remaining_impurity,
        gain,
        "information gain computed"
    );

    Ok(GainReport {
        criterion,
        target_impurity,
        partitions,
        remaining_impurity,
        gain,
        n_rows: dataset.n_rows(),
    })
}
