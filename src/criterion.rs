//! Impurity criteria and the single-column impurity computation.

use std::fmt;
use std::str::FromStr;

use crate::dataset::Value;
use crate::distribution::Distribution;
use crate::GainError;

/// Criterion for measuring how mixed a label distribution is.
///
/// Each variant is a pure function from a [`Distribution`] to a
/// non-negative scalar; adding a criterion means adding a variant and one
/// match arm in [`ImpurityCriterion::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpurityCriterion {
    /// Shannon entropy in bits: `-Σ(p_i · log2(p_i))`.
    Entropy,
    /// Gini index: `1 - Σ(p_i²)`.
    Gini,
}

impl ImpurityCriterion {
    /// Parse a criterion name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`GainError::UnknownCriterion`] for any name other than
    /// `"entropy"` or `"gini"`.
    pub fn parse(name: &str) -> Result<Self, GainError> {
        match name.to_ascii_lowercase().as_str() {
            "entropy" => Ok(ImpurityCriterion::Entropy),
            "gini" => Ok(ImpurityCriterion::Gini),
            _ => Err(GainError::UnknownCriterion {
                name: name.to_string(),
            }),
        }
    }

    /// Apply the criterion to a distribution, unrounded.
    ///
    /// Every level in a [`Distribution`] has a positive frequency, so the
    /// entropy sum never evaluates `log2(0)`.
    #[must_use]
    pub fn apply(&self, distribution: &Distribution) -> f64 {
        match self {
            ImpurityCriterion::Entropy => -distribution
                .frequencies()
                .map(|(_, p)| p * p.log2())
                .sum::<f64>(),
            ImpurityCriterion::Gini => {
                1.0 - distribution
                    .frequencies()
                    .map(|(_, p)| p * p)
                    .sum::<f64>()
            }
        }
    }
}

impl FromStr for ImpurityCriterion {
    type Err = GainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImpurityCriterion::parse(s)
    }
}

impl fmt::Display for ImpurityCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpurityCriterion::Entropy => f.write_str("entropy"),
            ImpurityCriterion::Gini => f.write_str("gini"),
        }
    }
}

/// Criterion-agnostic impurity value.
///
/// Values are rounded to 3 decimal places at the [`compute_impurity`]
/// boundary; entropy lies in `[0, log2(ℓ)]` for `ℓ` levels, gini in
/// `[0, 1 - 1/ℓ]`.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd,
    serde::Serialize, serde::Deserialize,
)]
pub struct Impurity(f64);

impl Impurity {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw impurity value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Impurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Round to 3 decimal places, the report/display precision.
///
/// A pure single-level entropy sums to `-0.0`; normalize it to `+0.0`.
pub(crate) fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Compute the impurity of a label sequence under a criterion.
///
/// Counts the distinct labels into a [`Distribution`] and applies the
/// criterion. The result is rounded to 3 decimal places at this boundary;
/// gain aggregation weights these rounded values by exact partition
/// fractions, which keeps gains reproducible to 3 decimals across runs.
///
/// # Errors
///
/// Returns [`GainError::EmptyLabels`] if `labels` is empty.
pub fn compute_impurity<'a, I>(
    labels: I,
    criterion: ImpurityCriterion,
) -> Result<Impurity, GainError>
where
    I: IntoIterator<Item = &'a Value>,
{
    let distribution = Distribution::from_labels(labels)?;
    Ok(Impurity::new(round3(criterion.apply(&distribution))))
}

#[cfg(test)]
mod tests {
    use super::{compute_impurity, ImpurityCriterion};
    use crate::dataset::Value;
    use crate::GainError;

    fn labels(list: &[&str]) -> Vec<Value> {
        list.iter().map(|s| Value::from(*s)).collect()
    }

    // --- parsing ---

    #[test]
    fn parse_known_criteria() {
        assert_eq!(
            ImpurityCriterion::parse("entropy").unwrap(),
            ImpurityCriterion::Entropy
        );
        assert_eq!(ImpurityCriterion::parse("Gini").unwrap(), ImpurityCriterion::Gini);
    }

    #[test]
    fn parse_unknown_criterion_fails() {
        let err = "foo".parse::<ImpurityCriterion>().unwrap_err();
        assert!(matches!(err, GainError::UnknownCriterion { name } if name == "foo"));
    }

    #[test]
    fn criterion_display() {
        assert_eq!(ImpurityCriterion::Entropy.to_string(), "entropy");
        assert_eq!(ImpurityCriterion::Gini.to_string(), "gini");
    }

    // --- entropy ---

    #[test]
    fn entropy_homogeneous_is_zero() {
        let seq = labels(&["a", "a", "a", "a"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Entropy).unwrap();
        assert!((imp.value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_uniform_is_log2_of_levels() {
        let seq = labels(&["a", "b", "c", "d"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Entropy).unwrap();
        assert!((imp.value() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_three_fruit_mix() {
        let seq = labels(&["apple", "apple", "apple", "orange", "orange", "banana", "banana"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Entropy).unwrap();
        assert!((imp.value() - 1.557).abs() < 1e-9);
    }

    #[test]
    fn entropy_seven_distinct_fruit() {
        let seq = labels(&[
            "apple", "orange", "banana", "mango", "blueberry", "watermelon", "pear",
        ]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Entropy).unwrap();
        assert!((imp.value() - 2.807).abs() < 1e-9);
    }

    // --- gini ---

    #[test]
    fn gini_homogeneous_is_zero() {
        let seq = labels(&["a", "a", "a"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Gini).unwrap();
        assert!((imp.value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gini_uniform_is_one_minus_reciprocal() {
        let seq = labels(&["a", "b", "c", "d"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Gini).unwrap();
        assert!((imp.value() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn gini_three_fruit_mix() {
        let seq = labels(&["apple", "apple", "apple", "orange", "orange", "banana", "banana"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Gini).unwrap();
        assert!((imp.value() - 0.653).abs() < 1e-9);
    }

    #[test]
    fn gini_seven_distinct_fruit() {
        let seq = labels(&[
            "apple", "orange", "banana", "mango", "blueberry", "watermelon", "pear",
        ]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Gini).unwrap();
        assert!((imp.value() - 0.857).abs() < 1e-9);
    }

    #[test]
    fn more_distinct_levels_means_higher_impurity() {
        let mixed = labels(&["apple", "apple", "apple", "orange", "orange", "banana", "banana"]);
        let distinct = labels(&[
            "apple", "orange", "banana", "mango", "blueberry", "watermelon", "pear",
        ]);
        for criterion in [ImpurityCriterion::Entropy, ImpurityCriterion::Gini] {
            let low = compute_impurity(&mixed, criterion).unwrap();
            let high = compute_impurity(&distinct, criterion).unwrap();
            assert!(high > low, "{criterion}: {high:?} must exceed {low:?}");
        }
    }

    #[test]
    fn empty_labels_fail() {
        let err = compute_impurity(&[], ImpurityCriterion::Entropy).unwrap_err();
        assert!(matches!(err, GainError::EmptyLabels));
    }

    #[test]
    fn impurity_display_rounds_to_three_decimals() {
        let seq = labels(&["a", "a", "b"]);
        let imp = compute_impurity(&seq, ImpurityCriterion::Entropy).unwrap();
        assert_eq!(imp.to_string(), "0.918");
    }
}
