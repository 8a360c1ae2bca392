//! Ranking descriptive attributes by information gain.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::criterion::ImpurityCriterion;
use crate::dataset::Dataset;
use crate::gain::compute_information_gain;
use crate::GainError;

/// A descriptive attribute ranked by its information gain.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankedAttribute {
    /// Attribute name.
    pub name: String,
    /// Information gain against the target attribute.
    pub gain: f64,
    /// 1-based rank (1 = highest gain).
    pub rank: usize,
}

/// Compute the gain of every descriptive attribute and rank them.
///
/// Evaluates each non-target attribute independently (in parallel; the
/// computations share no state), sorts by gain descending with a stable
/// sort so ties fall back to attribute declaration order, and assigns
/// 1-based ranks. The best split candidate is `result[0]`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`GainError::EmptyDataset`] | `dataset` has zero rows |
/// | [`GainError::AttributeNotFound`] | `target_attribute` is absent from the schema |
#[instrument(level = "debug", skip(dataset), fields(n_rows = dataset.n_rows()))]
pub fn rank_attributes(
    dataset: &Dataset,
    target_attribute: &str,
    criterion: ImpurityCriterion,
) -> Result<Vec<RankedAttribute>, GainError> {
    if dataset.n_rows() == 0 {
        return Err(GainError::EmptyDataset);
    }
    dataset.attribute_index(target_attribute)?;

    let candidates: Vec<&String> = dataset
        .attribute_names()
        .iter()
        .filter(|name| name.as_str() != target_attribute)
        .collect();

    // Declaration order is preserved by the ordered collect, so the stable
    // sort below breaks gain ties in favor of earlier attributes.
    let mut ranked: Vec<RankedAttribute> = candidates
        .par_iter()
        .map(|name| {
            let report =
                compute_information_gain(dataset, target_attribute, name, criterion)?;
            Ok(RankedAttribute {
                name: (*name).clone(),
                gain: report.gain,
                rank: 0,
            })
        })
        .collect::<Result<_, GainError>>()?;

    ranked.sort_by(|a, b| b.gain.total_cmp(&a.gain));
    for (i, attr) in ranked.iter_mut().enumerate() {
        attr.rank = i + 1;
    }

    debug!(n_candidates = ranked.len(), "attributes ranked");
    Ok(ranked)
}
