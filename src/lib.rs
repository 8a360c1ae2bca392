//! Impurity and information-gain computation for decision-tree feature
//! selection.
//!
//! Given a labeled dataset of discrete attributes, this crate computes the
//! impurity of a target attribute (Shannon entropy in bits, or the Gini
//! index) and the information gain achievable by partitioning the dataset
//! on each candidate descriptive attribute. Everything is a pure function
//! over an immutable [`Dataset`] snapshot; a tree learner calls
//! [`compute_information_gain`] once per candidate split, or
//! [`rank_attributes`] to get all candidates ordered by gain.

mod criterion;
mod dataset;
mod distribution;
mod error;
mod gain;
mod rank;

pub use criterion::{compute_impurity, Impurity, ImpurityCriterion};
pub use dataset::{Dataset, Value};
pub use distribution::Distribution;
pub use error::GainError;
pub use gain::{compute_information_gain, GainReport, PartitionImpurity};
pub use rank::{rank_attributes, RankedAttribute};
