/// Errors from impurity and information-gain computation.
///
/// Every variant is a contract violation by the caller, surfaced
/// synchronously; there are no transient failures and no retry semantics.
#[derive(Debug, thiserror::Error)]
pub enum GainError {
    /// Returned when an impurity is requested for an empty label sequence.
    #[error("cannot compute impurity of an empty label sequence")]
    EmptyLabels,

    /// Returned when a criterion name is not one of the supported criteria.
    #[error("unknown impurity criterion \"{name}\" (expected \"entropy\" or \"gini\")")]
    UnknownCriterion {
        /// The unrecognized criterion name as provided.
        name: String,
    },

    /// Returned when an attribute name is absent from the dataset schema.
    #[error("attribute \"{name}\" not found in dataset schema")]
    AttributeNotFound {
        /// The attribute name that was looked up.
        name: String,
    },

    /// Returned when the descriptive attribute is the target attribute.
    #[error("descriptive attribute \"{name}\" must differ from the target attribute")]
    SameAttribute {
        /// The attribute name used for both roles.
        name: String,
    },

    /// Returned when the dataset has zero rows.
    #[error("dataset has zero rows")]
    EmptyDataset,

    /// Returned when a row has a different number of values than the schema.
    #[error("row {row_index} has {got} values, expected {expected}")]
    RowLengthMismatch {
        /// Zero-based index of the offending row.
        row_index: usize,
        /// Number of attributes in the schema.
        expected: usize,
        /// Number of values in the offending row.
        got: usize,
    },

    /// Returned when the schema lists the same attribute name twice.
    #[error("duplicate attribute \"{name}\" in dataset schema")]
    DuplicateAttribute {
        /// The attribute name that appears more than once.
        name: String,
    },
}
