//! Immutable tabular dataset types for gain evaluation.

use std::collections::HashSet;
use std::fmt;

use crate::GainError;

/// A single discrete cell value.
///
/// Covers the value kinds a gain evaluation operates on: categorical
/// strings, booleans, and pre-binned ordinals. Continuous values must be
/// discretized by the caller before they reach this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// A categorical string level.
    Str(String),
    /// A boolean level.
    Bool(bool),
    /// A pre-binned ordinal level.
    Int(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

/// An immutable snapshot of labeled tabular data.
///
/// Attribute names and row storage are parallel: `rows[i][j]` is the value
/// of attribute `attribute_names[j]` in row `i`. The schema is validated on
/// construction; evaluation never mutates a dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Attribute names in declaration order.
    attribute_names: Vec<String>,
    /// Row-major values: `rows[row_index][attribute_index]`.
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset from attribute names and row-major values.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`GainError::DuplicateAttribute`] | Same attribute name appears twice |
    /// | [`GainError::RowLengthMismatch`] | Row width differs from the schema |
    pub fn new(
        attribute_names: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, GainError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(attribute_names.len());
        for name in &attribute_names {
            if !seen.insert(name.as_str()) {
                return Err(GainError::DuplicateAttribute { name: name.clone() });
            }
        }

        let expected = attribute_names.len();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GainError::RowLengthMismatch {
                    row_index,
                    expected,
                    got: row.len(),
                });
            }
        }

        Ok(Self { attribute_names, rows })
    }

    /// Return the attribute names in declaration order.
    #[must_use]
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Return the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Return the number of attributes.
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.attribute_names.len()
    }

    /// Return the zero-based column index of an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`GainError::AttributeNotFound`] if the name is not in the
    /// schema.
    pub fn attribute_index(&self, name: &str) -> Result<usize, GainError> {
        self.attribute_names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| GainError::AttributeNotFound {
                name: name.to_string(),
            })
    }

    /// Iterate the values of one attribute in row order.
    ///
    /// # Errors
    ///
    /// Returns [`GainError::AttributeNotFound`] if the name is not in the
    /// schema.
    pub fn column<'a>(
        &'a self,
        name: &str,
    ) -> Result<impl Iterator<Item = &'a Value> + use<'a>, GainError> {
        let index = self.attribute_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    /// Borrow the raw rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
}
