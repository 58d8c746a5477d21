//! Named per-node field arrays

use crate::error::{Error, Result};
use ahash::AHashMap;

/// A collection of named per-node scalar arrays sharing one length.
///
/// Every field holds exactly one value per mesh node, so all arrays in a set
/// have the same length (the node count). Insertion enforces this; evaluation
/// code can therefore treat any two fields as element-wise compatible.
///
/// # Example
///
/// ```rust
/// use meshpost_core::FieldSet;
///
/// let mut fields = FieldSet::new();
/// fields.insert("Von", vec![100.0, 250.0, 175.0]).unwrap();
/// fields.insert("T", vec![293.0, 310.0, 305.0]).unwrap();
///
/// assert_eq!(fields.node_count(), 3);
/// assert!(fields.get("Von").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: AHashMap<String, Vec<f64>>,
    node_count: usize,
}

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes each field covers (0 while the set is empty)
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of fields in the set
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no fields have been inserted
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Insert a named array.
    ///
    /// The first insertion fixes the node count; later insertions must match
    /// it or fail with [`Error::LengthMismatch`].
    pub fn insert<S: Into<String>>(&mut self, name: S, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.fields.is_empty() {
            self.node_count = values.len();
        } else if values.len() != self.node_count {
            return Err(Error::LengthMismatch {
                field: name,
                expected: self.node_count,
                actual: values.len(),
            });
        }
        self.fields.insert(name, values);
        Ok(())
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// True if the set contains a field with this name
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over field names (unordered)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_get() {
        let mut fields = FieldSet::new();
        fields.insert("P1", vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(fields.node_count(), 3);
        assert_eq!(fields.get("P1"), Some([1.0, 2.0, 3.0].as_slice()));
        assert_eq!(fields.get("P2"), None);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut fields = FieldSet::new();
        fields.insert("P1", vec![1.0, 2.0, 3.0]).unwrap();
        let err = fields.insert("P2", vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 3,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_set() {
        let fields = FieldSet::new();
        assert!(fields.is_empty());
        assert_eq!(fields.node_count(), 0);
    }
}
