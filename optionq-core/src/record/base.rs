//! Records and their values.
use crate::error::OptionQError;
use chrono::prelude::{DateTime, Local};
use std::collections::{
    hash_map::{Iter, Keys},
    HashMap,
};

/// Possible types of values in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A scalar, e.g., an episode return or a number of updates.
    Scalar(f32),

    /// A timestamp.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array, e.g., the rewards of an episode.
    Array1(Vec<f32>),

    /// A text value.
    String(String),
}

/// A set of named values.
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record holding a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair, overwriting a previous value of the same key.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over key-value pairs.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets the value of the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges `record` into `self`. Values of `record` win on key collisions.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value.
    pub fn get_scalar(&self, k: &str) -> Result<f32, OptionQError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(OptionQError::RecordValueTypeError("Scalar".to_string())),
            None => Err(OptionQError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, OptionQError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(OptionQError::RecordValueTypeError("Array1".to_string())),
            None => Err(OptionQError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string.
    pub fn get_string(&self, k: &str) -> Result<String, OptionQError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(OptionQError::RecordValueTypeError("String".to_string())),
            None => Err(OptionQError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns `true` if the record has no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_scalar_errors() {
        let mut record = Record::from_scalar("a", 1.0);
        record.insert("b", RecordValue::String("x".to_string()));

        assert_eq!(record.get_scalar("a"), Ok(1.0));
        assert_eq!(
            record.get_scalar("b"),
            Err(OptionQError::RecordValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_scalar("c"),
            Err(OptionQError::RecordKeyError("c".to_string()))
        );
    }

    #[test]
    fn test_merge_overwrites() {
        let r1 = Record::from_slice(&[
            ("a", RecordValue::Scalar(1.0)),
            ("b", RecordValue::Scalar(2.0)),
        ]);
        let mut r = r1;
        r.merge_inplace(Record::from_scalar("b", 3.0));

        assert_eq!(r.len(), 2);
        assert_eq!(r.get_scalar("b"), Ok(3.0));
    }

    #[test]
    fn test_get_array1() {
        let r = Record::from_slice(&[
            ("rewards", RecordValue::Array1(vec![-1.0, 1.0])),
            ("episode", RecordValue::Scalar(0.0)),
        ]);

        assert_eq!(r.get_array1("rewards"), Ok(vec![-1.0, 1.0]));
        assert_eq!(
            r.get_array1("episode"),
            Err(OptionQError::RecordValueTypeError("Array1".to_string()))
        );
    }
}
