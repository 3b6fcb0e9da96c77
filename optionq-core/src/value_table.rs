//! Tabular option values.
use std::{collections::HashMap, hash::Hash};

/// A table of option values `Q(s, o)`, keyed by states and option ids.
///
/// Entries are created on first write. Reading an entry that was never written
/// yields `0.0`.
#[derive(Debug, Clone)]
pub struct ValueTable<S, K> {
    values: HashMap<S, HashMap<K, f64>>,
}

impl<S, K> Default for ValueTable<S, K> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<S, K> ValueTable<S, K>
where
    S: Clone + Eq + Hash,
    K: Clone + Eq + Hash,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Q(state, option)`, or `0.0` if the entry does not exist.
    pub fn get(&self, state: &S, option: &K) -> f64 {
        self.values
            .get(state)
            .and_then(|row| row.get(option))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sets `Q(state, option)`.
    pub fn set(&mut self, state: &S, option: &K, value: f64) {
        self.values
            .entry(state.clone())
            .or_default()
            .insert(option.clone(), value);
    }

    /// Returns the largest value among `options` in `state`.
    ///
    /// Returns `None` if `options` is empty.
    pub fn max<'a, I>(&self, state: &S, options: I) -> Option<f64>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        options
            .into_iter()
            .map(|o| self.get(state, o))
            .fold(None, |m, v| match m {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Returns `true` if the entry has been written.
    pub fn contains(&self, state: &S, option: &K) -> bool {
        self.values
            .get(state)
            .map_or(false, |row| row.contains_key(option))
    }

    /// Returns the number of written entries.
    pub fn len(&self) -> usize {
        self.values.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no entry has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over `(state, option, value)` of the written entries.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &K, f64)> {
        self.values
            .iter()
            .flat_map(|(s, row)| row.iter().map(move |(k, v)| (s, k, *v)))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let table = ValueTable::<(i32, i32), &str>::new();
        assert_eq!(table.get(&(0, 0), &"a"), 0.0);
        assert_eq!(table.get(&(5, -3), &"b"), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut table = ValueTable::new();
        table.set(&1u32, &'a', 0.5);
        table.set(&1u32, &'b', 0.7);
        table.set(&2u32, &'a', -1.0);

        assert_eq!(table.get(&1, &'a'), 0.5);
        assert_eq!(table.get(&1, &'b'), 0.7);
        assert_eq!(table.get(&2, &'a'), -1.0);
        assert_eq!(table.get(&2, &'b'), 0.0);
        assert!(table.contains(&2, &'a'));
        assert!(!table.contains(&2, &'b'));
        assert_eq!(table.len(), 3);
        assert_eq!(table.iter().count(), 3);
    }

    #[test]
    fn test_value_equal_keys_share_entry() {
        let mut table = ValueTable::new();
        table.set(&String::from("s0"), &String::from("north"), 1.5);

        let state = ["s", "0"].concat();
        let option = ["no", "rth"].concat();
        assert_eq!(table.get(&state, &option), 1.5);
    }

    #[test]
    fn test_max() {
        let mut table = ValueTable::new();
        table.set(&0u8, &1u8, -2.0);
        table.set(&0u8, &2u8, -0.5);

        assert_eq!(table.max(&0, [1u8, 2].iter()), Some(-0.5));
        // Unseen entries count as zero.
        assert_eq!(table.max(&0, [1u8, 2, 3].iter()), Some(0.0));
        assert_eq!(table.max(&0, std::iter::empty()), None);
    }
}
