//! Utility functions and traits for [`ChainTable`].

use crate::ChainTable;

/// Extension trait providing convenience queries over a table.
pub trait TableExtensions<V> {
    /// Returns the stored keys as a Vec, in unspecified order.
    fn keys(&self) -> Vec<String>;

    /// Returns the stored values as a Vec, in unspecified order.
    fn values(&self) -> Vec<V>;

    /// Returns true if the table contains the given key.
    fn contains_key(&self, key: &str) -> bool;
}

impl<V: Clone> TableExtensions<V> for ChainTable<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Creates a `ChainTable` from an iterator of key-value pairs.
#[allow(dead_code)]
pub fn from_iter<V, I>(iter: I) -> ChainTable<V>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut table = ChainTable::new();

    for (key, value) in iter {
        table.insert(key, value);
    }

    table
}
