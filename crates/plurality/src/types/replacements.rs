use std::mem;

use crate::types::Value;

/// Placeholder name to value mapping, in insertion order.
///
/// Names are stored without the leading `:` and matched case-insensitively
/// during substitution. Insertion order is kept so that names of equal
/// length are substituted in a predictable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, Value)>,
}

impl Replacements {
    /// Name of the replacement that always carries the selection count.
    pub const COUNT: &'static str = "count";

    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a replacement, returning the previous value.
    ///
    /// Names are compared case-insensitively; overwriting keeps the name
    /// and position of the existing entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| same_name(n, &name)) {
            return Some(mem::replace(&mut entry.1, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Set the reserved `count` replacement.
    pub fn set_count(&mut self, count: i64) {
        self.insert(Self::COUNT, count);
    }

    /// Look up a replacement by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| same_name(n, name))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Entries ordered longest name first; ties keep insertion order.
    pub(crate) fn longest_first(&self) -> Vec<(&str, &Value)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        sorted
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Replacements {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut replacements = Self::new();
        replacements.extend(iter);
        replacements
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Replacements {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
