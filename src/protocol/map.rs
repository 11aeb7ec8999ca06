//! Case-insensitive ordered map
//!
//! LSCP parameter names arrive in whatever casing the server chooses
//! (`NAME:`, `Name:`, ...), so lookups normalize keys to lowercase. Parameter
//! blocks are small (a dozen entries at most), so the map is a plain vector
//! of entries and preserves first-insertion order for iteration.

/// A string-keyed map with case-insensitive keys and insertion-ordered
/// iteration.
///
/// Keys are lowercased at every access point; the stored values are kept
/// unchanged. Re-inserting an existing key overwrites the value in place and
/// keeps the original position.
///
/// ```
/// use samplerctl::protocol::CaseInsensitiveMap;
///
/// let mut map = CaseInsensitiveMap::new();
/// map.insert("Accept", "application/json");
/// assert_eq!(map.get("aCCEPT"), Some(&"application/json"));
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["accept"]);
/// ```
#[derive(Debug, Clone)]
pub struct CaseInsensitiveMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CaseInsensitiveMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value under the normalized key.
    ///
    /// Overwrites an existing entry for the same normalized key, keeping its
    /// original position in iteration order.
    pub fn insert(&mut self, key: impl AsRef<str>, value: V) {
        let key = key.as_ref().to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value case-insensitively
    pub fn get(&self, key: impl AsRef<str>) -> Option<&V> {
        let key = key.as_ref().to_lowercase();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Whether an entry exists for the normalized key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    /// Remove an entry by normalized key.
    ///
    /// Returns the removed value, or `None` if no entry existed (removal of
    /// an absent key is not an error).
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<V> {
        let key = key.as_ref().to_lowercase();
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(normalized_key, value)` pairs in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate normalized keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in first-insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V: PartialEq> PartialEq for CaseInsensitiveMap<V> {
    /// Maps are equal iff their normalized-key-to-value entries are equal,
    /// irrespective of original key casing or insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map(|o| o == v).unwrap_or(false))
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V> IntoIterator for CaseInsensitiveMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
