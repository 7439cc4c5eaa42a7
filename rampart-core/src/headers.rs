//! Case-insensitive header storage.
//!
//! Header names are compared with ASCII case folding, as HTTP requires, while
//! the spelling used on insertion is preserved for output. Entries keep their
//! insertion order and a name may appear more than once (see [`HeaderMap::append`]).
//!
//! Responses rarely carry more than a dozen headers, so entries live inline in
//! a `SmallVec` and lookups are a linear scan.

use smallvec::SmallVec;
use std::fmt;

/// Number of headers stored without a heap allocation.
pub const INLINE_HEADERS: usize = 12;

#[derive(Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    value: String,
}

impl Entry {
    #[inline]
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered header map with case-insensitive names.
///
/// ```rust
/// use rampart_core::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Cross-Origin-Resource-Policy", "same-origin");
///
/// assert!(headers.contains("cross-origin-resource-policy"));
/// assert_eq!(headers.get("CROSS-ORIGIN-RESOURCE-POLICY"), Some("same-origin"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: SmallVec<[Entry; INLINE_HEADERS]>,
}

impl HeaderMap {
    /// Create an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: SmallVec::new_const(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether at least one header with this name is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.is(name))
    }

    /// First value stored under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.is(name))
            .map(|e| e.value.as_str())
    }

    /// Every value stored under `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is(name))
            .map(|e| e.value.as_str())
            .collect()
    }

    /// Set `name` to `value`, replacing the first existing entry with that name.
    ///
    /// Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.is(&name)) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.entries.push(Entry { name, value });
        None
    }

    /// Add an entry without touching existing ones with the same name.
    #[inline]
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Remove every entry named `name`, returning the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let first = self
            .entries
            .iter()
            .position(|e| e.is(name))
            .map(|pos| self.entries[pos].value.clone());
        self.entries.retain(|e| !e.is(name));
        first
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.value.as_str()))
    }
}

impl fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in iter {
            map.append(name, value);
        }
        map
    }
}
