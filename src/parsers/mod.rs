pub mod html;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

/// Keys the HTML parser fills in besides `<meta>` names
pub const TITLE_KEY: &str = "title";
pub const CANONICAL_KEY: &str = "canonical";
pub const FAVICON_KEY: &str = "favicon";

/// Mapping of tag key (meta name/property, `title`, `canonical`, `favicon`) to its value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    tags: HashMap<String, String>,
}

impl TagMap {
    /// Creates an empty tag map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Returns the value for `key` if it is present and non-empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns the value for `key`, or an empty string
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TagMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
