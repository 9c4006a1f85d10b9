//! Insertion-ordered tag sets for skills and interests.
//!
//! Tags are normalized to lowercase on insert and never duplicated, which
//! makes the "no duplicates" invariant structural instead of checked at each
//! use site. Insertion order is preserved for display.

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered set of lowercase tags.
///
/// # Example
///
/// ```rust
/// use hackmate::TagSet;
///
/// let mut skills = TagSet::new();
/// skills.insert("Python");
/// skills.insert("python"); // duplicate, ignored
/// skills.insert("React");
///
/// assert_eq!(skills.len(), 2);
/// assert!(skills.contains("PYTHON"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Builds a tag set from an iterator of tags.
    ///
    /// Tags are trimmed, lowercased, and deduplicated; blank tags are dropped.
    pub fn from_tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = Self::new();
        for tag in tags {
            set.insert(tag.as_ref());
        }
        set
    }

    /// Inserts a tag, normalizing it to trimmed lowercase.
    ///
    /// Returns false if the tag was blank or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty() || self.contains(&normalized) {
            return false;
        }
        self.tags.push(normalized);
        true
    }

    /// Checks membership, ignoring case.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Checks whether any tag contains `term` as a substring, ignoring case.
    #[must_use]
    pub fn any_contains(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Returns the tags of `self` that also appear in `other`, in the order
    /// they appear in `self`. Comparison ignores case.
    #[must_use]
    pub fn matches_in(&self, other: &Self) -> Self {
        Self {
            tags: self
                .tags
                .iter()
                .filter(|tag| other.contains(tag))
                .cloned()
                .collect(),
        }
    }

    /// Iterates over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'de> Deserialize<'de> for TagSet {
    /// Deserializes through [`TagSet::from_tags`], so tags loaded from
    /// storage are normalized and deduplicated the same way inserted ones are.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_tags(tags))
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_and_dedupes() {
        let mut set = TagSet::new();
        assert!(set.insert("  Python "));
        assert!(!set.insert("python"));
        assert!(!set.insert("PYTHON"));
        assert!(set.insert("React"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["python", "react"]);
    }

    #[test]
    fn test_insert_rejects_blank() {
        let mut set = TagSet::new();
        assert!(!set.insert(""));
        assert!(!set.insert("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains_ignores_case() {
        let set = TagSet::from_tags(["machine learning"]);
        assert!(set.contains("Machine Learning"));
        assert!(!set.contains("machine"));
    }

    #[test]
    fn test_any_contains_substring() {
        let set = TagSet::from_tags(["machine learning", "react"]);
        assert!(set.any_contains("machine"));
        assert!(set.any_contains("ACT"));
        assert!(!set.any_contains("python"));
    }

    #[test]
    fn test_matches_in_preserves_self_order() {
        let required = TagSet::from_tags(["python", "machine learning", "react", "nodejs"]);
        let mine = TagSet::from_tags(["react", "python"]);

        let matched = required.matches_in(&mine);
        assert_eq!(matched.iter().collect::<Vec<_>>(), vec!["python", "react"]);
    }

    #[test]
    fn test_serde_transparent() {
        let set = TagSet::from_tags(["python", "react"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["python","react"]"#);

        let parsed: TagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_deserialize_normalizes_hand_edited_tags() {
        // Hand-edited storage may carry mixed-case or duplicate tags
        let parsed: TagSet = serde_json::from_str(r#"["Python","python"," React "]"#).unwrap();
        assert_eq!(parsed.iter().collect::<Vec<_>>(), vec!["python", "react"]);
        assert!(parsed.contains("PYTHON"));

        let mine = TagSet::from_tags(["python"]);
        assert_eq!(parsed.matches_in(&mine).len(), 1);
    }
}
