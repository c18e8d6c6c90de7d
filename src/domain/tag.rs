use crate::domain::version::{self, ParsedVersion};
use crate::error::Result;
use std::fmt;
use tracing::debug;

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Tag version as "major.minor.patch" (e.g., "v1.2.3-rc.1" -> "1.2.3")
    pub fn mmp(&self) -> Result<String> {
        version::mmp(&self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// Semver tags of a repository, newest first
///
/// Every element parses as a semantic version. Tags of equal precedence keep
/// the order in which git reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    /// Build a sorted list from raw `git tag` output lines, dropping non-semver entries
    pub fn from_raw_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<(ParsedVersion, Tag)> = Vec::new();
        let mut dropped = 0usize;

        for line in lines {
            let name = line.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            match version::parse(name) {
                Ok(v) => parsed.push((v, Tag::new(name))),
                Err(_) => {
                    debug!(tag = name, "skipping non-semver tag");
                    dropped += 1;
                }
            }
        }

        // sort_by is stable, so equal-precedence tags stay in encounter order
        parsed.sort_by(|(a, _), (b, _)| version::compare_precedence(b, a));

        debug!(kept = parsed.len(), dropped, "sorted semver tags");

        TagList {
            tags: parsed.into_iter().map(|(_, tag)| tag).collect(),
        }
    }

    /// Newest tag
    pub fn latest(&self) -> Option<&Tag> {
        self.tags.first()
    }

    /// Oldest tag
    pub fn oldest(&self) -> Option<&Tag> {
        self.tags.last()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }
}

impl IntoIterator for TagList {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &TagList) -> Vec<&str> {
        list.iter().map(Tag::as_str).collect()
    }

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
        assert_eq!(tag, "v1.2.3");
        assert_eq!(tag.to_string(), "v1.2.3");
    }

    #[test]
    fn test_tag_mmp() {
        assert_eq!(Tag::new("v1.2.3-rc.1").mmp().unwrap(), "1.2.3");
    }

    #[test]
    fn test_sorts_descending() {
        let list = TagList::from_raw_lines(["v0.1.0", "v0.10.0", "v0.2.0", "v1.0.0"]);
        assert_eq!(names(&list), vec!["v1.0.0", "v0.10.0", "v0.2.0", "v0.1.0"]);
    }

    #[test]
    fn test_drops_non_semver_and_blank_lines() {
        let list = TagList::from_raw_lines([
            "v0.1.0",
            "",
            "latest",
            "release-2",
            "v1.2",
            "  ",
            "v0.2.0\r",
            "V0.3.0",
        ]);
        assert_eq!(names(&list), vec!["v0.2.0", "v0.1.0"]);
    }

    #[test]
    fn test_prerelease_sorts_below_release() {
        let list = TagList::from_raw_lines([
            "v1.0.0-rc.1",
            "v1.0.0",
            "v1.0.0-beta.11",
            "v1.0.0-beta.2",
        ]);
        assert_eq!(
            names(&list),
            vec!["v1.0.0", "v1.0.0-rc.1", "v1.0.0-beta.11", "v1.0.0-beta.2"]
        );
    }

    #[test]
    fn test_equal_precedence_keeps_encounter_order() {
        let list = TagList::from_raw_lines(["1.0.0", "v0.9.0", "v1.0.0", "1.0.0+build.1"]);
        assert_eq!(names(&list), vec!["1.0.0", "v1.0.0", "1.0.0+build.1", "v0.9.0"]);
    }

    #[test]
    fn test_latest_and_oldest() {
        let list = TagList::from_raw_lines(["v0.1.0", "v0.2.0"]);
        assert_eq!(list.latest().unwrap(), "v0.2.0");
        assert_eq!(list.oldest().unwrap(), "v0.1.0");
        assert!(list.contains("v0.2.0"));
        assert!(!list.contains("v0.3.0"));
    }

    #[test]
    fn test_empty_list() {
        let list = TagList::from_raw_lines(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.latest().is_none());
        assert!(list.oldest().is_none());
    }

    #[test]
    fn test_deterministic() {
        let raw = ["v2.0.0", "v1.0.0", "1.0.0", "v3.0.0-alpha", "junk"];
        assert_eq!(TagList::from_raw_lines(raw), TagList::from_raw_lines(raw));
    }
}
