//! Focus tags: topical interest areas compared case-insensitively.
//!
//! Tags are normalised to lowercase at construction so membership and
//! overlap checks never re-case. [`FocusTags`] preserves insertion order,
//! which drives the order shared interests are reported in.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single topical interest, stored trimmed and lowercase.
///
/// # Examples
/// ```
/// use chainplay_core::FocusTag;
///
/// # fn main() -> Result<(), chainplay_core::FocusTagError> {
/// let tag = FocusTag::new("  DeFi ")?;
/// assert_eq!(tag.as_str(), "defi");
/// assert_eq!(tag.label(), "Defi");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct FocusTag(String);

/// Errors returned by [`FocusTag::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusTagError {
    /// The tag was empty or whitespace.
    #[error("focus tag must contain non-whitespace characters")]
    Empty,
}

impl FocusTag {
    /// Validate and construct a tag, trimming and lowercasing the input.
    ///
    /// # Errors
    /// Returns [`FocusTagError::Empty`] when nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, FocusTagError> {
        let normalised = raw.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(FocusTagError::Empty);
        }
        Ok(Self(normalised))
    }

    /// Return the normalised tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the tag with its first letter capitalised for display.
    #[must_use]
    pub fn label(&self) -> String {
        capitalise_first(&self.0)
    }
}

impl std::fmt::Display for FocusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FocusTag {
    type Error = FocusTagError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<FocusTag> for String {
    fn from(tag: FocusTag) -> Self {
        tag.0
    }
}

/// Insertion-ordered collection of distinct focus tags.
///
/// Duplicates are ignored on insertion. An empty collection is valid and
/// simply contributes nothing when profiles are compared.
///
/// # Examples
/// ```
/// use chainplay_core::{FocusTag, FocusTags};
///
/// # fn main() -> Result<(), chainplay_core::FocusTagError> {
/// let mut tags = FocusTags::new();
/// tags.insert(FocusTag::new("defi")?);
/// tags.insert(FocusTag::new("DEFI")?);
/// assert_eq!(tags.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<FocusTag>", into = "Vec<FocusTag>")
)]
pub struct FocusTags {
    tags: Vec<FocusTag>,
}

impl FocusTags {
    /// Construct an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Insert a tag, ignoring it when already present.
    ///
    /// Returns whether the tag was added.
    pub fn insert(&mut self, tag: FocusTag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Report whether no tags are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Report whether the collection contains `tag`.
    #[must_use]
    pub fn contains(&self, tag: &FocusTag) -> bool {
        self.tags.contains(tag)
    }

    /// Iterate over tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FocusTag> {
        self.tags.iter()
    }

    /// Tags present in both collections, in `self`'s insertion order.
    #[must_use]
    pub fn shared_with<'a>(&'a self, other: &Self) -> Vec<&'a FocusTag> {
        self.tags.iter().filter(|tag| other.contains(tag)).collect()
    }
}

impl From<Vec<FocusTag>> for FocusTags {
    fn from(raw: Vec<FocusTag>) -> Self {
        let mut tags = Self::new();
        for tag in raw {
            tags.insert(tag);
        }
        tags
    }
}

impl From<FocusTags> for Vec<FocusTag> {
    fn from(tags: FocusTags) -> Self {
        tags.tags
    }
}

impl FromIterator<FocusTag> for FocusTags {
    fn from_iter<I: IntoIterator<Item = FocusTag>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// Capitalise the first character of `value`.
pub(crate) fn capitalise_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
