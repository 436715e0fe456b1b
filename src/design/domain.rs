//! Core design domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, category::CategoryId};

/// A validated, non-empty design title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct DesignTitle(String);

impl DesignTitle {
    /// Create a design title.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyDesignTitle] if `title` is
    /// an empty or whitespace-only string.
    pub fn new(title: &str) -> Result<Self, Error> {
        let title = title.trim();

        if title.is_empty() {
            Err(Error::EmptyDesignTitle)
        } else {
            Ok(Self(title.to_string()))
        }
    }

    /// Create a design title without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`,
    /// because if the non-empty invariant is violated it will cause
    /// incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_string())
    }
}

impl AsRef<str> for DesignTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DesignTitle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesignTitle::new(s)
    }
}

impl Display for DesignTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a design.
pub type DesignId = i64;

/// A single portfolio item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Design {
    /// The ID of the design.
    pub id: DesignId,
    /// The display title.
    pub title: DesignTitle,
    /// An opaque reference to the image content, e.g. a URL or a path under
    /// the static file route. Image storage is out of scope for the server.
    pub image_url: String,
    /// The category this design belongs to, if any.
    ///
    /// When present, this always refers to an existing category. Deleting a
    /// category clears this field on all designs that referenced it.
    pub category_id: Option<CategoryId>,
    /// Whether the design is promoted for prominent display.
    pub featured: bool,
    /// When the design was created. Immutable.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The data needed to create a design.
///
/// New designs always start with `featured = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDesign {
    /// The display title.
    pub title: DesignTitle,
    /// The image reference. Must be non-empty, but is otherwise opaque.
    pub image_url: String,
    /// The category to file the design under, if any.
    pub category_id: Option<CategoryId>,
}

/// Form data for design creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DesignFormData {
    /// The raw design title, validated by [DesignTitle::new].
    pub title: String,
    /// The raw image reference.
    pub image_url: String,
    /// The selected category ID. An empty selection means no category.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<CategoryId>,
}

/// HTML selects submit an empty string for the "no category" option, which
/// serde would otherwise reject when parsing an `Option<i64>`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<CategoryId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;

    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
