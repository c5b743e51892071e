//! Media category - derived from an attachment's MIME type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of an attachment, a pure function of its MIME type.
///
/// Data imported from elsewhere may carry an unrecognized category string;
/// those deserialize into `Other`, the fallback bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Video,
    #[serde(other)]
    Other,
}

impl MediaCategory {
    /// Derive the category from a MIME type
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.starts_with("video/") {
            Self::Video
        } else {
            Self::Other
        }
    }

    /// String form used on the wire and in query filters
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing filter: either everything or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(MediaCategory),
}

impl CategoryFilter {
    /// String form echoed back in listing responses
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(c) => c.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized filter strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category filter: {0}")]
pub struct ParseCategoryFilterError(String);

impl FromStr for CategoryFilter {
    type Err = ParseCategoryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "" => Ok(Self::All),
            "image" => Ok(Self::Category(MediaCategory::Image)),
            "video" => Ok(Self::Category(MediaCategory::Video)),
            "other" => Ok(Self::Category(MediaCategory::Other)),
            unknown => Err(ParseCategoryFilterError(unknown.to_string())),
        }
    }
}
