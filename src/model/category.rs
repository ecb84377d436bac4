//! Category filter and list presentation style.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Demographic category carried by every user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Wire value used by the fetch source.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active list filter. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No filter - every record.
    #[default]
    All,
    /// Only male records.
    Male,
    /// Only female records.
    Female,
}

impl Category {
    /// Tab order, left to right.
    pub const ALL: [Category; 3] = [Category::All, Category::Male, Category::Female];

    /// Value for the `gender` query parameter, `None` when unfiltered.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Male => Some(Gender::Male.as_str()),
            Category::Female => Some(Gender::Female.as_str()),
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Male => "Male",
            Category::Female => "Female",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::All => 0,
            Category::Male => 1,
            Category::Female => 2,
        }
    }

    /// Next tab to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next tab to the left, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Category::All),
            "male" => Ok(Category::Male),
            "female" => Ok(Category::Female),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// List presentation. Orthogonal to data state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// One card per row.
    #[default]
    Single,
    /// Two cards per row.
    Double,
}

impl ListStyle {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            ListStyle::Single => ListStyle::Double,
            ListStyle::Double => ListStyle::Single,
        }
    }

    /// Cards rendered side by side.
    pub fn columns(self) -> usize {
        match self {
            ListStyle::Single => 1,
            ListStyle::Double => 2,
        }
    }
}

impl FromStr for ListStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(ListStyle::Single),
            "double" => Ok(ListStyle::Double),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A string that names no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown variant: {0:?}")]
pub struct UnknownVariant(pub String);
