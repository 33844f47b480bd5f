//! Product categories.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The set is closed: the admin form offers exactly these values and the
/// catalog is persisted with their lowercase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Vases and jugs.
    #[default]
    Vases,
    /// Bowls and salad bowls.
    Bowls,
    /// Plates and serving dishes.
    Plates,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 3] = [Self::Vases, Self::Bowls, Self::Plates];

    /// Persisted name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vases => "vases",
            Self::Bowls => "bowls",
            Self::Plates => "plates",
        }
    }

    /// Human-readable label for the admin form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vases => "Vases & jugs",
            Self::Bowls => "Bowls & salad bowls",
            Self::Plates => "Plates & dishes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vases" => Ok(Self::Vases),
            "bowls" => Ok(Self::Bowls),
            "plates" => Ok(Self::Plates),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
