use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The categories a new recipe can be filed under.
///
/// Recipes loaded from the bundled catalog may carry any label; this set only
/// constrains the add-recipe selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Appetizers,
    Entrees,
    Desserts,
    Salads,
    Breads,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Appetizers,
        Category::Entrees,
        Category::Desserts,
        Category::Salads,
        Category::Breads,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Appetizers => "Appetizers",
            Category::Entrees => "Entrees",
            Category::Desserts => "Desserts",
            Category::Salads => "Salads",
            Category::Breads => "Breads",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
