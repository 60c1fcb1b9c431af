//! Menu Category

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed menu sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Burgers,
    Sides,
    Drinks,
    Desserts,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 4] = [
        Category::Burgers,
        Category::Sides,
        Category::Drinks,
        Category::Desserts,
    ];

    /// Stable identifier (matches the serde form)
    pub const fn id(&self) -> &'static str {
        match self {
            Category::Burgers => "burgers",
            Category::Sides => "sides",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
        }
    }

    /// Customer-facing tab label
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Burgers => "Burgers",
            Category::Sides => "Acompanhamentos",
            Category::Drinks => "Bebidas",
            Category::Desserts => "Sobremesas",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Category::Burgers => "🍔",
            Category::Sides => "🍟",
            Category::Drinks => "🥤",
            Category::Desserts => "🍫",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown category id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
