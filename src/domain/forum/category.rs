use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technology,
    Community,
    Education,
    Announcements,
}

impl Category {
    pub fn next(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let index = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let index = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

/// Client-side filter applied to the forum list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }

    /// All, then every category in declaration order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::General),
            Self::Only(c) if c.next() == Category::General => Self::All,
            Self::Only(c) => Self::Only(c.next()),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Only(Category::iter().last().unwrap_or_default()),
            Self::Only(Category::General) => Self::All,
            Self::Only(c) => Self::Only(c.prev()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Only(c) => c.to_string(),
        }
    }

    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::iter().map(Self::Only))
            .collect()
    }
}
