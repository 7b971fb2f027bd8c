//! Club categories and the keyword classifier
//!
//! Classification is a case-insensitive substring match against an
//! ordered list of keyword sets. The first set with any hit wins, so
//! the order of [`KEYWORD_RULES`] is part of the behavior: a club that
//! mentions both "tech" and "volunteer" is Technology, not Service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of category labels
///
/// Declaration order is the sort rank used for the output document,
/// with `Other` last.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Athletic,
    Service,
    Cultural,
    Recreational,
    Business,
    Technology,
    Sciences,
    #[default]
    Other,
}

impl Category {
    /// All categories in rank order
    pub const ALL: [Category; 8] = [
        Category::Athletic,
        Category::Service,
        Category::Cultural,
        Category::Recreational,
        Category::Business,
        Category::Technology,
        Category::Sciences,
        Category::Other,
    ];

    /// Position of this category in [`Category::ALL`]
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Athletic => "Athletic",
            Category::Service => "Service",
            Category::Cultural => "Cultural",
            Category::Recreational => "Recreational",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Sciences => "Sciences",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword cascade, checked top to bottom
pub const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (
        Category::Business,
        &[
            "finance",
            "business",
            "consult",
            "entrepreneur",
            "commerce",
            "sauder",
            "marketing",
        ],
    ),
    (
        Category::Technology,
        &[
            "code",
            "program",
            "developer",
            "software",
            "product management",
            "pm club",
            "data",
            "ai",
            "ml",
            "robot",
            "hackathon",
            "tech",
        ],
    ),
    (
        Category::Sciences,
        &[
            "biology",
            "physics",
            "chemistry",
            "science",
            "research",
            "neuroscience",
            "math",
            "kinesiology",
            "geology",
            "astronomy",
            "statistics",
            "biochem",
        ],
    ),
    (
        Category::Athletic,
        &[
            "sport",
            "athletic",
            "soccer",
            "basketball",
            "hockey",
            "climb",
            "martial",
            "yoga",
            "dance",
            "run",
            "rowing",
            "tennis",
            "badminton",
            "swim",
            "ultimate",
            "volleyball",
            "taekwondo",
            "muay thai",
        ],
    ),
    (
        Category::Service,
        &[
            "volunteer",
            "service",
            "outreach",
            "charity",
            "non-profit",
            "fundrais",
            "community",
            "brigade",
            "ems",
            "first aid",
        ],
    ),
    (
        Category::Cultural,
        &[
            "culture",
            "cultural",
            "chinese",
            "korean",
            "japanese",
            "indian",
            "persian",
            "filipino",
            "vietnamese",
            "latino",
            "hispanic",
            "african",
            "arab",
            "jewish",
            "islamic",
            "sikh",
        ],
    ),
    (
        Category::Recreational,
        &[
            "game",
            "gaming",
            "board game",
            "anime",
            "film",
            "photography",
            "recreation",
            "outdoor",
            "hiking",
            "improv",
            "music",
            "radio",
            "theatre",
            "clubhouse",
            "tabletop",
        ],
    ),
];

/// Guesses a category from a club's name, description and URL
///
/// Pure function: the same inputs always give the same category.
/// Falls back to [`Category::Other`] when no keyword matches.
pub fn classify(name: &str, description: &str, url: &str) -> Category {
    let haystack = format!("{} {} {}", name, description, url).to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}
