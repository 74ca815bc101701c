use super::error::TrackerError;
use std::fmt;
use std::str::FromStr;

/// One of the four fixed goal groupings
///
/// The set is closed: stored data is only ever read under these four keys,
/// and reports always walk them in `Category::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Academic,
    Spiritual,
    Financial,
    Personal,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Academic,
        Category::Spiritual,
        Category::Financial,
        Category::Personal,
    ];

    /// Key used in the persisted state blob
    pub fn key(self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Spiritual => "spiritual",
            Category::Financial => "financial",
            Category::Personal => "personal",
        }
    }

    /// Section title used in listings and exported reports
    pub fn title(self) -> &'static str {
        match self {
            Category::Academic => "Academic Goals",
            Category::Spiritual => "Spiritual & Fellowship Goals",
            Category::Financial => "Financial Discipline",
            Category::Personal => "Personal Care & Lifestyle",
        }
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Category::Academic),
            "spiritual" => Ok(Category::Spiritual),
            "financial" => Ok(Category::Financial),
            "personal" => Ok(Category::Personal),
            _ => Err(TrackerError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
