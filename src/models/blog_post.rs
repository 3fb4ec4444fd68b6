use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed blog categories. "ALL" is both a category and the archive's
/// pass-everything filter.
pub const BLOG_CATEGORIES: &[&str] = &[
    "ALL",
    "INVESTMENTS",
    "RETAIL",
    "BUSINESS",
    "FINANCE",
    "PRODUCTS",
    "LEGAL TECH",
];

pub fn is_blog_category(category: &str) -> bool {
    BLOG_CATEGORIES.contains(&category)
}

/// Moderation state of a community-submitted post. Posts created through
/// the admin console never carry a status.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            _ => Err(format!("invalid moderation status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Display string, e.g. "September 13, 2025".
    pub date: String,
    pub read_time: String,
    pub snippet: String,
    pub image: String,
    pub author: Author,
    /// Rendered post body as an HTML fragment.
    pub body: String,
    pub status: Option<ModerationStatus>,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogCreate {
    pub title: String,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub image: Option<String>,
    pub snippet: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub image: Option<String>,
    pub snippet: Option<String>,
    pub body: Option<String>,
}

/// A reader-submitted post headed for the moderation queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommunityBlogDraft {
    pub title: String,
    pub category: String,
    pub author_name: String,
    pub author_email: String,
    pub snippet: Option<String>,
    pub body: String,
}
