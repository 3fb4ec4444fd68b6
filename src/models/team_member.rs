use serde::{Deserialize, Serialize};

/// Sub-teams shown in the directory, in display order. "Board Members" is
/// also a valid member category alongside "faculty".
pub const SUB_TEAMS: &[&str] = &[
    "Board Members",
    "Tech Team",
    "Design Team",
    "Social Media Team",
    "Events Team",
    "Content Team",
    "Corporate Team",
    "Finance Team",
    "Operations Team",
];

/// Every recognized member category: faculty first, then the sub-teams.
pub const MEMBER_CATEGORIES: &[&str] = &[
    "faculty",
    "Board Members",
    "Tech Team",
    "Design Team",
    "Social Media Team",
    "Events Team",
    "Content Team",
    "Corporate Team",
    "Finance Team",
    "Operations Team",
];

pub fn is_member_category(category: &str) -> bool {
    MEMBER_CATEGORIES.contains(&category)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub linkedin: String,
    pub category: String,
}

/// Payload for adding a member; the id is generated by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub role: String,
    pub category: String,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

/// Partial payload merged over an existing member; absent fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}
