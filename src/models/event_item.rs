use serde::{Deserialize, Serialize};

/// Which side of the event card the image sits on.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventLayout {
    #[default]
    ImageFirst,
    TextFirst,
}

impl EventLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageFirst => "image-first",
            Self::TextFirst => "text-first",
        }
    }
}

impl std::fmt::Display for EventLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for EventLayout {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for EventLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image-first" => Ok(Self::ImageFirst),
            "text-first" => Ok(Self::TextFirst),
            _ => Err(format!("invalid event layout: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub layout: EventLayout,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub layout: Option<EventLayout>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub layout: Option<EventLayout>,
}
