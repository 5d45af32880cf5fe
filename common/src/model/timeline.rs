use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineKind {
    Experience,
    Education,
}

/// One entry of the experience or education timeline on the About page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub kind: TimelineKind,
    pub title: String,
    pub organization: String,
    /// Free-form period such as `"2021 - Present"`.
    pub period: String,
    pub description: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub event: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub label: String,
    /// Material icon name.
    pub icon: String,
}
