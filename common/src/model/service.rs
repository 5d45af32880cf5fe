use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    Development,
    Design,
    Analytics,
    Mobile,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Development,
        ServiceCategory::Design,
        ServiceCategory::Analytics,
        ServiceCategory::Mobile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Development => "Development",
            ServiceCategory::Design => "Design",
            ServiceCategory::Analytics => "Analytics",
            ServiceCategory::Mobile => "Mobile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
    pub category: ServiceCategory,
    /// Material icon name.
    pub icon: String,
    /// Gradient classes for the card accent.
    pub color: String,
}
