use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub repository: String,
    pub live_demo: Option<String>,
}
