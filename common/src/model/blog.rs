use serde::{Deserialize, Serialize};

/// Card data for the blog index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique, URL-safe identifier used in `/blog/{slug}`.
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub image: String,
    pub tags: Vec<String>,
    pub read_time: Option<String>,
    pub featured: bool,
}

/// Full article shown on `/blog/{slug}`.
///
/// `body` is Markdown; the frontend renders it to HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDetail {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub image: String,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
}
