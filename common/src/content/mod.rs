//! Hardcoded site content. Every function builds a fresh `Vec`; pages call
//! them once when they are created.

pub mod blog;
pub mod profile;
pub mod projects;
pub mod services;
pub mod skills;
pub mod testimonials;
pub mod timeline;

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
