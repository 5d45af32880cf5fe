pub mod blog;
pub mod contact;
pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;
pub mod theme;
pub mod timeline;
