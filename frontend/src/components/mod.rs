pub mod footer;
pub mod header;
pub mod sheet;
pub mod theme_switcher;
