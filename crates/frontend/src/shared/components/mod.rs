pub mod card;
pub mod info_row;
pub mod loader;
pub mod section_title;
