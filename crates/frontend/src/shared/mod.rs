pub mod components;
pub mod date_utils;
pub mod entity_page;
pub mod export;
pub mod geo;
pub mod icons;
pub mod list_utils;
