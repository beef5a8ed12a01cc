pub mod languages;
pub mod templates;
pub mod translations;
