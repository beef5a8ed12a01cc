pub mod google_translate;

pub use google_translate::*;
