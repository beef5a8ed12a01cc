pub mod language;
pub mod template;
pub mod translation;

pub use language::*;
pub use template::*;
pub use translation::*;
