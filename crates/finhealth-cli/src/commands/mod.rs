//! CLI command implementations.

pub mod assess;
pub mod locales;

pub use assess::AssessArgs;
pub use locales::LocalesArgs;
