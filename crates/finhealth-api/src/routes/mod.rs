//! API route handlers.

pub mod assess;
pub mod health;
pub mod locales;
