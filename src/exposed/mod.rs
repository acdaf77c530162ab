//! The documented surface of the crate.
//!
//! Symbols defined here appear in rendered documentation and are re-exported
//! at the crate root, which is what makes them part of the published API.

pub mod entity;
pub mod ops;

pub use entity::PublicEntity;
pub use ops::sum;
