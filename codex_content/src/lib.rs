//! # Codex Content
//!
//! The data side of the encyclopedia: the fixed set of categories, the item
//! records shown to readers, and access to the content store that holds them.
//! This crate knows how resources are addressed and decoded; it makes no
//! routing or presentation decisions.

pub mod category;
pub mod items;
pub mod store;

pub use category::*;
pub use items::*;
pub use store::*;
