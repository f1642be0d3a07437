//! Shared markup normalization
//!
//! This crate turns raw content (markdown, hypertext, or plain text) into a
//! single navigable document structure consumed by every rule family, so
//! that checkers which should agree on document structure cannot diverge.

pub mod document;
pub mod strip;

pub use document::{Document, Heading, Image, Link};
pub use strip::strip_markup;
