//! Core domain entities.
//!
//! - [`Link`] - A web URL / deeplink pair
//! - [`StoredLink`] - A persisted pair with its row metadata
//! - [`PageKind`] - The page a link addresses

pub mod link;

pub use link::{Link, PageKind, StoredLink};
