//! Catalog document loading.
//!
//! A [`DocumentSource`] produces the raw JSON; the [`CatalogStore`] fetches it
//! once, parses it into a [`showroom_core::Document`] and hands out shared
//! references to it.

pub mod error;
pub mod source;
pub mod store;

pub use error::{CatalogError, SourceError};
pub use source::{DataSource, DocumentSource, FileSource, HttpSource};
pub use store::CatalogStore;
