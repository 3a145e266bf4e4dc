//! Showroom Core - catalog types and queries.
//!
//! This crate holds everything about the catalog that does not touch the
//! outside world:
//! - [`document`] - The parsed catalog document and its sections
//! - [`model`] - Products, categories, company info, stores and editorial content
//! - [`query`] - Filtering, search, related items and featured selection
//! - [`pagination`] - Page slicing and per-view browse state
//!
//! # Architecture
//!
//! No I/O, no HTTP, no caching. Loading and memoizing the document is the
//! storefront's job; this crate only borrows from an already-parsed
//! [`Document`] and returns new lists.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod document;
pub mod error;
pub mod model;
pub mod pagination;
pub mod query;
pub mod types;

pub use document::{Document, Section};
pub use error::LookupError;
pub use pagination::{BrowseState, Page, paginate};
pub use types::*;
