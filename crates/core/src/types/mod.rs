//! Core types for Showroom.
//!
//! This module provides type-safe wrappers for catalog identifiers and money.

pub mod id;
pub mod price;

pub use id::*;
pub use price::{AmountError, Discount, Price};
