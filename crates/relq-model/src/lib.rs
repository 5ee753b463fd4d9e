//! # relq-model
//!
//! Entity model and dataset for relq. This is an internal crate; use the
//! `relq` facade instead.
//!
//! Entities are plain records built once when a [`Dataset`] is loaded and
//! read-only afterwards. Relations between them are resolved by value
//! (`CountryCity`, ids), never by pointer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod dataset;
pub mod entity;
mod fixtures;
pub mod keys;

pub use contact::ContactRules;
pub use dataset::Dataset;
pub use entity::{Customer, Order, Product, Supplier};
pub use keys::{CountryCity, YearMonth};
pub use relq_core::{Error, Result};
