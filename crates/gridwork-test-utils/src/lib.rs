//! Test utilities for gridwork development.
//!
//! Provides the published example input for every puzzle ([`examples`])
//! and small grid builders ([`fixtures`]) shared by unit and integration
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod examples;
pub mod fixtures;

pub use fixtures::{char_grid, numbered_grid};
