//! Coordinate and orientation value types for gridwork.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! plain value types every grid consumer shares: [`Position`] coordinates,
//! the four axis-aligned [`Direction`]s, whole-grid [`Rotation`]s, and the
//! [`Ray`] traversal key.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod position;
pub mod ray;

pub use direction::{Direction, Rotation};
pub use position::Position;
pub use ray::Ray;
