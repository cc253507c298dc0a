//! Piecewise shift maps over integer intervals.
//!
//! A [`RangeMap`] sends each key inside one of its source [`Range`]s to the
//! same offset inside the paired destination range, and every other key to
//! itself. [`FastRangeMap`] is the same mapping expanded into a point table
//! at construction time.
//!
//! Maps take and return `i64`, so stages chain by feeding one map's output
//! into the next:
//!
//! ```
//! use gridwork_range::{Range, RangeMap};
//!
//! let soil = RangeMap::from_triples([(98, 50, 2), (50, 52, 48)]).unwrap();
//! let fertilizer = RangeMap::from_triples([(15, 0, 37), (52, 37, 2), (0, 39, 15)]).unwrap();
//!
//! assert_eq!(fertilizer.get(soil.get(79)), 81);
//! assert!(Range::new(98, 2).unwrap().includes(99));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod map;
pub mod range;

pub use error::RangeError;
pub use map::{FastRangeMap, RangeMap};
pub use range::Range;
