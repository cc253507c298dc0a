//! Runner behind the `solve` binary.
//!
//! [`Args`] is the clap surface; it converts into a [`SolveConfig`], which
//! is validated once and then handed to [`run`]. Everything except
//! installing the subscriber and choosing the exit code lives here so it
//! can be tested without spawning a process.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod args;
pub mod config;
pub mod error;
pub mod run;

pub use args::Args;
pub use config::{ConfigError, Selection, SolveConfig};
pub use error::SolveError;
pub use run::{run, RunSummary};
