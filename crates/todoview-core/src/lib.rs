//! todoview-core — shared types for the todoview workspace.
//!
//! This crate owns everything that does not touch the network or the
//! terminal: the normalised [`Todo`] record, the refresh error taxonomy, the
//! payload normalizer, and the configuration file.
//!
//! # Pipeline
//!
//! ```text
//! Fetcher ──► decode ──► Normalizer ──► UI table
//!    │           │            │
//!    └───────────┴────────────┴──► RefreshError
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use error::{RefreshError, ShapeError};
pub use normalizer::{normalize, normalize_str, JsonKind};
pub use types::{Todo, MISSING_ID};
