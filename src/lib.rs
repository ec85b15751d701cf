//! todoview — terminal viewer for a remote to-do list.
//!
//! The binary wires the workspace crates together; this library exposes the
//! pieces that integration tests import directly.
//!
//! # Architecture
//!
//! ```text
//! todoview-fetch ──► todoview-core::normalize ──► todoview-tui
//!                                   │
//!                                   └──► headless (stdout)
//! ```

pub mod headless;

pub use todoview_core::{config::Config, normalize, RefreshError, ShapeError, Todo};
