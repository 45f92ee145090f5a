//! Qualboard Core - data transforms for the quality-scan dashboard.
//!
//! The view layer fetches JSON from the report server and renders banners,
//! grids and trend charts; this crate owns the transformations in between.
//! Everything here is a pure function over plain values: no I/O, no shared
//! state, no clock reads. Safe to call concurrently without coordination.

pub mod dashboard;
pub mod error;
pub mod history;
pub mod notifications;

pub use dashboard::*;
pub use error::*;
pub use history::*;
pub use notifications::*;
