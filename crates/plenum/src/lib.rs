//! Plenum is a self-hosted assembly management application.
//!
//! # Features
//!
//! - Motion management
//!     - configurable numbering, line length, and preambles
//!     - amendments and supporter requirements
//!     - workflow-driven motion states
//! - Instance configuration
//!     - declarative config variable catalog
//!     - admin settings UI driven by the catalog
//!     - pluggable persistence adapters

// Re-export shared types and adapter traits from plenum-types
pub use plenum_types::error;
pub use plenum_types::store_adapter;

// Feature crate re-exports
pub use plenum_core::config;
pub use plenum_motions as motions;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder, init_logging};

// vim: ts=4
