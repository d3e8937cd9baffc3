//! Shared types, the store adapter trait, and error types for the Plenum platform.
//!
//! This crate contains the foundational types that are shared between the
//! feature crates and the store adapter implementations. Extracting these
//! into a separate crate allows adapter crates to compile in parallel with
//! the feature modules.

pub mod error;
pub mod prelude;
pub mod store_adapter;

// vim: ts=4
