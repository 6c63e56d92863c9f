//! Common types and utilities for the shock value crates.
//!
//! This crate provides the pieces every other shock crate leans on:
//! - The error taxonomy (`ValueError`)
//! - Centralized limits (radix bounds, serializer depth, counter seeds)
//! - Tracing subscriber setup for debugging

// Error taxonomy shared by enums, integers and the serializer
pub mod error;
pub use error::{ValueError, ValueResult};

// Centralized limits and thresholds
pub mod limits;

// Opt-in tracing subscriber (SHOCK_LOG / SHOCK_LOG_FORMAT)
pub mod tracing_config;
