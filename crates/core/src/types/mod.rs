//! Core types for Crescendo.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod username;

pub use username::{Username, UsernameError};
