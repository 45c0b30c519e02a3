//! Common types shared across the harness.
//!
//! This module groups the vocabulary types the rest of the crate builds on:
//! 1. **Fixed Point:** The Q8.8 value type and its conversion rules.
//! 2. **Errors:** The channel and decode failure taxonomy.

/// Channel and decode error types.
pub mod error;
/// Q8.8 fixed-point value type.
pub mod fixed;
