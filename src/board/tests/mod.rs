//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Simple-move and jump generation
//! - `transition.rs` - Claimed-move application and win detection
//! - `validate.rs` - The validation pipeline
//! - `proptest.rs` - Property-based tests

mod proptest;
